pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::accounts::handlers as accounts;
use crate::profiles::handlers as profiles;
use crate::search::handlers as search;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Accounts
        .route("/api/v1/auth/register", post(accounts::handle_register))
        .route("/api/v1/auth/login", post(accounts::handle_login))
        .route("/api/v1/accounts/:id", get(accounts::handle_get_account))
        // Profiles
        .route("/api/v1/candidates", get(profiles::handle_list_candidates))
        .route(
            "/api/v1/candidates/:owner_id",
            get(profiles::handle_get_candidate).put(profiles::handle_update_candidate),
        )
        .route("/api/v1/companies", get(profiles::handle_list_companies))
        .route(
            "/api/v1/companies/:owner_id",
            get(profiles::handle_get_company).put(profiles::handle_update_company),
        )
        // Search
        .route(
            "/api/v1/search/candidates",
            post(search::handle_search_candidates),
        )
        .route(
            "/api/v1/search/companies",
            post(search::handle_search_companies),
        )
        .route(
            "/api/v1/insights/popular-skills",
            get(search::handle_popular_skills),
        )
        .route(
            "/api/v1/insights/popular-locations",
            get(search::handle_popular_locations),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::accounts::acting::ACCOUNT_HEADER;

    fn test_state() -> AppState {
        AppState::in_memory()
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        account: Option<Uuid>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(id) = account {
            builder = builder.header(ACCOUNT_HEADER, id.to_string());
        }
        let body = match body {
            Some(v) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };
        let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn register(app: &Router, email: &str, name: &str, role: &str) -> Uuid {
        let (status, body) = send(
            app,
            Method::POST,
            "/api/v1/auth/register",
            None,
            Some(json!({"email": email, "password": "123456", "name": name, "role": role})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["id"].as_str().unwrap().parse().unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(test_state());
        let (status, body) = send(&app, Method::GET, "/health", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_register_login_and_duplicate() {
        let app = build_router(test_state());
        let id = register(&app, "ana@example.com", "Ana", "candidato").await;

        let (status, body) = send(&app, Method::GET, &format!("/api/v1/candidates/{id}"), None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Ana");

        let (status, body) = send(&app, Method::GET, &format!("/api/v1/accounts/{id}"), None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["role"], "candidate");
        assert!(body.get("passwordHash").is_none());

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/auth/register",
            None,
            Some(json!({"email": "ana@example.com", "password": "x", "name": "Ana 2", "role": "company"})),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "CONFLICT");

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/auth/login",
            None,
            Some(json!({"email": "ana@example.com", "password": "123456"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], id.to_string());

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/v1/auth/login",
            None,
            Some(json!({"email": "ana@example.com", "password": "nope"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_profile_update_is_owner_only() {
        let app = build_router(test_state());
        let ana = register(&app, "ana@example.com", "Ana", "candidate").await;
        let luis = register(&app, "luis@example.com", "Luis", "candidate").await;
        let uri = format!("/api/v1/candidates/{ana}");
        let profile = json!({
            "ownerId": ana,
            "name": "Ana",
            "email": "ana@example.com",
            "location": "Lima",
            "skills": ["Go"],
            "experience": []
        });

        let (status, _) = send(&app, Method::PUT, &uri, None, Some(profile.clone())).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = send(&app, Method::PUT, &uri, Some(luis), Some(profile.clone())).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, body) = send(&app, Method::PUT, &uri, Some(ana), Some(profile)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["location"], "Lima");

        let (status, _) = send(
            &app,
            Method::GET,
            &format!("/api/v1/candidates/{}", Uuid::new_v4()),
            None,
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_search_and_insights() {
        let app = build_router(test_state());
        for (email, name, location, skills) in [
            ("ana@example.com", "Ana", "Lima", vec!["Go", "React"]),
            ("luis@example.com", "Luis", "Cusco", vec!["Python", "react"]),
        ] {
            let id = register(&app, email, name, "candidate").await;
            let profile = json!({
                "ownerId": id,
                "name": name,
                "email": email,
                "location": location,
                "skills": skills,
            });
            let (status, _) = send(
                &app,
                Method::PUT,
                &format!("/api/v1/candidates/{id}"),
                Some(id),
                Some(profile),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
        }

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/search/candidates",
            None,
            Some(json!({"location": "lima"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 1);
        assert_eq!(body["results"][0]["name"], "Ana");

        let (_, body) = send(&app, Method::POST, "/api/v1/search/candidates", None, Some(json!({}))).await;
        assert_eq!(body["total"], 2);

        let (status, body) = send(&app, Method::GET, "/api/v1/insights/popular-skills", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!(["react", "go", "python"]));

        let (_, body) = send(&app, Method::GET, "/api/v1/insights/popular-locations", None, None).await;
        assert_eq!(body, json!(["lima", "cusco"]));
    }

    #[tokio::test]
    async fn test_company_search_with_sentinel() {
        let app = build_router(test_state());
        let id = register(&app, "hr@acme.test", "Acme", "empresa").await;
        let profile = json!({
            "ownerId": id,
            "companyName": "Acme",
            "email": "hr@acme.test",
            "industry": "Tecnología"
        });
        let (status, _) = send(
            &app,
            Method::PUT,
            &format!("/api/v1/companies/{id}"),
            Some(id),
            Some(profile),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        register(&app, "hr@other.test", "Other", "company").await;

        let (_, body) = send(
            &app,
            Method::POST,
            "/api/v1/search/companies",
            None,
            Some(json!({"industry": "todas"})),
        )
        .await;
        assert_eq!(body["total"], 2);

        let (_, body) = send(
            &app,
            Method::POST,
            "/api/v1/search/companies",
            None,
            Some(json!({"industry": "tecnología"})),
        )
        .await;
        assert_eq!(body["total"], 1);
        assert_eq!(body["results"][0]["companyName"], "Acme");
    }
}
