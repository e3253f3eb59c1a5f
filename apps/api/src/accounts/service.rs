use chrono::Utc;
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::accounts::password::{hash_password, verify_password};
use crate::errors::AppError;
use crate::models::account::{Account, Role};
use crate::models::profile::{CandidateProfile, CompanyProfile, Profile};
use crate::store::AccountRepository;

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    /// Display name; becomes the candidate name or the company name.
    pub name: String,
    #[serde(alias = "userType")]
    pub role: Role,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Creates an account and its initial, mostly empty profile in one step.
pub async fn register(
    accounts: &dyn AccountRepository,
    req: RegisterRequest,
) -> Result<Account, AppError> {
    let email = req.email.trim();
    let name = req.name.trim();
    if email.is_empty() {
        return Err(AppError::Validation("email is required".to_string()));
    }
    if req.password.is_empty() {
        return Err(AppError::Validation("password is required".to_string()));
    }
    if name.is_empty() {
        return Err(AppError::Validation("name is required".to_string()));
    }

    if accounts.find_by_email(email).await?.is_some() {
        return Err(crate::store::duplicate_email(email));
    }

    let account = Account {
        id: Uuid::new_v4(),
        email: email.to_string(),
        password_hash: hash_password(&req.password),
        role: req.role,
        display_name: name.to_string(),
        created_at: Utc::now(),
    };
    let profile = match req.role {
        Role::Candidate => Profile::Candidate(CandidateProfile::new(account.id, name, email)),
        Role::Company => Profile::Company(CompanyProfile::new(account.id, name, email)),
    };

    accounts.create_with_profile(account.clone(), profile).await?;
    info!("Registered {} account {}", account.role.as_str(), account.id);
    Ok(account)
}

/// Checks credentials. Unknown email and wrong password are indistinguishable to the caller.
pub async fn login(accounts: &dyn AccountRepository, req: LoginRequest) -> Result<Account, AppError> {
    let account = accounts.find_by_email(req.email.trim()).await?;
    match account {
        Some(account) if verify_password(&req.password, &account.password_hash) => Ok(account),
        _ => {
            warn!("Rejected login for {}", req.email.trim());
            Err(AppError::Unauthorized)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{CandidateRepository, CompanyRepository, MemoryStore};

    fn register_request(email: &str, role: Role) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            password: "123456".to_string(),
            name: "María García".to_string(),
            role,
        }
    }

    #[tokio::test]
    async fn test_register_candidate_creates_profile() {
        let store = MemoryStore::new();
        let account = register(&store, register_request("maria@example.com", Role::Candidate))
            .await
            .unwrap();

        let profile = CandidateRepository::get(&store, account.id).await.unwrap().unwrap();
        assert_eq!(profile.name, "María García");
        assert_eq!(profile.email, "maria@example.com");
        assert!(profile.skills.is_empty());
        assert!(CompanyRepository::get(&store, account.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_register_company_creates_profile() {
        let store = MemoryStore::new();
        let account = register(&store, register_request("hr@acme.test", Role::Company))
            .await
            .unwrap();
        let profile = CompanyRepository::get(&store, account.id).await.unwrap().unwrap();
        assert_eq!(profile.company_name, "María García");
    }

    #[tokio::test]
    async fn test_register_rejects_duplicate_email() {
        let store = MemoryStore::new();
        register(&store, register_request("dup@example.com", Role::Candidate))
            .await
            .unwrap();
        let err = register(&store, register_request("dup@example.com", Role::Company))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_register_requires_fields() {
        let store = MemoryStore::new();
        let mut req = register_request("  ", Role::Candidate);
        assert!(matches!(
            register(&store, req.clone()).await.unwrap_err(),
            AppError::Validation(_)
        ));
        req.email = "ok@example.com".to_string();
        req.password = String::new();
        assert!(matches!(
            register(&store, req).await.unwrap_err(),
            AppError::Validation(_)
        ));
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_login_checks_password() {
        let store = MemoryStore::new();
        let registered = register(&store, register_request("juan@example.com", Role::Candidate))
            .await
            .unwrap();

        let ok = login(
            &store,
            LoginRequest {
                email: "juan@example.com".to_string(),
                password: "123456".to_string(),
            },
        )
        .await
        .unwrap();
        assert_eq!(ok.id, registered.id);

        let err = login(
            &store,
            LoginRequest {
                email: "juan@example.com".to_string(),
                password: "wrong".to_string(),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized));

        let err = login(
            &store,
            LoginRequest {
                email: "nobody@example.com".to_string(),
                password: "123456".to_string(),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized));
    }
}
