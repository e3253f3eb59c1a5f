use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::accounts::service::{login, register, LoginRequest, RegisterRequest};
use crate::errors::AppError;
use crate::models::account::AccountView;
use crate::state::AppState;

/// POST /api/v1/auth/register
pub async fn handle_register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AccountView>), AppError> {
    let account = register(state.accounts.as_ref(), req).await?;
    Ok((StatusCode::CREATED, Json(AccountView::from(&account))))
}

/// POST /api/v1/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AccountView>, AppError> {
    let account = login(state.accounts.as_ref(), req).await?;
    Ok(Json(AccountView::from(&account)))
}

/// GET /api/v1/accounts/:id
pub async fn handle_get_account(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AccountView>, AppError> {
    let account = state
        .accounts
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Account {id} not found")))?;
    Ok(Json(AccountView::from(&account)))
}
