use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::accounts::acting::ActingAccount;
use crate::errors::AppError;
use crate::models::profile::{CandidateProfile, CompanyProfile};
use crate::profiles::service::{update_candidate_profile, update_company_profile};
use crate::state::AppState;

/// GET /api/v1/candidates
pub async fn handle_list_candidates(
    State(state): State<AppState>,
) -> Result<Json<Vec<CandidateProfile>>, AppError> {
    Ok(Json(state.candidates.all().await?))
}

/// GET /api/v1/candidates/:owner_id
pub async fn handle_get_candidate(
    State(state): State<AppState>,
    Path(owner_id): Path<Uuid>,
) -> Result<Json<CandidateProfile>, AppError> {
    state
        .candidates
        .get(owner_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Candidate profile {owner_id} not found")))
}

/// PUT /api/v1/candidates/:owner_id
pub async fn handle_update_candidate(
    State(state): State<AppState>,
    acting: ActingAccount,
    Path(owner_id): Path<Uuid>,
    Json(profile): Json<CandidateProfile>,
) -> Result<Json<CandidateProfile>, AppError> {
    let saved = update_candidate_profile(state.candidates.as_ref(), acting, owner_id, profile).await?;
    Ok(Json(saved))
}

/// GET /api/v1/companies
pub async fn handle_list_companies(
    State(state): State<AppState>,
) -> Result<Json<Vec<CompanyProfile>>, AppError> {
    Ok(Json(state.companies.all().await?))
}

/// GET /api/v1/companies/:owner_id
pub async fn handle_get_company(
    State(state): State<AppState>,
    Path(owner_id): Path<Uuid>,
) -> Result<Json<CompanyProfile>, AppError> {
    state
        .companies
        .get(owner_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Company profile {owner_id} not found")))
}

/// PUT /api/v1/companies/:owner_id
pub async fn handle_update_company(
    State(state): State<AppState>,
    acting: ActingAccount,
    Path(owner_id): Path<Uuid>,
    Json(profile): Json<CompanyProfile>,
) -> Result<Json<CompanyProfile>, AppError> {
    let saved = update_company_profile(state.companies.as_ref(), acting, owner_id, profile).await?;
    Ok(Json(saved))
}
