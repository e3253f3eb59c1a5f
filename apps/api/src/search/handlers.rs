use axum::{extract::State, Json};
use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;
use crate::models::profile::{CandidateProfile, CompanyProfile};
use crate::search::{
    popular_locations, popular_skills, search_candidates, search_companies, CompanyFilterSpec,
    FilterSpec,
};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SearchResponse<T> {
    pub total: usize,
    pub results: Vec<T>,
}

impl<T> From<Vec<T>> for SearchResponse<T> {
    fn from(results: Vec<T>) -> Self {
        Self {
            total: results.len(),
            results,
        }
    }
}

/// POST /api/v1/search/candidates
pub async fn handle_search_candidates(
    State(state): State<AppState>,
    Json(filters): Json<FilterSpec>,
) -> Result<Json<SearchResponse<CandidateProfile>>, AppError> {
    let population = state.candidates.all().await?;
    let scanned = population.len();
    let results = search_candidates(population, &filters);
    debug!("Candidate search kept {} of {scanned}", results.len());
    Ok(Json(results.into()))
}

/// POST /api/v1/search/companies
pub async fn handle_search_companies(
    State(state): State<AppState>,
    Json(filters): Json<CompanyFilterSpec>,
) -> Result<Json<SearchResponse<CompanyProfile>>, AppError> {
    let population = state.companies.all().await?;
    let scanned = population.len();
    let results = search_companies(population, &filters);
    debug!("Company search kept {} of {scanned}", results.len());
    Ok(Json(results.into()))
}

/// GET /api/v1/insights/popular-skills
pub async fn handle_popular_skills(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, AppError> {
    let population = state.candidates.all().await?;
    Ok(Json(popular_skills(&population)))
}

/// GET /api/v1/insights/popular-locations
pub async fn handle_popular_locations(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, AppError> {
    let population = state.candidates.all().await?;
    Ok(Json(popular_locations(&population)))
}
