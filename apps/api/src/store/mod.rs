//! Record store: repository traits the services and search handlers consume.
//!
//! `AppState` carries each repository as `Arc<dyn …>`; `MemoryStore` backs
//! local runs and tests, `PgStore` backs deployments with `DATABASE_URL`.
//! Read paths report absence as an empty list or `None`, never as an error.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::account::Account;
use crate::models::profile::{CandidateProfile, CompanyProfile, Profile};

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AppError>;

    async fn get(&self, id: Uuid) -> Result<Option<Account>, AppError>;

    async fn count(&self) -> Result<u64, AppError>;

    /// Persists the account and its profile together, or neither.
    /// Fails with `AppError::Conflict` when the email is already registered.
    async fn create_with_profile(&self, account: Account, profile: Profile) -> Result<(), AppError>;
}

#[async_trait]
pub trait CandidateRepository: Send + Sync {
    /// All candidate profiles in registration order.
    async fn all(&self) -> Result<Vec<CandidateProfile>, AppError>;

    async fn get(&self, owner_id: Uuid) -> Result<Option<CandidateProfile>, AppError>;

    /// Upserts by `owner_id`.
    async fn save(&self, profile: CandidateProfile) -> Result<(), AppError>;
}

#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// All company profiles in registration order.
    async fn all(&self) -> Result<Vec<CompanyProfile>, AppError>;

    async fn get(&self, owner_id: Uuid) -> Result<Option<CompanyProfile>, AppError>;

    /// Upserts by `owner_id`.
    async fn save(&self, profile: CompanyProfile) -> Result<(), AppError>;
}

/// A registration profile must belong to the account it is created with.
pub(crate) fn ensure_profile_owner(account: &Account, profile: &Profile) -> Result<(), AppError> {
    if profile.owner_id() != account.id {
        return Err(AppError::Validation(format!(
            "Profile owner {} does not match account {}",
            profile.owner_id(),
            account.id
        )));
    }
    Ok(())
}

pub(crate) fn duplicate_email(email: &str) -> AppError {
    AppError::Conflict(format!("Email {email} is already registered"))
}
