use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::account::Account;
use crate::models::profile::{CandidateProfile, CompanyProfile, Profile};
use crate::store::{
    duplicate_email, ensure_profile_owner, AccountRepository, CandidateRepository,
    CompanyRepository,
};

#[derive(Default)]
struct Inner {
    accounts: Vec<Account>,
    candidates: Vec<CandidateProfile>,
    companies: Vec<CompanyProfile>,
}

/// Process-local store. One lock covers all three collections so that an
/// account and its profile always appear together.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.accounts.iter().find(|a| a.email == email).cloned())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Account>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.accounts.iter().find(|a| a.id == id).cloned())
    }

    async fn count(&self) -> Result<u64, AppError> {
        Ok(self.inner.read().await.accounts.len() as u64)
    }

    async fn create_with_profile(&self, account: Account, profile: Profile) -> Result<(), AppError> {
        ensure_profile_owner(&account, &profile)?;
        let mut inner = self.inner.write().await;
        if inner.accounts.iter().any(|a| a.email == account.email) {
            return Err(duplicate_email(&account.email));
        }
        inner.accounts.push(account);
        match profile {
            Profile::Candidate(p) => inner.candidates.push(p),
            Profile::Company(p) => inner.companies.push(p),
        }
        Ok(())
    }
}

#[async_trait]
impl CandidateRepository for MemoryStore {
    async fn all(&self) -> Result<Vec<CandidateProfile>, AppError> {
        Ok(self.inner.read().await.candidates.clone())
    }

    async fn get(&self, owner_id: Uuid) -> Result<Option<CandidateProfile>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.candidates.iter().find(|p| p.owner_id == owner_id).cloned())
    }

    async fn save(&self, profile: CandidateProfile) -> Result<(), AppError> {
        let mut inner = self.inner.write().await;
        match inner.candidates.iter().position(|p| p.owner_id == profile.owner_id) {
            Some(i) => inner.candidates[i] = profile,
            None => inner.candidates.push(profile),
        }
        Ok(())
    }
}

#[async_trait]
impl CompanyRepository for MemoryStore {
    async fn all(&self) -> Result<Vec<CompanyProfile>, AppError> {
        Ok(self.inner.read().await.companies.clone())
    }

    async fn get(&self, owner_id: Uuid) -> Result<Option<CompanyProfile>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.companies.iter().find(|p| p.owner_id == owner_id).cloned())
    }

    async fn save(&self, profile: CompanyProfile) -> Result<(), AppError> {
        let mut inner = self.inner.write().await;
        match inner.companies.iter().position(|p| p.owner_id == profile.owner_id) {
            Some(i) => inner.companies[i] = profile,
            None => inner.companies.push(profile),
        }
        Ok(())
    }
}
