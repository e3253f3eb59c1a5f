use std::sync::Arc;

use crate::store::{AccountRepository, CandidateRepository, CompanyRepository, MemoryStore};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<dyn AccountRepository>,
    pub candidates: Arc<dyn CandidateRepository>,
    pub companies: Arc<dyn CompanyRepository>,
}

impl AppState {
    /// Wires all three repositories to one store.
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: AccountRepository + CandidateRepository + CompanyRepository + 'static,
    {
        Self {
            accounts: store.clone(),
            candidates: store.clone(),
            companies: store,
        }
    }

    /// State over a fresh `MemoryStore`.
    pub fn in_memory() -> Self {
        Self::from_store(Arc::new(MemoryStore::new()))
    }
}
