use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::errors::AppError;

/// Header carrying the id of the account performing a write.
pub const ACCOUNT_HEADER: &str = "x-account-id";

/// The account on whose behalf a request is made, taken from [`ACCOUNT_HEADER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActingAccount(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for ActingAccount
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(ACCOUNT_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| Uuid::parse_str(v.trim()).ok())
            .map(ActingAccount)
            .ok_or(AppError::Unauthorized)
    }
}

impl ActingAccount {
    /// Only the owner may act on their own records.
    pub fn ensure_owner(&self, owner_id: Uuid) -> Result<(), AppError> {
        if self.0 == owner_id {
            Ok(())
        } else {
            Err(AppError::Forbidden)
        }
    }
}
