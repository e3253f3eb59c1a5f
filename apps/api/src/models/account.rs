use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which side of the marketplace an account belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[serde(alias = "candidato")]
    Candidate,
    #[serde(alias = "empresa")]
    Company,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Candidate => "candidate",
            Role::Company => "company",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "candidate" | "candidato" => Some(Role::Candidate),
            "company" | "empresa" => Some(Role::Company),
            _ => None,
        }
    }
}

/// A registered account. Never mutated after registration.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    /// `salt$hex(sha256(salt || password))`
    pub password_hash: String,
    pub role: Role,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
}

/// Public projection of an [`Account`]; the password digest never leaves the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountView {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Account> for AccountView {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            email: account.email.clone(),
            role: account.role,
            display_name: account.display_name.clone(),
            created_at: account.created_at,
        }
    }
}
