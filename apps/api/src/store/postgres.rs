use anyhow::anyhow;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::account::{Account, Role};
use crate::models::profile::{CandidateProfile, CompanyProfile, Profile};
use crate::store::{
    duplicate_email, ensure_profile_owner, AccountRepository, CandidateRepository,
    CompanyRepository,
};

/// PostgreSQL-backed store. Profiles are kept as JSONB documents keyed by owner.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AccountRow {
    id: Uuid,
    email: String,
    password_hash: String,
    role: String,
    display_name: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<AccountRow> for Account {
    type Error = AppError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        let role = Role::parse(&row.role)
            .ok_or_else(|| AppError::Internal(anyhow!("Unknown role '{}' on account {}", row.role, row.id)))?;
        Ok(Account {
            id: row.id,
            email: row.email,
            password_hash: row.password_hash,
            role,
            display_name: row.display_name,
            created_at: row.created_at,
        })
    }
}

fn map_insert_error(e: sqlx::Error, email: &str) -> AppError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => duplicate_email(email),
        _ => AppError::Database(e),
    }
}

#[async_trait]
impl AccountRepository for PgStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AppError> {
        let row: Option<AccountRow> = sqlx::query_as("SELECT * FROM accounts WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        row.map(Account::try_from).transpose()
    }

    async fn get(&self, id: Uuid) -> Result<Option<Account>, AppError> {
        let row: Option<AccountRow> = sqlx::query_as("SELECT * FROM accounts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(Account::try_from).transpose()
    }

    async fn count(&self) -> Result<u64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM accounts")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.max(0) as u64)
    }

    async fn create_with_profile(&self, account: Account, profile: Profile) -> Result<(), AppError> {
        ensure_profile_owner(&account, &profile)?;
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO accounts (id, email, password_hash, role, display_name, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(account.id)
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(account.role.as_str())
        .bind(&account.display_name)
        .bind(account.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_insert_error(e, &account.email))?;

        match profile {
            Profile::Candidate(p) => {
                sqlx::query("INSERT INTO candidate_profiles (owner_id, data) VALUES ($1, $2)")
                    .bind(p.owner_id)
                    .bind(Json(&p))
                    .execute(&mut *tx)
                    .await?;
            }
            Profile::Company(p) => {
                sqlx::query("INSERT INTO company_profiles (owner_id, data) VALUES ($1, $2)")
                    .bind(p.owner_id)
                    .bind(Json(&p))
                    .execute(&mut *tx)
                    .await?;
            }
        }

        tx.commit().await?;
        info!("Inserted account {} ({})", account.id, account.role.as_str());
        Ok(())
    }
}

#[async_trait]
impl CandidateRepository for PgStore {
    async fn all(&self) -> Result<Vec<CandidateProfile>, AppError> {
        let rows: Vec<Json<CandidateProfile>> =
            sqlx::query_scalar("SELECT data FROM candidate_profiles ORDER BY created_at, owner_id")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(|Json(p)| p).collect())
    }

    async fn get(&self, owner_id: Uuid) -> Result<Option<CandidateProfile>, AppError> {
        let row: Option<Json<CandidateProfile>> =
            sqlx::query_scalar("SELECT data FROM candidate_profiles WHERE owner_id = $1")
                .bind(owner_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(|Json(p)| p))
    }

    async fn save(&self, profile: CandidateProfile) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO candidate_profiles (owner_id, data)
            VALUES ($1, $2)
            ON CONFLICT (owner_id) DO UPDATE SET data = EXCLUDED.data, updated_at = now()
            "#,
        )
        .bind(profile.owner_id)
        .bind(Json(&profile))
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl CompanyRepository for PgStore {
    async fn all(&self) -> Result<Vec<CompanyProfile>, AppError> {
        let rows: Vec<Json<CompanyProfile>> =
            sqlx::query_scalar("SELECT data FROM company_profiles ORDER BY created_at, owner_id")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(|Json(p)| p).collect())
    }

    async fn get(&self, owner_id: Uuid) -> Result<Option<CompanyProfile>, AppError> {
        let row: Option<Json<CompanyProfile>> =
            sqlx::query_scalar("SELECT data FROM company_profiles WHERE owner_id = $1")
                .bind(owner_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(|Json(p)| p))
    }

    async fn save(&self, profile: CompanyProfile) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO company_profiles (owner_id, data)
            VALUES ($1, $2)
            ON CONFLICT (owner_id) DO UPDATE SET data = EXCLUDED.data, updated_at = now()
            "#,
        )
        .bind(profile.owner_id)
        .bind(Json(&profile))
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
