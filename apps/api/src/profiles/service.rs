use tracing::info;
use uuid::Uuid;

use crate::accounts::acting::ActingAccount;
use crate::errors::AppError;
use crate::models::profile::{CandidateProfile, CompanyProfile};
use crate::store::{CandidateRepository, CompanyRepository};

/// Replaces a candidate profile. Only its owner may do this, and only once it exists.
pub async fn update_candidate_profile(
    candidates: &dyn CandidateRepository,
    acting: ActingAccount,
    owner_id: Uuid,
    mut profile: CandidateProfile,
) -> Result<CandidateProfile, AppError> {
    acting.ensure_owner(owner_id)?;
    ensure_same_owner(profile.owner_id, owner_id)?;
    if candidates.get(owner_id).await?.is_none() {
        return Err(AppError::NotFound(format!("Candidate profile {owner_id} not found")));
    }

    profile.normalize_experience();
    candidates.save(profile.clone()).await?;
    info!("Updated candidate profile {owner_id}");
    Ok(profile)
}

/// Replaces a company profile. Same ownership rules as candidates.
pub async fn update_company_profile(
    companies: &dyn CompanyRepository,
    acting: ActingAccount,
    owner_id: Uuid,
    profile: CompanyProfile,
) -> Result<CompanyProfile, AppError> {
    acting.ensure_owner(owner_id)?;
    ensure_same_owner(profile.owner_id, owner_id)?;
    if companies.get(owner_id).await?.is_none() {
        return Err(AppError::NotFound(format!("Company profile {owner_id} not found")));
    }

    companies.save(profile.clone()).await?;
    info!("Updated company profile {owner_id}");
    Ok(profile)
}

fn ensure_same_owner(body_owner: Uuid, path_owner: Uuid) -> Result<(), AppError> {
    if body_owner == path_owner {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "ownerId {body_owner} does not match profile {path_owner}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::WorkExperience;
    use crate::store::MemoryStore;

    async fn seeded_store() -> (MemoryStore, CandidateProfile) {
        let store = MemoryStore::new();
        let profile = CandidateProfile::new(Uuid::new_v4(), "Ana", "ana@example.com");
        CandidateRepository::save(&store, profile.clone()).await.unwrap();
        (store, profile)
    }

    #[tokio::test]
    async fn test_owner_can_update() {
        let (store, mut profile) = seeded_store().await;
        profile.skills = vec!["Go".to_string()];
        profile.experience = vec![WorkExperience {
            id: "1".to_string(),
            company: "Acme".to_string(),
            position: "Dev".to_string(),
            start_date: "2022-01".to_string(),
            end_date: Some("2023-01".to_string()),
            is_current: true,
            description: String::new(),
        }];

        let owner = profile.owner_id;
        let saved = update_candidate_profile(&store, ActingAccount(owner), owner, profile)
            .await
            .unwrap();
        assert_eq!(saved.experience[0].end_date, None);

        let stored = CandidateRepository::get(&store, owner).await.unwrap().unwrap();
        assert_eq!(stored.skills, vec!["Go"]);
        assert_eq!(stored.experience[0].end_date, None);
    }

    #[tokio::test]
    async fn test_other_account_is_forbidden() {
        let (store, profile) = seeded_store().await;
        let owner = profile.owner_id;
        let err = update_candidate_profile(&store, ActingAccount(Uuid::new_v4()), owner, profile)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden));
    }

    #[tokio::test]
    async fn test_body_owner_must_match_path() {
        let (store, mut profile) = seeded_store().await;
        let owner = profile.owner_id;
        profile.owner_id = Uuid::new_v4();
        let err = update_candidate_profile(&store, ActingAccount(owner), owner, profile)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_missing_profile_is_not_created() {
        let store = MemoryStore::new();
        let owner = Uuid::new_v4();
        let profile = CompanyProfile::new(owner, "Acme", "hr@acme.test");
        let err = update_company_profile(&store, ActingAccount(owner), owner, profile)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(CompanyRepository::all(&store).await.unwrap().is_empty());
    }
}
