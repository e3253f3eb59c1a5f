use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One position in a candidate's employment history.
///
/// Dates are `YYYY-MM` strings as entered by the candidate. They are kept
/// verbatim; the experience aggregator decides how to read them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, alias = "current")]
    pub is_current: bool,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    #[serde(alias = "userId")]
    pub owner_id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, alias = "profileImage", skip_serializing_if = "Option::is_none")]
    pub profile_image_ref: Option<String>,
    #[serde(default, alias = "cvFile", skip_serializing_if = "Option::is_none")]
    pub cv_file_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<WorkExperience>,
}

impl CandidateProfile {
    /// The empty profile created alongside a new candidate account.
    pub fn new(owner_id: Uuid, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            owner_id,
            name: name.into(),
            email: email.into(),
            phone: None,
            location: None,
            profile_image_ref: None,
            cv_file_ref: None,
            summary: None,
            skills: Vec::new(),
            experience: Vec::new(),
        }
    }

    /// Drops the end date of every current position.
    pub fn normalize_experience(&mut self) {
        for exp in self.experience.iter_mut().filter(|e| e.is_current) {
            exp.end_date = None;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    #[serde(alias = "userId")]
    pub owner_id: Uuid,
    pub company_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
}

impl CompanyProfile {
    pub fn new(owner_id: Uuid, company_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            owner_id,
            company_name: company_name.into(),
            email: email.into(),
            phone: None,
            location: None,
            website: None,
            description: None,
            industry: None,
        }
    }
}

/// The profile that is created together with an account at registration.
#[derive(Debug, Clone, PartialEq)]
pub enum Profile {
    Candidate(CandidateProfile),
    Company(CompanyProfile),
}

impl Profile {
    pub fn owner_id(&self) -> Uuid {
        match self {
            Profile::Candidate(p) => p.owner_id,
            Profile::Company(p) => p.owner_id,
        }
    }
}
