//! Predicate builder: turns a partially filled `FilterSpec` into the
//! minimal, ordered list of predicates the search engine has to apply.
//!
//! A field that is absent, empty, or set to its "no restriction" sentinel
//! produces no predicate at all. Needles are lowercased once here so the
//! engine only lowercases the haystack.

use serde::{Deserialize, Serialize};

/// Industry values that mean "all industries".
const INDUSTRY_SENTINELS: &[&str] = &["todas", "todos", "all", "any"];

/// Seniority band derived from aggregated experience years.
/// Parsed case-insensitively; an empty string means `Any`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ExperienceLevel {
    Junior,
    Mid,
    Senior,
    #[default]
    Any,
}

impl TryFrom<String> for ExperienceLevel {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "junior" => Ok(ExperienceLevel::Junior),
            "mid" => Ok(ExperienceLevel::Mid),
            "senior" => Ok(ExperienceLevel::Senior),
            "any" | "" => Ok(ExperienceLevel::Any),
            other => Err(format!("unknown experience level: {other}")),
        }
    }
}

impl ExperienceLevel {
    /// junior ≤ 2.0 < mid ≤ 5.0 < senior
    pub fn contains(self, years: f64) -> bool {
        match self {
            ExperienceLevel::Junior => years <= 2.0,
            ExperienceLevel::Mid => years > 2.0 && years <= 5.0,
            ExperienceLevel::Senior => years > 5.0,
            ExperienceLevel::Any => true,
        }
    }
}

/// Candidate search criteria. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSpec {
    pub search_term: Option<String>,
    pub location: Option<String>,
    pub skills: Option<Vec<String>>,
    pub experience_level: Option<ExperienceLevel>,
    /// Accepted for symmetry with [`CompanyFilterSpec`]. Candidate profiles
    /// carry no industry, so candidate search never evaluates it.
    pub industry: Option<String>,
}

/// Company search criteria. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyFilterSpec {
    pub search_term: Option<String>,
    pub location: Option<String>,
    pub industry: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CandidatePredicate {
    /// Lowercased term matched against name, summary, skills and experience.
    Term(String),
    Location(String),
    /// Lowercased requested skills; any one of them is enough.
    Skills(Vec<String>),
    Level(ExperienceLevel),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CompanyPredicate {
    Term(String),
    Location(String),
    /// Lowercased industry, compared for equality.
    Industry(String),
}

impl FilterSpec {
    /// Active predicates in application order: term, location, skills, level.
    pub fn predicates(&self) -> Vec<CandidatePredicate> {
        let mut predicates = Vec::new();

        if let Some(term) = active_text(&self.search_term) {
            predicates.push(CandidatePredicate::Term(term));
        }
        if let Some(location) = active_text(&self.location) {
            predicates.push(CandidatePredicate::Location(location));
        }
        if let Some(skills) = self.skills.as_ref().filter(|s| !s.is_empty()) {
            predicates.push(CandidatePredicate::Skills(
                skills.iter().map(|s| s.to_lowercase()).collect(),
            ));
        }
        match self.experience_level {
            Some(ExperienceLevel::Any) | None => {}
            Some(level) => predicates.push(CandidatePredicate::Level(level)),
        }

        predicates
    }
}

impl CompanyFilterSpec {
    /// Active predicates in application order: term, location, industry.
    pub fn predicates(&self) -> Vec<CompanyPredicate> {
        let mut predicates = Vec::new();

        if let Some(term) = active_text(&self.search_term) {
            predicates.push(CompanyPredicate::Term(term));
        }
        if let Some(location) = active_text(&self.location) {
            predicates.push(CompanyPredicate::Location(location));
        }
        if let Some(industry) = active_text(&self.industry).filter(|i| !is_industry_sentinel(i)) {
            predicates.push(CompanyPredicate::Industry(industry));
        }

        predicates
    }
}

/// Lowercased value of a text field, or `None` when the field is absent,
/// empty or whitespace only.
fn active_text(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .map(str::to_lowercase)
}

/// `value` must already be lowercased.
fn is_industry_sentinel(value: &str) -> bool {
    INDUSTRY_SENTINELS.contains(&value.trim())
}
