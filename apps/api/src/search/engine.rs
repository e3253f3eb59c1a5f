//! Search engine: successive narrowing of a candidate or company list.
//!
//! Each active predicate retains the records it matches; predicates are
//! ANDed and input order is preserved. Missing optional fields on a record
//! fail any predicate that reads them.

use chrono::{NaiveDate, Utc};

use crate::models::profile::{CandidateProfile, CompanyProfile};
use crate::search::experience::total_experience_years;
use crate::search::filters::{CandidatePredicate, CompanyFilterSpec, CompanyPredicate, FilterSpec};

/// Filters `candidates` against `filters`, evaluating current positions as of today (UTC).
pub fn search_candidates(candidates: Vec<CandidateProfile>, filters: &FilterSpec) -> Vec<CandidateProfile> {
    search_candidates_at(candidates, filters, Utc::now().date_naive())
}

/// Same as [`search_candidates`] with an explicit evaluation date.
pub fn search_candidates_at(
    mut candidates: Vec<CandidateProfile>,
    filters: &FilterSpec,
    today: NaiveDate,
) -> Vec<CandidateProfile> {
    for predicate in filters.predicates() {
        candidates.retain(|c| predicate.matches(c, today));
    }
    candidates
}

pub fn search_companies(mut companies: Vec<CompanyProfile>, filters: &CompanyFilterSpec) -> Vec<CompanyProfile> {
    for predicate in filters.predicates() {
        companies.retain(|c| predicate.matches(c));
    }
    companies
}

impl CandidatePredicate {
    pub fn matches(&self, candidate: &CandidateProfile, today: NaiveDate) -> bool {
        match self {
            CandidatePredicate::Term(term) => {
                contains(&candidate.name, term)
                    || contains_opt(candidate.summary.as_deref(), term)
                    || candidate.skills.iter().any(|s| contains(s, term))
                    || candidate.experience.iter().any(|exp| {
                        contains(&exp.company, term)
                            || contains(&exp.position, term)
                            || contains(&exp.description, term)
                    })
            }
            CandidatePredicate::Location(location) => {
                contains_opt(candidate.location.as_deref(), location)
            }
            CandidatePredicate::Skills(wanted) => wanted
                .iter()
                .any(|w| candidate.skills.iter().any(|s| contains(s, w))),
            CandidatePredicate::Level(level) => {
                level.contains(total_experience_years(&candidate.experience, today))
            }
        }
    }
}

impl CompanyPredicate {
    pub fn matches(&self, company: &CompanyProfile) -> bool {
        match self {
            CompanyPredicate::Term(term) => {
                contains(&company.company_name, term)
                    || contains_opt(company.description.as_deref(), term)
                    || contains_opt(company.industry.as_deref(), term)
            }
            CompanyPredicate::Location(location) => {
                contains_opt(company.location.as_deref(), location)
            }
            CompanyPredicate::Industry(industry) => company
                .industry
                .as_deref()
                .map(|i| i.to_lowercase() == *industry)
                .unwrap_or(false),
        }
    }
}

/// `needle` must already be lowercased.
fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn contains_opt(haystack: Option<&str>, needle: &str) -> bool {
    haystack.map(|h| contains(h, needle)).unwrap_or(false)
}
