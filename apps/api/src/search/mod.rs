// Candidate/company search: predicate building, narrowing, experience
// aggregation and frequency ranking. Everything except `handlers` is pure.

pub mod engine;
pub mod experience;
pub mod filters;
pub mod handlers;
pub mod ranking;

pub use engine::{search_candidates, search_companies};
pub use filters::{CompanyFilterSpec, FilterSpec};
pub use ranking::{popular_locations, popular_skills};
