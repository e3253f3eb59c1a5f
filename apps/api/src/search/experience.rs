use chrono::{Datelike, NaiveDate};

use crate::models::profile::WorkExperience;

/// Total years of experience across all entries, rounded half-up to one decimal.
///
/// Current positions run until `today`. Entries whose dates cannot be read,
/// or whose range is negative, contribute nothing.
pub fn total_experience_years(experience: &[WorkExperience], today: NaiveDate) -> f64 {
    if experience.is_empty() {
        return 0.0;
    }

    let total_months: i64 = experience
        .iter()
        .map(|exp| i64::from(entry_months(exp, today)))
        .sum();

    ((total_months as f64 / 12.0) * 10.0).round() / 10.0
}

/// Clamped month span of one entry.
fn entry_months(exp: &WorkExperience, today: NaiveDate) -> i32 {
    let Some(start) = parse_year_month(&exp.start_date) else {
        return 0;
    };
    let end = if exp.is_current {
        today
    } else {
        match exp.end_date.as_deref().and_then(parse_year_month) {
            Some(end) => end,
            None => return 0,
        }
    };
    months_between(start, end).max(0)
}

/// Parses `YYYY-MM` as the first day of that month.
pub fn parse_year_month(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", value.trim()), "%Y-%m-%d").ok()
}

/// Whole calendar months from `start` to `end`; days are ignored.
fn months_between(start: NaiveDate, end: NaiveDate) -> i32 {
    let years = end.year() - start.year();
    let months = end.month() as i32 - start.month() as i32;
    years * 12 + months
}
