//! Frequency ranking: most common skills and locations across a candidate population.

use std::collections::HashMap;

use crate::models::profile::CandidateProfile;

pub const POPULAR_SKILLS_LIMIT: usize = 20;
pub const POPULAR_LOCATIONS_LIMIT: usize = 10;

/// Lowercased skills ordered by how many times they occur, most frequent first.
/// Every occurrence counts, including repeats within one profile.
pub fn popular_skills(candidates: &[CandidateProfile]) -> Vec<String> {
    let skills = candidates
        .iter()
        .flat_map(|c| c.skills.iter().map(String::as_str));
    rank_by_frequency(skills, POPULAR_SKILLS_LIMIT)
}

/// Lowercased locations ordered by frequency. Candidates without a location are skipped.
pub fn popular_locations(candidates: &[CandidateProfile]) -> Vec<String> {
    let locations = candidates
        .iter()
        .filter_map(|c| c.location.as_deref())
        .filter(|l| !l.is_empty());
    rank_by_frequency(locations, POPULAR_LOCATIONS_LIMIT)
}

/// Ties keep first-encountered order.
fn rank_by_frequency<'a>(values: impl Iterator<Item = &'a str>, limit: usize) -> Vec<String> {
    let mut tally: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for value in values {
        let normalized = value.to_lowercase();
        match index.get(&normalized) {
            Some(&i) => tally[i].1 += 1,
            None => {
                index.insert(normalized.clone(), tally.len());
                tally.push((normalized, 1));
            }
        }
    }

    // sort_by is stable
    tally.sort_by(|a, b| b.1.cmp(&a.1));
    tally.truncate(limit);
    tally.into_iter().map(|(value, _)| value).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn make_candidate(location: Option<&str>, skills: &[&str]) -> CandidateProfile {
        let mut c = CandidateProfile::new(Uuid::new_v4(), "Test", "test@example.com");
        c.location = location.map(str::to_string);
        c.skills = skills.iter().map(|s| s.to_string()).collect();
        c
    }

    #[test]
    fn test_skills_are_counted_case_insensitively() {
        let candidates = vec![
            make_candidate(None, &["React"]),
            make_candidate(None, &["react", "Vue"]),
        ];
        assert_eq!(popular_skills(&candidates), vec!["react", "vue"]);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let candidates = vec![
            make_candidate(None, &["Go", "Rust", "SQL"]),
            make_candidate(None, &["sql", "rust"]),
        ];
        // rust and sql both 2; rust was seen first
        assert_eq!(popular_skills(&candidates), vec!["rust", "sql", "go"]);
    }

    #[test]
    fn test_duplicate_skills_in_one_profile_count_twice() {
        let candidates = vec![
            make_candidate(None, &["Figma"]),
            make_candidate(None, &["Sketch", "sketch"]),
        ];
        assert_eq!(popular_skills(&candidates), vec!["sketch", "figma"]);
    }

    #[test]
    fn test_skills_truncated_to_twenty() {
        let skills: Vec<String> = (0..30).map(|i| format!("skill-{i}")).collect();
        let refs: Vec<&str> = skills.iter().map(String::as_str).collect();
        let candidates = vec![make_candidate(None, &refs)];
        let popular = popular_skills(&candidates);
        assert_eq!(popular.len(), POPULAR_SKILLS_LIMIT);
        assert_eq!(popular[0], "skill-0");
    }

    #[test]
    fn test_locations_skip_missing_and_truncate_to_ten() {
        let mut candidates = vec![
            make_candidate(Some("Lima"), &[]),
            make_candidate(None, &[]),
            make_candidate(Some(""), &[]),
            make_candidate(Some("Cusco"), &[]),
            make_candidate(Some("LIMA"), &[]),
        ];
        assert_eq!(popular_locations(&candidates), vec!["lima", "cusco"]);

        for i in 0..15 {
            candidates.push(make_candidate(Some(format!("City {i}").as_str()), &[]));
        }
        let popular = popular_locations(&candidates);
        assert_eq!(popular.len(), POPULAR_LOCATIONS_LIMIT);
        assert_eq!(popular[0], "lima");
    }

    #[test]
    fn test_empty_population() {
        assert!(popular_skills(&[]).is_empty());
        assert!(popular_locations(&[]).is_empty());
    }
}
