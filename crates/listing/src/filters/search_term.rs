//! Free-text search over names and specialization tags.
//!
//! This runs first in the pipeline: a search term usually narrows the
//! collection harder than any slider does.

use crate::criteria::ListingQuery;
use crate::traits::ProfileFilter;
use directory::LawyerProfile;

/// Retains profiles whose name or any specialization tag contains the
/// search term, case-insensitively.
///
/// ## Algorithm
/// The query holds the term already lowercased. For each profile, lowercase
/// the name and each tag and test for a substring match. An empty term
/// retains everything.
pub struct SearchTermFilter;

impl ProfileFilter for SearchTermFilter {
    fn name(&self) -> &str {
        "SearchTermFilter"
    }

    fn apply(&self, profiles: Vec<LawyerProfile>, query: &ListingQuery) -> Vec<LawyerProfile> {
        let term = query.search_term.as_str();
        if term.is_empty() {
            return profiles;
        }

        profiles
            .into_iter()
            .filter(|profile| {
                profile.name.to_lowercase().contains(term)
                    || profile
                        .specializations
                        .iter()
                        .any(|tag| tag.to_lowercase().contains(term))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::FilterCriteria;
    use directory::LawyerProfile;

    fn profile(id: &str, name: &str, tags: &[&str]) -> LawyerProfile {
        LawyerProfile {
            id: id.to_string(),
            name: name.to_string(),
            specializations: tags.iter().map(|tag| tag.to_string()).collect(),
            ..LawyerProfile::default()
        }
    }

    fn query(term: &str) -> ListingQuery {
        ListingQuery::new(&FilterCriteria::default(), term)
    }

    #[test]
    fn test_empty_term_retains_all() {
        let profiles = vec![profile("1", "Kausik", &[]), profile("2", "Priya", &[])];

        let filtered = SearchTermFilter.apply(profiles, &query(""));
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_matches_name_case_insensitively() {
        let profiles = vec![
            profile("1", "Kausik Chatterjee", &[]),
            profile("2", "Priya Sharma", &[]),
        ];

        let filtered = SearchTermFilter.apply(profiles, &query("CHATTER"));

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "1");
    }

    #[test]
    fn test_matches_specialization_substring() {
        let profiles = vec![
            profile("1", "A", &["Corporate"]),
            profile("2", "B", &["Family"]),
        ];

        let filtered = SearchTermFilter.apply(profiles, &query("corp"));

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "1");
    }

    #[test]
    fn test_no_match_drops_all() {
        let profiles = vec![profile("1", "A", &["Tax"])];

        let filtered = SearchTermFilter.apply(profiles, &query("maritime"));
        assert!(filtered.is_empty());
    }
}
