//! Availability toggle.

use crate::criteria::ListingQuery;
use crate::traits::ProfileFilter;
use directory::LawyerProfile;

/// When the online-only toggle is set, retains only profiles currently
/// marked online. Otherwise a no-op.
pub struct OnlineOnlyFilter;

impl ProfileFilter for OnlineOnlyFilter {
    fn name(&self) -> &str {
        "OnlineOnlyFilter"
    }

    fn apply(&self, profiles: Vec<LawyerProfile>, query: &ListingQuery) -> Vec<LawyerProfile> {
        if !query.criteria.online_only {
            return profiles;
        }

        profiles
            .into_iter()
            .filter(|profile| profile.is_online)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::{CriteriaUpdate, FilterCriteria};

    fn profile(id: &str, is_online: bool) -> LawyerProfile {
        LawyerProfile {
            id: id.to_string(),
            is_online,
            ..LawyerProfile::default()
        }
    }

    #[test]
    fn test_toggle_off_retains_all() {
        let query = ListingQuery::new(&FilterCriteria::default(), "");
        let profiles = vec![profile("1", true), profile("2", false)];

        let filtered = OnlineOnlyFilter.apply(profiles, &query);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_toggle_on_keeps_online_only() {
        let mut criteria = FilterCriteria::default();
        criteria.apply(CriteriaUpdate::OnlineOnly(true));
        let query = ListingQuery::new(&criteria, "");

        let profiles = vec![profile("1", true), profile("2", false)];

        let filtered = OnlineOnlyFilter.apply(profiles, &query);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "1");
    }
}
