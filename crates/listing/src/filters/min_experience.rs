//! Minimum years-of-practice threshold.

use crate::criteria::ListingQuery;
use crate::traits::ProfileFilter;
use directory::LawyerProfile;

/// Retains profiles with at least the criteria's years of experience.
pub struct MinExperienceFilter;

impl ProfileFilter for MinExperienceFilter {
    fn name(&self) -> &str {
        "MinExperienceFilter"
    }

    fn apply(&self, profiles: Vec<LawyerProfile>, query: &ListingQuery) -> Vec<LawyerProfile> {
        let threshold = query.criteria.min_experience;

        profiles
            .into_iter()
            .filter(|profile| profile.experience >= threshold)
            .collect()
    }
}
