//! Minimum review-score threshold.

use crate::criteria::ListingQuery;
use crate::traits::ProfileFilter;
use directory::LawyerProfile;

/// Retains profiles rated at or above the criteria's minimum.
///
/// The query's criteria arrive pre-clamped, so the threshold is always a
/// finite value inside the rating domain; a defaulted (0.0) profile rating
/// compares cleanly against it.
pub struct MinRatingFilter;

impl ProfileFilter for MinRatingFilter {
    fn name(&self) -> &str {
        "MinRatingFilter"
    }

    fn apply(&self, profiles: Vec<LawyerProfile>, query: &ListingQuery) -> Vec<LawyerProfile> {
        let threshold = query.criteria.min_rating;

        profiles
            .into_iter()
            .filter(|profile| profile.rating >= threshold)
            .collect()
    }
}
