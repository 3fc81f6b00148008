//! Filter on required practice areas.

use crate::criteria::ListingQuery;
use crate::traits::ProfileFilter;
use directory::LawyerProfile;

/// Retains profiles matching at least one required specialization tag.
///
/// ## Algorithm
/// Matching is partial and case-insensitive: a required tag matches when it
/// is a substring of any of the profile's own tags. "property" therefore
/// matches both "Property" and "Intellectual Property". An empty required
/// set retains everything.
pub struct SpecializationFilter;

impl ProfileFilter for SpecializationFilter {
    fn name(&self) -> &str {
        "SpecializationFilter"
    }

    fn apply(&self, profiles: Vec<LawyerProfile>, query: &ListingQuery) -> Vec<LawyerProfile> {
        let required = &query.criteria.required_specializations;
        if required.is_empty() {
            return profiles;
        }

        let required_lower: Vec<String> =
            required.iter().map(|tag| tag.to_lowercase()).collect();

        profiles
            .into_iter()
            .filter(|profile| {
                profile.specializations.iter().any(|tag| {
                    let tag = tag.to_lowercase();
                    required_lower.iter().any(|needle| tag.contains(needle))
                })
            })
            .collect()
    }
}
