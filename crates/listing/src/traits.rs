//! Core trait for the listing pipeline.
//!
//! This module defines the ProfileFilter trait that allows composable,
//! extensible filters to be applied to the profile collection.

use crate::criteria::ListingQuery;
use directory::LawyerProfile;

/// Core trait for filtering the visible listing.
///
/// All filters must implement this trait to be used in the ListingPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be used in concurrent contexts
/// - Filters take ownership of the Vec and return the retained subset,
///   avoiding unnecessary cloning between stages
/// - Filters are infallible: the engine is total over its input domain,
///   so there is no error channel to thread through
pub trait ProfileFilter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to the collection.
    ///
    /// # Arguments
    /// * `profiles` - The profiles to filter (takes ownership)
    /// * `query` - The current pass's clamped criteria and search term
    fn apply(&self, profiles: Vec<LawyerProfile>, query: &ListingQuery) -> Vec<LawyerProfile>;
}
