//! The ListingPipeline orchestrates multiple filters.
//!
//! This module provides the main ListingPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::criteria::ListingQuery;
use crate::filters::{
    MinExperienceFilter, MinRatingFilter, OnlineOnlyFilter, RateCeilingFilter, SearchTermFilter,
    SpecializationFilter,
};
use crate::traits::ProfileFilter;
use directory::{Channel, LawyerProfile};
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = ListingPipeline::new()
///     .add_filter(SearchTermFilter)
///     .add_filter(MinRatingFilter);
///
/// let visible = pipeline.apply(profiles, &query);
/// ```
pub struct ListingPipeline {
    filters: Vec<Box<dyn ProfileFilter>>,
}

impl ListingPipeline {
    /// Create a new empty ListingPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The catalogue's standard six-predicate pipeline: search term,
    /// required specializations, the three per-channel rate ceilings, the
    /// rating and experience thresholds, and the online toggle.
    pub fn standard() -> Self {
        let mut pipeline = Self::new()
            .add_filter(SearchTermFilter)
            .add_filter(SpecializationFilter);
        for channel in Channel::ALL {
            pipeline = pipeline.add_filter(RateCeilingFilter::new(channel));
        }
        pipeline
            .add_filter(MinRatingFilter)
            .add_filter(MinExperienceFilter)
            .add_filter(OnlineOnlyFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl ProfileFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence to the collection.
    ///
    /// ## Algorithm
    /// 1. Start with the input profiles
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return the final retained subset
    pub fn apply(&self, profiles: Vec<LawyerProfile>, query: &ListingQuery) -> Vec<LawyerProfile> {
        let mut current = profiles;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, query);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for ListingPipeline {
    fn default() -> Self {
        Self::new()
    }
}
