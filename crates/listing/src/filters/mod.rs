//! Filter implementations for the listing pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a ListingPipeline.

pub mod min_experience;
pub mod min_rating;
pub mod online_only;
pub mod rate_ceiling;
pub mod search_term;
pub mod specialization;

// Re-export for convenience
pub use min_experience::MinExperienceFilter;
pub use min_rating::MinRatingFilter;
pub use online_only::OnlineOnlyFilter;
pub use rate_ceiling::RateCeilingFilter;
pub use search_term::SearchTermFilter;
pub use specialization::SpecializationFilter;
