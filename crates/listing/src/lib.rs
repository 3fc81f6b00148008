//! Listing engine for the lawyer catalogue.
//!
//! This crate provides:
//! - FilterCriteria, sort preferences, and their discrete update events
//! - ProfileFilter trait and implementations for the six listing predicates
//! - ListingPipeline for composing filters
//! - The pure `compute_visible_list` entry point (filter phase, then sort
//!   phase)
//!
//! ## Architecture
//! The engine is stateless and recomputed in full on every relevant input
//! change:
//! 1. Filters drop profiles that miss any predicate (search term, required
//!    specializations, rate ceilings, rating and experience thresholds,
//!    online toggle)
//! 2. The retained subset is sorted by the selected key and direction, with
//!    a deterministic id tie-break
//!
//! ## Example Usage
//! ```ignore
//! use listing::{compute_visible_list, FilterCriteria, CriteriaUpdate, SortKey};
//!
//! let mut criteria = FilterCriteria::default();
//! criteria.apply(CriteriaUpdate::OnlineOnly(true));
//! criteria.apply(CriteriaUpdate::SortBy(SortKey::Experience));
//!
//! let visible = compute_visible_list(&profiles, &criteria, "corporate");
//! ```

pub mod criteria;
pub mod engine;
pub mod filters;
pub mod listing_pipeline;
pub mod sort;
pub mod traits;

// Re-export main types
pub use criteria::{
    CriteriaUpdate, FilterCriteria, ListingQuery, SortKey, SortOrder, AUDIO_RATE_DOMAIN,
    CHAT_RATE_DOMAIN, EXPERIENCE_DOMAIN, RATING_DOMAIN, VIDEO_RATE_DOMAIN,
};
pub use engine::compute_visible_list;
pub use listing_pipeline::ListingPipeline;
pub use sort::sort_profiles;
pub use traits::ProfileFilter;
