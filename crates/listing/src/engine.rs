//! The listing engine entry point.

use crate::criteria::{FilterCriteria, ListingQuery};
use crate::listing_pipeline::ListingPipeline;
use crate::sort;
use directory::LawyerProfile;

/// Compute the ordered subset of profiles to render.
///
/// Two ordered phases, always in this order: filter (all six predicates
/// must hold), then sort by the criteria's key and direction with an id
/// tie-break.
///
/// This is a pure function: the input collection is never mutated, the
/// output is a cloned subset with no duplicates, and identical inputs yield
/// identical output. It is recomputed in full on every relevant edit —
/// search term, any criteria field, or a newly arrived collection.
///
/// # Arguments
/// * `profiles` - The loaded collection; may be empty (empty output, not
///   an error)
/// * `criteria` - Filter bounds and sort preferences; clamped internally,
///   so unvalidated values cannot fault the pass
/// * `search_term` - Free-text term matched against names and
///   specialization tags; empty means no search filtering
pub fn compute_visible_list(
    profiles: &[LawyerProfile],
    criteria: &FilterCriteria,
    search_term: &str,
) -> Vec<LawyerProfile> {
    let query = ListingQuery::new(criteria, search_term);
    let pipeline = ListingPipeline::standard();

    let mut visible = pipeline.apply(profiles.to_vec(), &query);
    sort::sort_profiles(&mut visible, query.criteria.sort_by, query.criteria.sort_order);
    visible
}
