//! Ordering of the visible listing.

use crate::criteria::{SortKey, SortOrder};
use directory::LawyerProfile;
use std::cmp::Ordering;

/// Sort profiles in place by the selected key and direction.
///
/// ## Algorithm
/// 1. Compare by the primary key (`Name` lexicographically, everything
///    else numerically)
/// 2. Reverse the ordering for descending direction
/// 3. Break remaining ties by ascending id
///
/// The id tie-break runs after the direction is applied, so equal primary
/// values always order the same way regardless of direction. That makes the
/// whole ordering total and deterministic, which the recompute-on-every-edit
/// model depends on.
pub fn sort_profiles(profiles: &mut [LawyerProfile], key: SortKey, order: SortOrder) {
    profiles.sort_by(|a, b| {
        let primary = compare_by_key(a, b, key);
        let directed = match order {
            SortOrder::Ascending => primary,
            SortOrder::Descending => primary.reverse(),
        };
        directed.then_with(|| a.id.cmp(&b.id))
    });
}

/// Compare two profiles on the primary sort key only.
///
/// Ratings are floats; incomparable values (a defaulted record against a
/// NaN that slipped through) compare as equal rather than panicking, and
/// the id tie-break keeps the result deterministic.
fn compare_by_key(a: &LawyerProfile, b: &LawyerProfile, key: SortKey) -> Ordering {
    match key {
        SortKey::Rating => a.rating.partial_cmp(&b.rating).unwrap_or(Ordering::Equal),
        SortKey::Experience => a.experience.cmp(&b.experience),
        SortKey::AudioRate => a.pricing.audio.cmp(&b.pricing.audio),
        SortKey::VideoRate => a.pricing.video.cmp(&b.pricing.video),
        SortKey::ChatRate => a.pricing.chat.cmp(&b.pricing.chat),
        SortKey::Name => a.name.cmp(&b.name),
    }
}
