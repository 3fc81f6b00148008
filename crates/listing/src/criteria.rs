//! User-adjustable filter criteria and sort preferences.
//!
//! A [`FilterCriteria`] value is owned by the presentation side: it is
//! created with defaults when the catalogue view initializes, edited field
//! by field through [`CriteriaUpdate`] events, and reset wholesale. The
//! listing engine only ever reads it.
//!
//! Every bound has a slider-defined domain. Edits clamp into the domain,
//! and the engine clamps again before comparing, so an out-of-range or
//! non-finite value can narrow the listing but never fault it.

use directory::Channel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::ops::RangeInclusive;

// =============================================================================
// Slider Domains
// =============================================================================

/// Audio rate ceiling domain, currency units per minute.
pub const AUDIO_RATE_DOMAIN: RangeInclusive<u32> = 10..=40;

/// Video rate ceiling domain.
pub const VIDEO_RATE_DOMAIN: RangeInclusive<u32> = 5..=30;

/// Chat rate ceiling domain.
pub const CHAT_RATE_DOMAIN: RangeInclusive<u32> = 8..=35;

/// Minimum-rating domain, in stars.
pub const RATING_DOMAIN: RangeInclusive<f32> = 0.0..=5.0;

/// Minimum-experience domain, in years.
pub const EXPERIENCE_DOMAIN: RangeInclusive<u32> = 0..=25;

// =============================================================================
// Sort Preferences
// =============================================================================

/// The field the visible listing is ordered by.
///
/// Serialized names match the catalogue view's sort selector values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Rating,
    Experience,
    AudioRate,
    VideoRate,
    ChatRate,
    Name,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

// =============================================================================
// Filter Criteria
// =============================================================================

/// The full set of user-adjustable constraints and sort preferences.
///
/// The free-text search term is deliberately not part of this struct — it
/// travels alongside it, and resetting the criteria also clears it (the
/// catalogue session owns that coupling).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub max_audio_rate: u32,
    pub max_video_rate: u32,
    pub max_chat_rate: u32,
    pub min_rating: f32,
    pub min_experience: u32,
    pub online_only: bool,
    /// Required practice-area tags. Empty means no restriction; otherwise a
    /// profile must partially match at least one required tag.
    pub required_specializations: BTreeSet<String>,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            max_audio_rate: *AUDIO_RATE_DOMAIN.end(),
            max_video_rate: *VIDEO_RATE_DOMAIN.end(),
            max_chat_rate: *CHAT_RATE_DOMAIN.end(),
            min_rating: *RATING_DOMAIN.start(),
            min_experience: *EXPERIENCE_DOMAIN.start(),
            online_only: false,
            required_specializations: BTreeSet::new(),
            sort_by: SortKey::Rating,
            sort_order: SortOrder::Descending,
        }
    }
}

impl FilterCriteria {
    /// The rate ceiling for one consultation channel.
    pub fn max_rate(&self, channel: Channel) -> u32 {
        match channel {
            Channel::Audio => self.max_audio_rate,
            Channel::Video => self.max_video_rate,
            Channel::Chat => self.max_chat_rate,
        }
    }

    /// Apply one discrete update event.
    ///
    /// Numeric values clamp into their slider domain on write, keeping the
    /// struct inside its declared invariant no matter what the caller sends.
    pub fn apply(&mut self, update: CriteriaUpdate) {
        match update {
            CriteriaUpdate::MaxAudioRate(value) => {
                self.max_audio_rate = clamp_u32(value, AUDIO_RATE_DOMAIN);
            }
            CriteriaUpdate::MaxVideoRate(value) => {
                self.max_video_rate = clamp_u32(value, VIDEO_RATE_DOMAIN);
            }
            CriteriaUpdate::MaxChatRate(value) => {
                self.max_chat_rate = clamp_u32(value, CHAT_RATE_DOMAIN);
            }
            CriteriaUpdate::MinRating(value) => {
                self.min_rating = clamp_rating(value);
            }
            CriteriaUpdate::MinExperience(value) => {
                self.min_experience = clamp_u32(value, EXPERIENCE_DOMAIN);
            }
            CriteriaUpdate::OnlineOnly(value) => {
                self.online_only = value;
            }
            CriteriaUpdate::RequiredSpecializations(tags) => {
                self.required_specializations = tags;
            }
            CriteriaUpdate::SortBy(key) => {
                self.sort_by = key;
            }
            CriteriaUpdate::SortOrder(order) => {
                self.sort_order = order;
            }
        }
    }

    /// A copy with every bound clamped into its domain.
    ///
    /// The engine calls this at the start of each pass: it must not assume
    /// the criteria were pre-validated. Non-finite ratings collapse to the
    /// domain floor.
    pub fn clamped(&self) -> Self {
        Self {
            max_audio_rate: clamp_u32(self.max_audio_rate, AUDIO_RATE_DOMAIN),
            max_video_rate: clamp_u32(self.max_video_rate, VIDEO_RATE_DOMAIN),
            max_chat_rate: clamp_u32(self.max_chat_rate, CHAT_RATE_DOMAIN),
            min_rating: clamp_rating(self.min_rating),
            min_experience: clamp_u32(self.min_experience, EXPERIENCE_DOMAIN),
            ..self.clone()
        }
    }
}

/// One discrete filter edit, as forwarded by the presentation layer.
///
/// One variant per adjustable field keeps the update channel typed instead
/// of stringly keyed.
#[derive(Debug, Clone, PartialEq)]
pub enum CriteriaUpdate {
    MaxAudioRate(u32),
    MaxVideoRate(u32),
    MaxChatRate(u32),
    MinRating(f32),
    MinExperience(u32),
    OnlineOnly(bool),
    RequiredSpecializations(BTreeSet<String>),
    SortBy(SortKey),
    SortOrder(SortOrder),
}

// =============================================================================
// Listing Query
// =============================================================================

/// The read-side view of one filter/sort pass: clamped criteria plus the
/// normalized search term.
///
/// Built once per pass so every filter sees the same clamped values, and so
/// the search term is lowercased exactly once.
#[derive(Debug, Clone)]
pub struct ListingQuery {
    pub criteria: FilterCriteria,
    /// Free-text search term, already lowercased. Empty means no search
    /// filtering.
    pub search_term: String,
}

impl ListingQuery {
    pub fn new(criteria: &FilterCriteria, search_term: &str) -> Self {
        Self {
            criteria: criteria.clamped(),
            search_term: search_term.to_lowercase(),
        }
    }
}

fn clamp_u32(value: u32, domain: RangeInclusive<u32>) -> u32 {
    value.clamp(*domain.start(), *domain.end())
}

fn clamp_rating(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(*RATING_DOMAIN.start(), *RATING_DOMAIN.end())
    } else {
        *RATING_DOMAIN.start()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_slider_maxima() {
        let criteria = FilterCriteria::default();

        assert_eq!(criteria.max_audio_rate, 40);
        assert_eq!(criteria.max_video_rate, 30);
        assert_eq!(criteria.max_chat_rate, 35);
        assert_eq!(criteria.min_rating, 0.0);
        assert_eq!(criteria.min_experience, 0);
        assert!(!criteria.online_only);
        assert!(criteria.required_specializations.is_empty());
        assert_eq!(criteria.sort_by, SortKey::Rating);
        assert_eq!(criteria.sort_order, SortOrder::Descending);
    }

    #[test]
    fn test_updates_clamp_into_domain() {
        let mut criteria = FilterCriteria::default();

        criteria.apply(CriteriaUpdate::MaxAudioRate(500));
        assert_eq!(criteria.max_audio_rate, 40);

        criteria.apply(CriteriaUpdate::MaxVideoRate(0));
        assert_eq!(criteria.max_video_rate, 5);

        criteria.apply(CriteriaUpdate::MinRating(9.5));
        assert_eq!(criteria.min_rating, 5.0);

        criteria.apply(CriteriaUpdate::MinExperience(100));
        assert_eq!(criteria.min_experience, 25);
    }

    #[test]
    fn test_clamped_neutralizes_non_finite_rating() {
        let criteria = FilterCriteria {
            min_rating: f32::NAN,
            ..FilterCriteria::default()
        };

        assert_eq!(criteria.clamped().min_rating, 0.0);

        let criteria = FilterCriteria {
            min_rating: f32::INFINITY,
            ..FilterCriteria::default()
        };

        assert_eq!(criteria.clamped().min_rating, 0.0);
    }

    #[test]
    fn test_sort_updates() {
        let mut criteria = FilterCriteria::default();

        criteria.apply(CriteriaUpdate::SortBy(SortKey::Name));
        criteria.apply(CriteriaUpdate::SortOrder(SortOrder::Ascending));

        assert_eq!(criteria.sort_by, SortKey::Name);
        assert_eq!(criteria.sort_order, SortOrder::Ascending);
    }

    #[test]
    fn test_query_lowercases_search_term() {
        let query = ListingQuery::new(&FilterCriteria::default(), "CORP");
        assert_eq!(query.search_term, "corp");
    }

    #[test]
    fn test_serde_names_match_view_values() {
        let json = serde_json::to_string(&SortKey::AudioRate).unwrap();
        assert_eq!(json, "\"audioRate\"");

        let order: SortOrder = serde_json::from_str("\"desc\"").unwrap();
        assert_eq!(order, SortOrder::Descending);
    }
}
