//! Core domain types for the lawyer directory.
//!
//! This module defines the fundamental data structures used throughout the
//! system: the profile record itself, its per-channel price list, and the
//! `ProfileDirectory` that indexes a loaded collection for fast lookups.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique, stable identifier for a lawyer profile.
///
/// Document stores hand out opaque string ids, so the id is a `String`
/// rather than a numeric key. Ids are never reused across a collection.
pub type ProfileId = String;

// =============================================================================
// Consultation Channels
// =============================================================================

/// The three consultation modes offered by the marketplace.
///
/// Each channel carries an independent per-minute rate in [`PriceList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Audio,
    Video,
    Chat,
}

impl Channel {
    /// All channels, in the order the marketplace displays them.
    pub const ALL: [Channel; 3] = [Channel::Audio, Channel::Video, Channel::Chat];
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Audio => write!(f, "audio"),
            Channel::Video => write!(f, "video"),
            Channel::Chat => write!(f, "chat"),
        }
    }
}

// =============================================================================
// Price List
// =============================================================================

/// Per-minute consultation rates for one profile.
///
/// Rates are whole currency units per minute. A missing rate in a source
/// document defaults to 0, per the profile-source contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceList {
    pub audio: u32,
    pub video: u32,
    pub chat: u32,
}

impl PriceList {
    /// Look up the rate for a single channel.
    pub fn rate(&self, channel: Channel) -> u32 {
        match channel {
            Channel::Audio => self.audio,
            Channel::Video => self.video,
            Channel::Chat => self.chat,
        }
    }
}

// =============================================================================
// Lawyer Profile
// =============================================================================

/// A single listed service-provider record.
///
/// Profiles are created by the profile source at load time and are read-only
/// afterwards: the listing engine clones whatever subset it keeps and never
/// mutates the originals.
///
/// Field names on the wire are camelCase (`isOnline`, `image`), matching the
/// documents the remote store holds. Every field except `name` defaults when
/// absent, so partially-populated documents still decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LawyerProfile {
    pub id: ProfileId,
    pub name: String,
    /// Ordered practice-area tags. Not unique across profiles.
    pub specializations: Vec<String>,
    /// Aggregate review score, conventionally 0.0 to 5.0.
    pub rating: f32,
    pub reviews: u32,
    /// Years of practice.
    pub experience: u32,
    pub is_online: bool,
    pub pricing: PriceList,
    /// Short avatar label (initials), stored as `image` in documents.
    #[serde(rename = "image")]
    pub avatar: String,
    pub connections: u32,
    pub verified: bool,
}

impl Default for LawyerProfile {
    fn default() -> Self {
        Self {
            id: ProfileId::new(),
            name: String::new(),
            specializations: Vec::new(),
            rating: 0.0,
            reviews: 0,
            experience: 0,
            is_online: false,
            pricing: PriceList::default(),
            avatar: String::new(),
            connections: 0,
            verified: false,
        }
    }
}

// =============================================================================
// ProfileDirectory - The Loaded Collection
// =============================================================================

/// An indexed view over one loaded profile collection.
///
/// The directory owns the profiles for the lifetime of a catalogue mount.
/// Lookup methods return references; nothing here mutates a profile after
/// construction.
#[derive(Debug, Default)]
pub struct ProfileDirectory {
    profiles: Vec<LawyerProfile>,
    by_id: HashMap<ProfileId, usize>,
}

impl ProfileDirectory {
    /// Creates a new, empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a directory from an already-loaded collection.
    ///
    /// If two records share an id, the later one wins the id index; the
    /// profile list itself is kept as delivered by the source.
    pub fn from_profiles(profiles: Vec<LawyerProfile>) -> Self {
        let by_id = profiles
            .iter()
            .enumerate()
            .map(|(position, profile)| (profile.id.clone(), position))
            .collect();
        Self { profiles, by_id }
    }

    /// Get a profile by id.
    pub fn get(&self, id: &str) -> Option<&LawyerProfile> {
        self.by_id.get(id).map(|&position| &self.profiles[position])
    }

    /// All profiles, in source order.
    pub fn all(&self) -> &[LawyerProfile] {
        &self.profiles
    }

    /// Every specialization tag seen across the collection, deduplicated
    /// and sorted. Drives the filter sidebar's tag list.
    pub fn specializations(&self) -> BTreeSet<String> {
        self.profiles
            .iter()
            .flat_map(|profile| profile.specializations.iter().cloned())
            .collect()
    }

    /// How many profiles are currently marked online.
    pub fn online_count(&self) -> usize {
        self.profiles.iter().filter(|profile| profile.is_online).count()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: &str, name: &str, online: bool) -> LawyerProfile {
        LawyerProfile {
            id: id.to_string(),
            name: name.to_string(),
            specializations: vec!["Corporate".to_string()],
            rating: 4.5,
            is_online: online,
            ..LawyerProfile::default()
        }
    }

    #[test]
    fn test_price_list_rate_lookup() {
        let pricing = PriceList {
            audio: 20,
            video: 10,
            chat: 15,
        };

        assert_eq!(pricing.rate(Channel::Audio), 20);
        assert_eq!(pricing.rate(Channel::Video), 10);
        assert_eq!(pricing.rate(Channel::Chat), 15);
    }

    #[test]
    fn test_directory_lookup() {
        let directory = ProfileDirectory::from_profiles(vec![
            profile("1", "Kausik Chatterjee", true),
            profile("2", "Priya Sharma", false),
        ]);

        assert_eq!(directory.len(), 2);
        assert_eq!(directory.get("2").unwrap().name, "Priya Sharma");
        assert!(directory.get("99").is_none());
        assert_eq!(directory.online_count(), 1);
    }

    #[test]
    fn test_directory_specializations_deduplicated() {
        let mut first = profile("1", "A", true);
        first.specializations = vec!["Corporate".to_string(), "Civil".to_string()];
        let mut second = profile("2", "B", true);
        second.specializations = vec!["Corporate".to_string(), "Tax".to_string()];

        let directory = ProfileDirectory::from_profiles(vec![first, second]);
        let tags: Vec<String> = directory.specializations().into_iter().collect();

        assert_eq!(tags, vec!["Civil", "Corporate", "Tax"]);
    }

    #[test]
    fn test_empty_directory_queries() {
        let directory = ProfileDirectory::new();

        assert!(directory.is_empty());
        assert!(directory.get("1").is_none());
        assert!(directory.specializations().is_empty());
    }
}
