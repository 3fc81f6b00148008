//! Per-channel price ceilings.
//!
//! The pipeline carries one instance per consultation channel, so each
//! ceiling logs and filters independently.

use crate::criteria::ListingQuery;
use crate::traits::ProfileFilter;
use directory::{Channel, LawyerProfile};

/// Retains profiles whose rate for one channel is at or below the
/// criteria's ceiling for that channel.
pub struct RateCeilingFilter {
    channel: Channel,
    name: String,
}

impl RateCeilingFilter {
    /// Create a ceiling filter for one channel.
    pub fn new(channel: Channel) -> Self {
        Self {
            channel,
            name: format!("RateCeilingFilter({channel})"),
        }
    }
}

impl ProfileFilter for RateCeilingFilter {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, profiles: Vec<LawyerProfile>, query: &ListingQuery) -> Vec<LawyerProfile> {
        let ceiling = query.criteria.max_rate(self.channel);

        profiles
            .into_iter()
            .filter(|profile| profile.pricing.rate(self.channel) <= ceiling)
            .collect()
    }
}
