//! The embedded profile source.

use crate::error::FetchError;
use crate::ProfileSource;
use async_trait::async_trait;
use directory::seed::seed_profiles;
use directory::LawyerProfile;

/// Serves a constant, in-process profile collection.
///
/// This is the deployment variant with no remote store: the collection is
/// available synchronously and a fetch can never fail. Used by the demo
/// binary, the CLI's default mode, and tests.
pub struct EmbeddedSource {
    profiles: Vec<LawyerProfile>,
}

impl EmbeddedSource {
    /// Source over an arbitrary constant collection.
    pub fn new(profiles: Vec<LawyerProfile>) -> Self {
        Self { profiles }
    }

    /// Source over the embedded seed catalogue.
    pub fn with_seed() -> Self {
        Self::new(seed_profiles())
    }
}

#[async_trait]
impl ProfileSource for EmbeddedSource {
    fn name(&self) -> &str {
        "EmbeddedSource"
    }

    async fn fetch_profiles(&self) -> Result<Vec<LawyerProfile>, FetchError> {
        Ok(self.profiles.clone())
    }
}
