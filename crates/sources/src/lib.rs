//! # Sources Crate
//!
//! Profile sources for the lawyer catalogue.
//!
//! ## Components
//!
//! ### Embedded Source
//! The constant in-process collection: zero-dependency deployments and
//! tests read the seed catalogue through the same trait the production
//! path uses.
//!
//! ### Document Source
//! Reads the `lawyer_profiles` collection through an injected
//! [`DocumentStore`] client. One fetch per catalogue mount, no retry, no
//! timeout — a failure is terminal for the mount and surfaces through
//! [`FetchError`] for the consumer to render.
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{DocumentSource, FileStore, ProfileSource};
//! use std::sync::Arc;
//!
//! // The client value is constructed here, at the composition root,
//! // and handed to the source explicitly.
//! let store = Arc::new(FileStore::new("profiles.json"));
//! let source = DocumentSource::new(store);
//!
//! let profiles = source.fetch_profiles().await?;
//! ```

pub mod document;
pub mod embedded;
pub mod error;

use async_trait::async_trait;
use directory::LawyerProfile;

// Re-export commonly used types
pub use document::{Document, DocumentSource, DocumentStore, FileStore, MemoryStore,
    PROFILE_COLLECTION};
pub use embedded::EmbeddedSource;
pub use error::{FetchError, StoreError};

/// A supplier of the raw profile collection.
///
/// The catalogue issues a single `fetch_profiles` per mount and renders a
/// loading / failed / loaded tri-state around it. Sources must not retry
/// internally; recovery is the consumer's decision.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Returns the name of this source (for logging/debugging)
    fn name(&self) -> &str;

    /// Fetch the full collection.
    async fn fetch_profiles(&self) -> Result<Vec<LawyerProfile>, FetchError>;
}
