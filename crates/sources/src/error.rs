//! Error taxonomy for the profile-source boundary.
//!
//! Faults originate here and only here: the listing engine downstream is
//! total and never transforms them. The consumer (the catalogue session)
//! is the sole recovery point, offering a manual retry.

use directory::DirectoryError;
use thiserror::Error;

/// Errors raised by a document store client.
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O error while reaching the store
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The store's payload was not valid JSON
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload parsed but didn't have the expected collection shape
    #[error("malformed collection payload: {0}")]
    Payload(String),

    /// The store could not be reached at all
    #[error("document store unavailable: {0}")]
    Unavailable(String),
}

/// A failed profile fetch.
///
/// Terminal for the mount that issued it: there is no automatic retry,
/// no cancellation, and no timeout. `EmptyResult` is deliberately absent —
/// an empty collection is a valid, displayable outcome, not a fault.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The remote read failed
    #[error("profile read failed: {0}")]
    Store(#[from] StoreError),

    /// A fetched document could not be decoded into a profile
    #[error("invalid profile document: {0}")]
    Document(#[from] DirectoryError),
}
