//! Error types for the directory crate.

use thiserror::Error;

/// Errors that can occur while decoding profile documents.
///
/// Missing fields are not errors — they default per the profile-source
/// contract. These variants cover structurally broken documents: wrong JSON
/// shapes and type mismatches.
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// The document payload was not a JSON object
    #[error("profile document {id} is not a JSON object")]
    NotAnObject { id: String },

    /// A field held a value of the wrong type
    #[error("failed to decode profile document {id}: {reason}")]
    InvalidDocument { id: String, reason: String },

    /// A document in a collection dump carried no usable id
    #[error("profile document at position {position} has no id")]
    MissingId { position: usize },

    /// A collection dump was not a JSON array
    #[error("expected a JSON array of profile documents, found {found}")]
    NotAnArray { found: String },
}

/// Convenience type alias for Results in this crate.
pub type Result<T> = std::result::Result<T, DirectoryError>;
