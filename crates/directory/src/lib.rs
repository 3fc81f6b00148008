//! # Directory Crate
//!
//! Domain types and document decoding for the lawyer directory.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (LawyerProfile, PriceList, Channel,
//!   ProfileDirectory)
//! - **parser**: Decode store documents into profiles with field defaulting
//! - **seed**: The embedded starter catalogue
//! - **error**: Error types for document decoding
//!
//! ## Example Usage
//!
//! ```ignore
//! use directory::{ProfileDirectory, seed::seed_profiles};
//!
//! let directory = ProfileDirectory::from_profiles(seed_profiles());
//!
//! let profile = directory.get("1").unwrap();
//! println!("{} practices {}", profile.name, profile.specializations.join(", "));
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod seed;

// Re-export commonly used types for convenience
pub use error::{DirectoryError, Result};
pub use types::{
    // Type aliases
    ProfileId,
    // Core types
    LawyerProfile,
    PriceList,
    ProfileDirectory,
    // Enums
    Channel,
};
