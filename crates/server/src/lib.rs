//! Server crate for the Legal Port catalogue.
//!
//! This crate contains the catalogue session that coordinates the profile
//! source with the listing engine, plus the authentication collaborator
//! boundary.

pub mod auth;
pub mod catalogue;

pub use auth::{
    AuthError, AuthPane, AuthState, DialogEvent, DialogState, IdentityProvider, UserSession,
};
pub use catalogue::{CatalogueSession, CatalogueState, CatalogueView};
