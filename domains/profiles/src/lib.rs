//! Profiles domain: player profile documents and the identity-scoped API

pub mod api;
pub mod domain;
pub mod error;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{placeholder_username, Profile, DEFAULT_ROLE};
pub use domain::validation::validate_username;
pub use error::ProfileError;
pub use repository::{InsertOutcome, ProfileRepository};

// Re-export API types
pub use api::routes;
pub use api::ProfilesState;
