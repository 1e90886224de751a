//! API layer for the profiles domain
//!
//! Contains HTTP handlers, routes, and domain state definition.

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::routes;
pub use state::ProfilesState;
