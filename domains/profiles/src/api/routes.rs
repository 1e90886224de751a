//! Route definitions for the profiles domain API

use axum::{routing::get, Router};

use super::handlers::profiles;
use super::state::ProfilesState;

/// Create the identity-scoped profile routes
pub fn routes() -> Router<ProfilesState> {
    Router::new().route(
        "/api/v1/me",
        get(profiles::get_me).patch(profiles::update_me),
    )
}
