//! Gateway composition root
//!
//! Public health/ping endpoints plus token-protected heartbeat and
//! identity introspection. Verification is stateless: every request is
//! checked against the public key, no shared session state.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use inovacube_auth::{TokenVerifier, VerificationKey};
use inovacube_presence::RedisPresenceTracker;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod handlers;
pub mod state;

pub use config::Config;
pub use state::AppState;

/// Build the gateway router over an explicit state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(handlers::healthz))
        .route("/api/ping", get(handlers::ping))
        .route("/api/v1/heartbeat", post(handlers::heartbeat))
        .route("/api/secure/me", get(handlers::secure_me))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Create the application router from configuration.
///
/// The verification key and the presence-store connection are both opened
/// once here and shared by every request handler.
pub async fn create_app(config: &Config) -> Result<Router, anyhow::Error> {
    let verification_key = VerificationKey::from_pem_file(&config.public_key_file)?;
    let verifier = TokenVerifier::new(verification_key, config.auth.clone());
    let presence = RedisPresenceTracker::new(&config.redis_url).await?;

    Ok(router(AppState {
        verifier,
        presence: Arc::new(presence),
    }))
}
