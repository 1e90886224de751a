//! Profiles service composition root
//!
//! Composes the profiles domain router with liveness/readiness markers.
//! The store pool and the presence connection are process-wide, opened
//! once at startup and shared by all request handlers.

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use inovacube_auth::{TokenVerifier, VerificationKey};
use inovacube_presence::RedisPresenceTracker;
use inovacube_profiles::{ProfileRepository, ProfilesState};
use serde_json::json;
use sqlx::PgPool;
use tower_http::trace::TraceLayer;

pub mod config;

pub use config::Config;

/// Embedded schema migrations for the profile store
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations");

/// Build the profiles router over an explicit state.
pub fn router(state: ProfilesState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/livez", get(|| async { "ok" }))
        .route("/readyz", get(|| async { "ready" }))
        .merge(inovacube_profiles::routes().with_state(state))
        .layer(TraceLayer::new_for_http())
}

/// Create the application router from configuration and an established
/// store pool.
pub async fn create_app(config: &Config, pool: PgPool) -> Result<Router, anyhow::Error> {
    let verification_key = VerificationKey::from_pem_file(&config.public_key_file)?;
    let verifier = TokenVerifier::new(verification_key, config.auth.clone());
    let presence = RedisPresenceTracker::new(&config.redis_url).await?;

    Ok(router(ProfilesState {
        repo: ProfileRepository::new(pool),
        verifier,
        presence: Arc::new(presence),
    }))
}

/// GET /healthz
async fn healthz() -> Json<serde_json::Value> {
    Json(json!({ "ok": true, "service": "profiles" }))
}
