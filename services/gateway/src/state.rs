//! Gateway state and token-verifier integration

use std::sync::Arc;

use axum::extract::FromRef;
use inovacube_auth::TokenVerifier;
use inovacube_presence::PresenceTracker;

/// Application state for the gateway
#[derive(Clone)]
pub struct AppState {
    pub verifier: TokenVerifier,
    pub presence: Arc<dyn PresenceTracker>,
}

impl FromRef<AppState> for TokenVerifier {
    fn from_ref(state: &AppState) -> Self {
        state.verifier.clone()
    }
}
