//! Profiles domain state and token-verifier integration

use std::sync::Arc;

use axum::extract::FromRef;
use inovacube_auth::TokenVerifier;
use inovacube_presence::PresenceTracker;

use crate::repository::ProfileRepository;

/// Application state for the profiles domain
#[derive(Clone)]
pub struct ProfilesState {
    pub repo: ProfileRepository,
    pub verifier: TokenVerifier,
    pub presence: Arc<dyn PresenceTracker>,
}

impl FromRef<ProfilesState> for TokenVerifier {
    fn from_ref(state: &ProfilesState) -> Self {
        state.verifier.clone()
    }
}
