//! Auth service state

use inovacube_auth::TokenIssuer;

/// Application state for the issuance service
#[derive(Clone)]
pub struct AppState {
    pub issuer: TokenIssuer,
}
