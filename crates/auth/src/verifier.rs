//! Bearer-token verification

use axum::http::HeaderValue;

use crate::claims::Claims;
use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::jwt;
use crate::keys::VerificationKey;

/// Validates bearer credentials against the service's fixed issuer and
/// audience and extracts the authenticated claims.
///
/// Verification is pure and stateless: no session store is consulted, the
/// token is the sole custodian of its claims.
#[derive(Clone)]
pub struct TokenVerifier {
    verification_key: VerificationKey,
    config: AuthConfig,
}

impl TokenVerifier {
    pub fn new(verification_key: VerificationKey, config: AuthConfig) -> Self {
        Self {
            verification_key,
            config,
        }
    }

    /// Authenticate an `Authorization` header value.
    ///
    /// A header without the bearer scheme is a missing credential (401); a
    /// bearer token that fails any verification check is an invalid
    /// credential (403).
    pub fn verify_bearer(&self, header: &HeaderValue) -> Result<Claims, AuthError> {
        let token = jwt::extract_bearer_token(header)?;
        self.verify_token(&token)
    }

    /// Authenticate a raw token string.
    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        jwt::verify_token(
            &self.verification_key,
            token,
            &self.config.issuer,
            &self.config.audience,
        )
        .map_err(|err| {
            tracing::debug!(error = %err, "token verification failed");
            AuthError::InvalidCredential
        })
    }
}
