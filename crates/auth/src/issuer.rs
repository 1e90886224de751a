//! Access-token issuance

use std::time::Duration;

use thiserror::Error;

use crate::claims::{Claims, SCOPE_PLAYER, TOKEN_TYPE_ACCESS};
use crate::config::AuthConfig;
use crate::jwt;
use crate::keys::SigningKey;

/// Issuance failures. Signing errors are key/material problems and are
/// fatal to the request, never retried.
#[derive(Debug, Error)]
pub enum IssueError {
    #[error("subject must not be empty")]
    EmptySubject,

    #[error("failed to sign token: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

/// A freshly signed token and its expiry instant (epoch seconds)
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: i64,
}

/// Produces signed access tokens for validated subject identities.
///
/// Stateless across calls; the only side effect is the signature itself.
#[derive(Clone)]
pub struct TokenIssuer {
    signing_key: SigningKey,
    config: AuthConfig,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(signing_key: SigningKey, config: AuthConfig, ttl_minutes: u64) -> Self {
        Self {
            signing_key,
            config,
            ttl: Duration::from_secs(ttl_minutes * 60),
        }
    }

    /// Issue an access token bound to `subject`, valid from now until
    /// now + TTL.
    pub fn issue(&self, subject: &str) -> Result<IssuedToken, IssueError> {
        if subject.is_empty() {
            return Err(IssueError::EmptySubject);
        }

        let now = chrono::Utc::now().timestamp();
        let expires_at = now + self.ttl.as_secs() as i64;
        let claims = Claims {
            sub: subject.to_string(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
            iat: now,
            nbf: now,
            exp: expires_at,
            scope: SCOPE_PLAYER.to_string(),
            typ: TOKEN_TYPE_ACCESS.to_string(),
        };

        let token = jwt::sign_claims(&self.signing_key, &claims)?;
        Ok(IssuedToken { token, expires_at })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_AUDIENCE, DEFAULT_ISSUER};
    use crate::keys::{VerificationKey, KEY_ID};
    use crate::test_keys;

    fn issuer(ttl_minutes: u64) -> TokenIssuer {
        let key = SigningKey::from_rsa_pem(KEY_ID, test_keys::PRIVATE_KEY.as_bytes()).unwrap();
        TokenIssuer::new(key, AuthConfig::default(), ttl_minutes)
    }

    #[test]
    fn issued_token_verifies_with_matching_claims() {
        let issued = issuer(15).issue("uuid-1234").unwrap();

        let key = VerificationKey::from_rsa_pem(test_keys::PUBLIC_KEY.as_bytes()).unwrap();
        let claims =
            crate::jwt::verify_token(&key, &issued.token, DEFAULT_ISSUER, DEFAULT_AUDIENCE)
                .unwrap();
        assert_eq!(claims.sub, "uuid-1234");
        assert_eq!(claims.iss, DEFAULT_ISSUER);
        assert_eq!(claims.aud, DEFAULT_AUDIENCE);
        assert_eq!(claims.scope, SCOPE_PLAYER);
        assert_eq!(claims.typ, TOKEN_TYPE_ACCESS);
        assert_eq!(claims.exp, issued.expires_at);
        assert_eq!(claims.iat, claims.nbf);
    }

    #[test]
    fn expiry_is_ttl_minutes_from_now() {
        let before = chrono::Utc::now().timestamp();
        let issued = issuer(15).issue("uuid-1234").unwrap();
        let after = chrono::Utc::now().timestamp();

        assert!(issued.expires_at >= before + 15 * 60);
        assert!(issued.expires_at <= after + 15 * 60);
    }

    #[test]
    fn empty_subject_is_rejected() {
        assert!(matches!(
            issuer(15).issue("").unwrap_err(),
            IssueError::EmptySubject
        ));
    }
}
