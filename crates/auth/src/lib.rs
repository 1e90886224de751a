//! Token layer for InovaCube services
//!
//! Provides RS256 key material, access-token claims, issuance and
//! verification, and an axum extractor that works with any service state
//! implementing `FromRef<S>` for `TokenVerifier`.

mod claims;
mod config;
mod error;
mod extractors;
mod issuer;
mod jwt;
mod keys;
mod verifier;

#[cfg(any(test, feature = "test-keys"))]
pub mod test_keys;

pub use claims::{Claims, SCOPE_PLAYER, TOKEN_TYPE_ACCESS};
pub use config::{AuthConfig, DEFAULT_AUDIENCE, DEFAULT_ISSUER};
pub use error::{AuthError, TokenError};
pub use extractors::AuthUser;
pub use issuer::{IssueError, IssuedToken, TokenIssuer};
pub use jwt::{extract_bearer_token, sign_claims, verify_token};
pub use keys::{KeyError, SigningKey, VerificationKey, KEY_ID};
pub use verifier::TokenVerifier;
