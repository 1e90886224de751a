//! Access-token claims

use serde::{Deserialize, Serialize};

/// Scope tag carried by player access tokens
pub const SCOPE_PLAYER: &str = "player";

/// Token type tag for access tokens
pub const TOKEN_TYPE_ACCESS: &str = "access";

/// Claims carried by an InovaCube access token.
///
/// Built once at issuance and never mutated; the token itself is the only
/// custodian of its claims (verification is stateless).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (stable player identifier)
    pub sub: String,
    /// Issuer
    pub iss: String,
    /// Audience
    pub aud: String,
    /// Issued at (epoch seconds)
    pub iat: i64,
    /// Not valid before (epoch seconds)
    pub nbf: i64,
    /// Expires at (epoch seconds)
    pub exp: i64,
    /// Scope tag, e.g. "player"
    pub scope: String,
    /// Token type tag, e.g. "access"
    pub typ: String,
}
