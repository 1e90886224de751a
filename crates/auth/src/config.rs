//! Token configuration

use std::env;

/// Issuer emitted into and required of every access token
pub const DEFAULT_ISSUER: &str = "inovacube-auth";

/// Audience emitted into and required of every access token
pub const DEFAULT_AUDIENCE: &str = "inovacube-services";

/// Issuer/audience pair a service signs or verifies against
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub issuer: String,
    pub audience: String,
}

impl AuthConfig {
    /// Load from `JWT_ISSUER` / `JWT_AUDIENCE`, falling back to the
    /// platform defaults.
    pub fn from_env() -> Self {
        Self {
            issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| DEFAULT_ISSUER.to_string()),
            audience: env::var("JWT_AUDIENCE").unwrap_or_else(|_| DEFAULT_AUDIENCE.to_string()),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            issuer: DEFAULT_ISSUER.to_string(),
            audience: DEFAULT_AUDIENCE.to_string(),
        }
    }
}
