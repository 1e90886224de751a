//! Auth service configuration
//!
//! All configuration is loaded from environment variables to keep a clean
//! separation between code and config. Missing key material is a fatal
//! startup error.

use anyhow::Result;
use inovacube_auth::AuthConfig;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the RS256 private key PEM
    pub private_key_file: String,

    /// Access-token lifetime in minutes
    pub ttl_minutes: u64,

    /// Issuer/audience stamped into every token
    pub auth: AuthConfig,

    /// Listen port
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Ok(Self {
            private_key_file: env::var("JWT_PRIVATE_KEY_FILE")
                .map_err(|_| anyhow::anyhow!("JWT_PRIVATE_KEY_FILE is required"))?,

            ttl_minutes: env::var("JWT_TTL_MINUTES")
                .unwrap_or_else(|_| "15".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("JWT_TTL_MINUTES must be an integer"))?,

            auth: AuthConfig::from_env(),

            port: env::var("PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse()
                .unwrap_or(3001),
        })
    }
}
