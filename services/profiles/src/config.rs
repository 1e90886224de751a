//! Profiles service configuration

use anyhow::Result;
use inovacube_auth::AuthConfig;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the RS256 public key PEM
    pub public_key_file: String,

    /// Issuer/audience every presented token must match
    pub auth: AuthConfig,

    /// PostgreSQL profile store
    pub database_url: String,

    /// Ephemeral presence store
    pub redis_url: String,

    /// Listen port
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Ok(Self {
            public_key_file: env::var("JWT_PUBLIC_KEY_FILE")
                .map_err(|_| anyhow::anyhow!("JWT_PUBLIC_KEY_FILE is required"))?,

            auth: AuthConfig::from_env(),

            database_url: env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL is required"))?,

            redis_url: env::var("REDIS_URL")
                .map_err(|_| anyhow::anyhow!("REDIS_URL is required"))?,

            port: env::var("PORT")
                .unwrap_or_else(|_| "3002".to_string())
                .parse()
                .unwrap_or(3002),
        })
    }
}
