//! RS256 key material
//!
//! One signing key pair for the process lifetime; the issuer holds the
//! private half, verifiers hold only the public half. A key that cannot be
//! loaded is a fatal startup error, never retried.

use std::path::{Path, PathBuf};

use jsonwebtoken::{DecodingKey, EncodingKey};
use thiserror::Error;

/// Identifier of the platform signing key, stamped into token headers
pub const KEY_ID: &str = "inova-rs256-1";

/// Key material errors
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("failed to read key file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid RSA key material: {0}")]
    InvalidKey(#[from] jsonwebtoken::errors::Error),
}

/// Private signing key, held only by the issuing service
#[derive(Clone)]
pub struct SigningKey {
    pub kid: String,
    pub(crate) encoding_key: EncodingKey,
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey")
            .field("kid", &self.kid)
            .field("encoding_key", &"<redacted>")
            .finish()
    }
}

impl SigningKey {
    pub fn from_rsa_pem(kid: impl Into<String>, pem: &[u8]) -> Result<Self, KeyError> {
        Ok(Self {
            kid: kid.into(),
            encoding_key: EncodingKey::from_rsa_pem(pem)?,
        })
    }

    pub fn from_pem_file(kid: impl Into<String>, path: impl AsRef<Path>) -> Result<Self, KeyError> {
        let path = path.as_ref();
        let pem = std::fs::read(path).map_err(|source| KeyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_rsa_pem(kid, &pem)
    }
}

/// Public verification key, shared by every token-protected service
#[derive(Clone)]
pub struct VerificationKey {
    pub(crate) decoding_key: DecodingKey,
}

impl VerificationKey {
    pub fn from_rsa_pem(pem: &[u8]) -> Result<Self, KeyError> {
        Ok(Self {
            decoding_key: DecodingKey::from_rsa_pem(pem)?,
        })
    }

    pub fn from_pem_file(path: impl AsRef<Path>) -> Result<Self, KeyError> {
        let path = path.as_ref();
        let pem = std::fs::read(path).map_err(|source| KeyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_rsa_pem(&pem)
    }
}
