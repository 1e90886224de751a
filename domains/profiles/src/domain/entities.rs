//! Profile entity and placeholder display names

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Role assigned to every profile created through first access
pub const DEFAULT_ROLE: &str = "player";

/// A player profile document.
///
/// `subject_id` equals the token subject and is the primary key;
/// `username` is unique across all profiles. Profiles are created lazily
/// on first authenticated access and never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Profile {
    #[serde(rename = "mc_uuid")]
    pub subject_id: String,
    pub username: String,
    pub role: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Derive a placeholder display name for a newly seen subject.
///
/// Attempt 0 is `Player_` plus the first six alphanumeric characters of
/// the subject id. Later attempts take successive six-hex-character
/// windows of the subject's SHA-256 digest, so retries after a name
/// collision stay deterministic and distinct. Every result satisfies the
/// display-name rule (3-16 chars of `[A-Za-z0-9_]`).
pub fn placeholder_username(subject_id: &str, attempt: u32) -> String {
    if attempt == 0 {
        let base: String = subject_id
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .take(6)
            .collect();
        return format!("Player_{base}");
    }

    let digest = hex::encode(Sha256::digest(subject_id.as_bytes()));
    let offset = ((attempt as usize - 1) * 6) % (digest.len() - 6);
    format!("Player_{}", &digest[offset..offset + 6])
}
