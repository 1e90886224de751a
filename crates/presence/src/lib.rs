//! Ephemeral player-presence tracking
//!
//! A subject is "online" while its presence marker has not yet expired;
//! "offline" is never stored, it is the absence of a live marker. Every
//! touch overwrites the marker and resets its countdown (last-write-wins,
//! idempotent).

use std::time::Duration;

use thiserror::Error;

pub mod mock;
pub mod redis;

pub use self::mock::MockPresenceTracker;
pub use self::redis::RedisPresenceTracker;

/// How long a presence marker lives after its last touch.
pub const PRESENCE_TTL: Duration = Duration::from_secs(300);

/// Marker value stored for a live subject.
pub(crate) const ONLINE_MARKER: &str = "online";

/// Presence store failures
#[derive(Debug, Error)]
pub enum PresenceError {
    #[error("presence store error: {0}")]
    Store(#[from] ::redis::RedisError),
}

/// Records subject liveness in a shared ephemeral store.
///
/// The core request flows only ever write (`touch`); `is_online` computes
/// liveness as marker-not-yet-expired and exists for callers that need a
/// read view.
#[async_trait::async_trait]
pub trait PresenceTracker: Send + Sync {
    /// Mark `subject_id` online, (re)starting its expiry countdown.
    async fn touch(&self, subject_id: &str) -> Result<(), PresenceError>;

    /// Whether `subject_id` has a marker that has not yet expired.
    async fn is_online(&self, subject_id: &str) -> Result<bool, PresenceError>;
}
