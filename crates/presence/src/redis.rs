//! Redis-backed presence tracker

use redis::aio::ConnectionManager;
use redis::AsyncCommands;

use crate::{PresenceError, PresenceTracker, ONLINE_MARKER, PRESENCE_TTL};

/// Presence tracker over a shared Redis instance.
///
/// The connection manager is a multiplexed handle opened once at startup;
/// it is cloned per call so an in-flight touch never serializes other
/// request handlers.
#[derive(Clone)]
pub struct RedisPresenceTracker {
    conn: ConnectionManager,
}

impl RedisPresenceTracker {
    pub async fn new(redis_url: &str) -> Result<Self, PresenceError> {
        let client = redis::Client::open(redis_url)?;
        let conn = ConnectionManager::new(client).await?;
        Ok(Self { conn })
    }

    fn presence_key(subject_id: &str) -> String {
        format!("presence:{subject_id}")
    }
}

#[async_trait::async_trait]
impl PresenceTracker for RedisPresenceTracker {
    async fn touch(&self, subject_id: &str) -> Result<(), PresenceError> {
        let mut conn = self.conn.clone();
        conn.set_ex::<_, _, ()>(
            Self::presence_key(subject_id),
            ONLINE_MARKER,
            PRESENCE_TTL.as_secs(),
        )
        .await?;
        Ok(())
    }

    async fn is_online(&self, subject_id: &str) -> Result<bool, PresenceError> {
        let mut conn = self.conn.clone();
        let exists: bool = conn.exists(Self::presence_key(subject_id)).await?;
        Ok(exists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presence_keys_are_namespaced_by_subject() {
        assert_eq!(
            RedisPresenceTracker::presence_key("uuid-1234"),
            "presence:uuid-1234"
        );
    }
}
