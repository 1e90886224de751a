//! In-memory presence tracker
//!
//! Stand-in for Redis in tests and local development: markers live in a
//! map of expiry deadlines, and liveness is computed against the clock
//! exactly like the real store's TTL semantics.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::{PresenceError, PresenceTracker, PRESENCE_TTL};

#[derive(Clone)]
pub struct MockPresenceTracker {
    ttl: Duration,
    deadlines: Arc<Mutex<HashMap<String, Instant>>>,
}

impl MockPresenceTracker {
    pub fn new() -> Self {
        Self::with_ttl(PRESENCE_TTL)
    }

    /// Tracker with a custom TTL, so tests can observe decay without
    /// waiting out the real five-minute window.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            deadlines: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Number of subjects with a live marker.
    pub fn online_count(&self) -> usize {
        let now = Instant::now();
        self.deadlines
            .lock()
            .expect("presence mock lock poisoned")
            .values()
            .filter(|deadline| now < **deadline)
            .count()
    }
}

impl Default for MockPresenceTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl PresenceTracker for MockPresenceTracker {
    async fn touch(&self, subject_id: &str) -> Result<(), PresenceError> {
        let deadline = Instant::now() + self.ttl;
        self.deadlines
            .lock()
            .expect("presence mock lock poisoned")
            .insert(subject_id.to_string(), deadline);
        Ok(())
    }

    async fn is_online(&self, subject_id: &str) -> Result<bool, PresenceError> {
        let alive = self
            .deadlines
            .lock()
            .expect("presence mock lock poisoned")
            .get(subject_id)
            .is_some_and(|deadline| Instant::now() < *deadline);
        Ok(alive)
    }
}
