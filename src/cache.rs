//! Session-scoped cache of resolution outcomes.
//!
//! Keys are normalized query text (the matcher's rule), so "Radiohead" and
//! "radiohead " share one entry. Entries expire after a fixed TTL, checked
//! lazily on read - there is no background sweep. Negative outcomes
//! (NotFound, Error) are cached too, so repeated lookups of an unresolvable
//! name within the TTL also skip the network.
//!
//! The map is mutex-guarded and the lock is never held across an await.
//! Concurrent lookups of the *same* key may therefore both miss and both
//! resolve - accepted; the call volumes here are hundreds, not millions,
//! and single-flight coalescing isn't worth its complexity.

use std::collections::HashMap;
use std::future::Future;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::resolver::Outcome;
use crate::resolver::matcher;

/// Default entry lifetime, matching the session cache of the interactive UI.
pub const DEFAULT_TTL: Duration = Duration::from_secs(600);

struct CacheEntry {
    outcome: Outcome,
    stored_at: Instant,
}

/// TTL cache mapping normalized query text to a resolution outcome.
pub struct ResolutionCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl ResolutionCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Return the cached outcome for `query`, or run `resolve_fn` and store
    /// its result under a fresh timestamp.
    pub async fn get_or_resolve<F, Fut>(&self, query: &str, resolve_fn: F) -> Outcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Outcome>,
    {
        let key = matcher::normalize(query);

        if let Some(outcome) = self.lookup(&key) {
            tracing::debug!(query, "cache hit");
            return outcome;
        }

        let outcome = resolve_fn().await;

        self.entries.lock().insert(
            key,
            CacheEntry {
                outcome: outcome.clone(),
                stored_at: Instant::now(),
            },
        );
        outcome
    }

    /// Live-entry lookup; expired entries are removed and treated as misses.
    fn lookup(&self, key: &str) -> Option<Outcome> {
        let mut entries = self.entries.lock();
        match entries.get(key) {
            Some(entry) if entry.stored_at.elapsed() < self.ttl => Some(entry.outcome.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Number of live (possibly stale) entries; for diagnostics.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl Default for ResolutionCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}
