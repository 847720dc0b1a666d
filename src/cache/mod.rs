//! TTL-bounded key/value cache
//!
//! Process-wide memoization store for lookup results. Entries expire after a
//! per-entry TTL; a background sweeper reclaims expired entries on a fixed
//! interval. The sweep cadence is independent of (and coarser than) the TTL,
//! so `get` re-checks expiry on every read — an entry may linger past its
//! deadline until the next sweep, but it is never served past it.
//!
//! There is no explicit delete/invalidate operation: the dataset behind the
//! cached values is immutable for the life of the process, so the staleness
//! bound is purely the TTL.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{interval, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

struct CacheEntry<V> {
    value: V,
    expires_at: Instant,
}

/// Thread-safe in-memory cache with per-entry expiry.
///
/// Each `get`/`insert` is atomic with respect to other calls on the same key
/// (the map lock covers the whole operation); no guarantee spans multiple
/// keys. Clones share the same underlying map.
#[derive(Clone)]
pub struct TtlCache<V> {
    entries: Arc<RwLock<HashMap<String, CacheEntry<V>>>>,
}

impl<V: Clone + Send + Sync + 'static> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone + Send + Sync + 'static> TtlCache<V> {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Cached value for `key`, or `None`. A present-but-expired entry
    /// behaves identically to an absent one.
    pub async fn get(&self, key: &str) -> Option<V> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|entry| entry.expires_at > Instant::now())
            .map(|entry| entry.value.clone())
    }

    /// Store a value, starting its expiry countdown. Overwriting an existing
    /// key simply resets its expiry.
    pub async fn insert(&self, key: impl Into<String>, value: V, ttl: Duration) {
        let entry = CacheEntry {
            value,
            expires_at: Instant::now() + ttl,
        };
        self.entries.write().await.insert(key.into(), entry);
    }

    /// Number of entries currently held, expired ones included.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Remove expired entries; returns how many were reclaimed.
    async fn sweep(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| entry.expires_at > now);
        before - entries.len()
    }

    /// Start the background sweeper, bound to this cache's lifetime.
    ///
    /// Runs until the returned handle is shut down. Missed ticks are skipped
    /// rather than bursted.
    pub fn spawn_sweeper(&self, period: Duration) -> CacheSweeper {
        let cache = self.clone();
        let token = CancellationToken::new();
        let task_token = token.clone();

        info!("Starting cache sweeper with interval {:?}", period);
        let handle = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = task_token.cancelled() => break,
                    _ = ticker.tick() => {
                        let reclaimed = cache.sweep().await;
                        if reclaimed > 0 {
                            debug!("Cache sweep reclaimed {} expired entries", reclaimed);
                        }
                    }
                }
            }
        });

        CacheSweeper { token, handle }
    }
}

/// Handle to the background sweep task; cancel it on process teardown.
pub struct CacheSweeper {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl CacheSweeper {
    pub async fn shutdown(self) {
        self.token.cancel();
        let _ = self.handle.await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn expired_entry_behaves_as_absent() {
        let cache = TtlCache::new();
        cache.insert("k", 1u32, Duration::from_secs(5)).await;

        assert_eq!(cache.get("k").await, Some(1));

        tokio::time::advance(Duration::from_secs(6)).await;
        // No sweep has run; expiry is re-checked on read.
        assert_eq!(cache.len().await, 1);
        assert_eq!(cache.get("k").await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn overwrite_resets_expiry() {
        let cache = TtlCache::new();
        cache.insert("k", 1u32, Duration::from_secs(5)).await;

        tokio::time::advance(Duration::from_secs(4)).await;
        cache.insert("k", 2u32, Duration::from_secs(5)).await;

        tokio::time::advance(Duration::from_secs(4)).await;
        assert_eq!(cache.get("k").await, Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn sweeper_reclaims_expired_entries() {
        let cache = TtlCache::new();
        let sweeper = cache.spawn_sweeper(Duration::from_secs(60));

        cache.insert("a", 1u32, Duration::from_secs(5)).await;
        cache.insert("b", 2u32, Duration::from_secs(3600)).await;
        assert_eq!(cache.len().await, 2);

        tokio::time::advance(Duration::from_secs(61)).await;
        tokio::task::yield_now().await;
        tokio::task::yield_now().await;

        assert_eq!(cache.len().await, 1);
        assert_eq!(cache.get("b").await, Some(2));

        sweeper.shutdown().await;
    }

    #[tokio::test]
    async fn missing_key_is_a_miss() {
        let cache: TtlCache<u32> = TtlCache::new();
        assert_eq!(cache.get("nope").await, None);
        assert!(cache.is_empty().await);
    }
}
