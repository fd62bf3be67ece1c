//! Read-through cache of resolved grant sets.

use std::sync::Arc;
use std::time::Instant;

use dashmap::DashMap;
use permission_engine_sdk::{GrantKey, GrantResolutionError, GrantSet};
use tokio::sync::Mutex;
use tracing::debug;

use crate::config::CacheConfig;
use crate::domain::resolver::GrantResolver;

struct CacheEntry {
    grants: Arc<GrantSet>,
    inserted_at: Instant,
}

/// Per-key cache slot. `epoch` counts invalidations of the key; a
/// resolution snapshots it before hitting the store and only caches
/// its result if no invalidation landed in between.
#[derive(Default)]
struct KeyState {
    epoch: u64,
    entry: Option<CacheEntry>,
}

/// Read-through cache in front of [`GrantResolver`], keyed by
/// [`GrantKey`].
///
/// Entries are immutable once cached; the cache only ever replaces or
/// removes whole entries. Concurrent misses for the same key coalesce
/// into one store round-trip via a per-key gate, so a slow resolution
/// never serializes lookups for unrelated keys. Failed resolutions are
/// not cached. An invalidation that lands while a resolution for the
/// same key is in flight wins: the in-flight result is returned to its
/// caller but not cached, so the next lookup re-resolves.
pub struct GrantsCache {
    resolver: GrantResolver,
    slots: DashMap<GrantKey, KeyState>,
    inflight: DashMap<GrantKey, Arc<Mutex<()>>>,
    config: CacheConfig,
}

impl GrantsCache {
    #[must_use]
    pub fn new(resolver: GrantResolver, config: CacheConfig) -> Self {
        Self {
            resolver,
            slots: DashMap::new(),
            inflight: DashMap::new(),
            config,
        }
    }

    /// The grant set for `key`: cached if present, resolved and stored
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Propagates [`GrantResolutionError`] from the resolver unchanged.
    /// The error is not cached; the next call retries the store.
    pub async fn get(&self, key: &GrantKey) -> Result<Arc<GrantSet>, GrantResolutionError> {
        if let Some(hit) = self.lookup(key) {
            return Ok(hit);
        }

        // Claim "I am resolving this key" without blocking other keys.
        let gate = {
            let entry = self.inflight.entry(key.clone()).or_default();
            Arc::clone(entry.value())
        };
        let _claim = gate.lock().await;

        // A concurrent caller may have resolved the key while we waited.
        if let Some(hit) = self.lookup(key) {
            return Ok(hit);
        }

        let epoch = self.epoch_of(key);
        let outcome = match self.resolver.resolve(key).await {
            Ok(grants) => {
                let grants = Arc::new(grants);
                self.store_if_current(key, epoch, Arc::clone(&grants));
                Ok(grants)
            }
            Err(e) => Err(e),
        };
        self.inflight.remove(key);
        outcome
    }

    /// Evict the cached entry for `key` and bump its epoch, so that any
    /// in-flight resolution for the key discards its result instead of
    /// caching it.
    ///
    /// Idempotent and non-blocking relative to [`GrantsCache::get`];
    /// the next lookup for the key recomputes from the store.
    pub fn invalidate(&self, key: &GrantKey) {
        let mut state = self.slots.entry(key.clone()).or_default();
        state.epoch += 1;
        if state.entry.take().is_some() {
            debug!(key = %key, "evicted cached grants");
        }
    }

    /// Number of currently cached grant sets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots
            .iter()
            .filter(|state| state.entry.is_some())
            .count()
    }

    /// Whether the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A fresh, non-expired cached entry for `key`.
    ///
    /// An entry older than the configured TTL is treated as a miss;
    /// the replacement written by the next resolution supersedes it.
    fn lookup(&self, key: &GrantKey) -> Option<Arc<GrantSet>> {
        let state = self.slots.get(key)?;
        let entry = state.entry.as_ref()?;
        if let Some(ttl) = self.config.ttl() {
            if entry.inserted_at.elapsed() >= ttl {
                return None;
            }
        }
        Some(Arc::clone(&entry.grants))
    }

    fn epoch_of(&self, key: &GrantKey) -> u64 {
        self.slots.get(key).map_or(0, |state| state.epoch)
    }

    /// Cache `grants` unless the key was invalidated after `epoch` was
    /// snapshotted. The slot's shard lock makes the epoch check and the
    /// write one atomic step relative to [`GrantsCache::invalidate`].
    fn store_if_current(&self, key: &GrantKey, epoch: u64, grants: Arc<GrantSet>) {
        let mut state = self.slots.entry(key.clone()).or_default();
        if state.epoch == epoch {
            debug!(key = %key, grants = grants.len(), "cached resolved grants");
            state.entry = Some(CacheEntry {
                grants,
                inserted_at: Instant::now(),
            });
        } else {
            debug!(key = %key, "resolution superseded by invalidation; not cached");
        }
    }
}

impl std::fmt::Debug for GrantsCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrantsCache")
            .field("entries", &self.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
