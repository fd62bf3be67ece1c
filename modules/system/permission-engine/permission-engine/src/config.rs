//! Configuration for the permission engine.

use std::time::Duration;

use serde::Deserialize;

/// Configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PermissionEngineConfig {
    /// Grants cache settings.
    pub cache: CacheConfig,
}

/// Grants cache settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CacheConfig {
    /// TTL safety net for cached grant sets, in seconds.
    ///
    /// Invalidation is event-driven and authoritative; the TTL only
    /// bounds staleness if a role-change notification is missed.
    /// `None` (the default) disables it.
    pub ttl_secs: Option<u64>,
}

impl CacheConfig {
    /// The configured TTL as a [`Duration`], if enabled.
    #[must_use]
    pub fn ttl(&self) -> Option<Duration> {
        self.ttl_secs.map(Duration::from_secs)
    }
}
