//! Cache invalidation driven by role-change notifications.

use std::sync::Arc;

use permission_engine_sdk::{RoleChangeEvent, RoleChangeListener};
use tracing::debug;

use crate::domain::cache::GrantsCache;

/// Evicts cached grant sets when roles are assigned or revoked.
///
/// Registered with the role administration collaborator's notification
/// channel. Eviction completes synchronously inside the callback, so
/// any evaluation a client triggers after observing the role change
/// resolves freshly from the store. Unrelated concurrent changes to
/// the same key are safe: last invalidation wins, followed by a fresh
/// resolution on the next read.
pub struct InvalidationListener {
    cache: Arc<GrantsCache>,
}

impl InvalidationListener {
    #[must_use]
    pub fn new(cache: Arc<GrantsCache>) -> Self {
        Self { cache }
    }
}

impl RoleChangeListener for InvalidationListener {
    fn on_role_assigned(&self, event: &RoleChangeEvent) {
        let key = event.grant_key();
        debug!(key = %key, role_id = %event.role_id, "role assigned, invalidating grants");
        self.cache.invalidate(&key);
    }

    fn on_role_revoked(&self, event: &RoleChangeEvent) {
        let key = event.grant_key();
        debug!(key = %key, role_id = %event.role_id, "role revoked, invalidating grants");
        self.cache.invalidate(&key);
    }
}

impl std::fmt::Debug for InvalidationListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InvalidationListener")
            .field("cache", &self.cache)
            .finish()
    }
}
