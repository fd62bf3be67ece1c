//! Grant resolution against the authoritative role store.

use std::sync::Arc;

use permission_engine_sdk::{GrantKey, GrantResolutionError, GrantSet, RoleStore};
use tracing::debug;

/// Computes the authoritative [`GrantSet`] for a principal context by
/// joining its active role assignments with each role's permission
/// associations.
///
/// When multiple roles grant the same permission code at different
/// scopes, the broadest scope wins — a principal's capabilities are
/// the union of their roles.
pub struct GrantResolver {
    store: Arc<dyn RoleStore>,
}

impl GrantResolver {
    #[must_use]
    pub fn new(store: Arc<dyn RoleStore>) -> Self {
        Self { store }
    }

    /// Resolve the effective grants for `key` from the backing store.
    ///
    /// Returns an empty set for a principal with no role assignments.
    ///
    /// # Errors
    ///
    /// Returns [`GrantResolutionError`] if the store cannot be queried.
    /// A failed resolution is never substituted with an empty set.
    #[tracing::instrument(skip_all, fields(key = %key))]
    pub async fn resolve(&self, key: &GrantKey) -> Result<GrantSet, GrantResolutionError> {
        let role_ids = self.store.load_role_assignments(key).await?;

        let mut grants = GrantSet::new();
        for role_id in &role_ids {
            for (code, scope) in self.store.load_role_permissions(*role_id).await? {
                grants.insert_max(code, scope);
            }
        }

        debug!(
            roles = role_ids.len(),
            grants = grants.len(),
            "resolved effective grants"
        );
        Ok(grants)
    }
}

impl std::fmt::Debug for GrantResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrantResolver").finish_non_exhaustive()
    }
}
