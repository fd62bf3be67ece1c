//! Role-change notifications consumed by the engine's invalidation listener.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::GrantKey;

/// A role was assigned to or revoked from a principal.
///
/// Emitted by the role administration collaborator on every assignment
/// and revocation; the payload shape is identical for both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleChangeEvent {
    /// The affected principal.
    pub principal_id: Uuid,
    /// The role that was assigned or revoked.
    pub role_id: Uuid,
    /// The tenant context of the assignment.
    pub tenant_id: Uuid,
    /// The organization context of the assignment.
    pub organization_id: Uuid,
}

impl RoleChangeEvent {
    /// The grant key whose cached resolution this change affects.
    #[must_use]
    pub fn grant_key(&self) -> GrantKey {
        GrantKey::new(self.principal_id, self.tenant_id, self.organization_id)
    }
}

/// Consumer of role-change notifications.
///
/// Callbacks are synchronous by contract: they must complete before
/// the administration operation's result is considered visible, so any
/// evaluation a client triggers after observing the change sees a
/// fresh resolution rather than a stale cache entry.
pub trait RoleChangeListener: Send + Sync {
    /// A role was assigned to a principal.
    fn on_role_assigned(&self, event: &RoleChangeEvent);

    /// A role was revoked from a principal.
    fn on_role_revoked(&self, event: &RoleChangeEvent);
}
