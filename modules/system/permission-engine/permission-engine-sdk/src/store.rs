//! Backing-store trait implemented by the role administration collaborator.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::GrantResolutionError;
use crate::models::GrantKey;
use crate::scope::Scope;

/// Read access to the authoritative role/permission store.
///
/// The engine never mutates role assignments; it only reads them to
/// derive effective grants. Both methods surface infrastructure
/// failures as [`GrantResolutionError`] — a failed query must never be
/// mistaken for an empty answer.
#[async_trait]
pub trait RoleStore: Send + Sync {
    /// IDs of the roles the principal actively holds within the key's
    /// tenant/organization context.
    ///
    /// # Errors
    ///
    /// Returns [`GrantResolutionError`] if the store cannot be queried.
    async fn load_role_assignments(
        &self,
        key: &GrantKey,
    ) -> Result<Vec<Uuid>, GrantResolutionError>;

    /// The `(permission code, defined scope)` associations owned by a role.
    ///
    /// # Errors
    ///
    /// Returns [`GrantResolutionError`] if the store cannot be queried.
    async fn load_role_permissions(
        &self,
        role_id: Uuid,
    ) -> Result<Vec<(String, Scope)>, GrantResolutionError>;
}
