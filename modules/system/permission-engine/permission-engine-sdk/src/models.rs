//! Domain models for the permission engine.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::scope::Scope;

/// The key a principal's resolved grants are cached under.
///
/// A principal may hold different roles in different tenant/organization
/// contexts; each context resolves independently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GrantKey {
    /// The principal (user) being evaluated.
    pub principal_id: Uuid,
    /// The tenant context.
    pub tenant_id: Uuid,
    /// The organization context.
    pub organization_id: Uuid,
}

impl GrantKey {
    /// Create a grant key.
    #[must_use]
    pub fn new(principal_id: Uuid, tenant_id: Uuid, organization_id: Uuid) -> Self {
        Self {
            principal_id,
            tenant_id,
            organization_id,
        }
    }
}

impl fmt::Display for GrantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.principal_id, self.tenant_id, self.organization_id
        )
    }
}

/// A principal's effective grants within one tenant/organization context:
/// permission code mapped to the broadest scope any of their roles
/// grants it at.
///
/// Built by the grant resolver, shared immutably once cached. Possibly
/// empty (a principal with no roles), never null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantSet {
    grants: HashMap<String, Scope>,
}

impl GrantSet {
    /// Create an empty grant set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a `(permission code, scope)` pair observed on one of the
    /// principal's roles.
    ///
    /// If the code is already present, the broader scope wins: a
    /// principal's capabilities are the union of their roles, so the
    /// effective scope per code is the maximum.
    pub fn insert_max(&mut self, code: impl Into<String>, scope: Scope) {
        self.grants
            .entry(code.into())
            .and_modify(|current| {
                if scope > *current {
                    *current = scope;
                }
            })
            .or_insert(scope);
    }

    /// The effective scope this principal holds `code` at, if any.
    #[must_use]
    pub fn scope_of(&self, code: &str) -> Option<Scope> {
        self.grants.get(code).copied()
    }

    /// Number of distinct permission codes granted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.grants.len()
    }

    /// Whether the principal holds no grants at all in this context.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }

    /// Iterate over `(code, effective scope)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Scope)> {
        self.grants.iter().map(|(code, scope)| (code.as_str(), *scope))
    }
}

/// Why an evaluation denied access.
///
/// Closed tagged variant; callers may switch exhaustively. Distinct
/// from the boolean outcome: it tells "you have no such permission"
/// apart from "you have it, but not broadly enough".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    /// Access was allowed.
    #[default]
    None,
    /// The permission code is absent from the principal's grants.
    NoGrant,
    /// The permission is granted, but at a narrower scope than requested.
    ScopeMismatch,
    /// The grant's attached condition rejected the request.
    ConditionFailed,
}

/// One evaluation call: who wants to do what, how broadly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRequest {
    /// The principal (user) being evaluated.
    pub principal_id: Uuid,
    /// The tenant context.
    pub tenant_id: Uuid,
    /// The organization context.
    pub organization_id: Uuid,
    /// The permission code being exercised (e.g. `file.upload`).
    pub permission_code: String,
    /// The breadth the caller wants to act at.
    pub requested_scope: Scope,
    /// Caller-supplied context attributes for conditional grants.
    /// Ignored unless a condition evaluator is installed.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, serde_json::Value>,
}

impl EvaluationRequest {
    /// Create a request with no context attributes.
    #[must_use]
    pub fn new(
        principal_id: Uuid,
        tenant_id: Uuid,
        organization_id: Uuid,
        permission_code: impl Into<String>,
        requested_scope: Scope,
    ) -> Self {
        Self {
            principal_id,
            tenant_id,
            organization_id,
            permission_code: permission_code.into(),
            requested_scope,
            attributes: HashMap::new(),
        }
    }

    /// Add a context attribute for conditional-grant evaluation.
    #[must_use]
    pub fn attribute(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// The grant key this request resolves under.
    #[must_use]
    pub fn grant_key(&self) -> GrantKey {
        GrantKey::new(self.principal_id, self.tenant_id, self.organization_id)
    }
}

/// The outcome of one evaluation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Whether the action is allowed.
    pub allowed: bool,
    /// Classification of the denial; `None` when allowed.
    pub denial_reason: DenialReason,
    /// Human-readable diagnostic for the caller.
    pub message: String,
}

impl EvaluationResult {
    /// The permission is granted at sufficient scope.
    #[must_use]
    pub fn allowed() -> Self {
        Self {
            allowed: true,
            denial_reason: DenialReason::None,
            message: "permission granted".to_owned(),
        }
    }

    /// The permission code is absent from the principal's grants.
    #[must_use]
    pub fn no_grant(code: &str) -> Self {
        Self {
            allowed: false,
            denial_reason: DenialReason::NoGrant,
            message: format!("principal has not been granted {code}"),
        }
    }

    /// The grant is too narrow for the requested scope.
    #[must_use]
    pub fn scope_mismatch(code: &str, granted: Scope, requested: Scope) -> Self {
        Self {
            allowed: false,
            denial_reason: DenialReason::ScopeMismatch,
            message: format!(
                "{code} granted at {granted} cannot authorize {requested}-scope action"
            ),
        }
    }

    /// The grant's condition rejected the request.
    #[must_use]
    pub fn condition_failed(code: &str) -> Self {
        Self {
            allowed: false,
            denial_reason: DenialReason::ConditionFailed,
            message: format!("{code} grant condition rejected the request"),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn uid(s: &str) -> Uuid {
        Uuid::parse_str(s).unwrap()
    }

    const P: &str = "11111111-1111-1111-1111-111111111111";
    const T: &str = "22222222-2222-2222-2222-222222222222";
    const O: &str = "33333333-3333-3333-3333-333333333333";

    #[test]
    fn grant_key_display_is_colon_separated() {
        let key = GrantKey::new(uid(P), uid(T), uid(O));
        assert_eq!(key.to_string(), format!("{P}:{T}:{O}"));
    }

    #[test]
    fn grant_set_keeps_broadest_scope_per_code() {
        let mut set = GrantSet::new();
        set.insert_max("file.upload", Scope::Own);
        set.insert_max("file.upload", Scope::Organization);
        set.insert_max("file.upload", Scope::Own);

        assert_eq!(set.scope_of("file.upload"), Some(Scope::Organization));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn grant_set_never_narrows() {
        let mut set = GrantSet::new();
        set.insert_max("file.read", Scope::Tenant);
        set.insert_max("file.read", Scope::Own);

        assert_eq!(set.scope_of("file.read"), Some(Scope::Tenant));
    }

    #[test]
    fn empty_grant_set_answers_none() {
        let set = GrantSet::new();
        assert!(set.is_empty());
        assert_eq!(set.scope_of("file.upload"), None);
    }

    #[test]
    fn denial_reason_serde_tags() {
        assert_eq!(
            serde_json::to_string(&DenialReason::NoGrant).unwrap(),
            "\"no_grant\""
        );
        assert_eq!(
            serde_json::to_string(&DenialReason::ScopeMismatch).unwrap(),
            "\"scope_mismatch\""
        );
        assert_eq!(
            serde_json::from_str::<DenialReason>("\"condition_failed\"").unwrap(),
            DenialReason::ConditionFailed
        );
    }

    #[test]
    fn scope_mismatch_message_names_both_scopes() {
        let result =
            EvaluationResult::scope_mismatch("file.delete", Scope::Organization, Scope::Tenant);
        assert!(!result.allowed);
        assert_eq!(
            result.message,
            "file.delete granted at organization cannot authorize tenant-scope action"
        );
    }

    #[test]
    fn request_builder_collects_attributes() {
        let request = EvaluationRequest::new(uid(P), uid(T), uid(O), "file.upload", Scope::Own)
            .attribute("department", serde_json::json!("engineering"));

        assert_eq!(request.attributes.len(), 1);
        assert_eq!(request.grant_key(), GrantKey::new(uid(P), uid(T), uid(O)));
    }
}
