//! Optional attribute-based constraint hook.

use crate::models::EvaluationRequest;
use crate::scope::Scope;

/// Attribute-based constraint evaluation attached to grants.
///
/// Runs as the last pipeline stage, after the permission-code and
/// scope checks have passed. When no evaluator is installed the stage
/// is a no-op and the request is allowed.
///
/// Implementations inspect `request.attributes` (caller-supplied
/// context) and return `false` to deny with
/// [`DenialReason::ConditionFailed`](crate::models::DenialReason).
pub trait ConditionEvaluator: Send + Sync {
    /// Whether the conditions on this grant accept the request.
    ///
    /// `granted` is the effective scope the principal holds the
    /// permission at.
    fn check(&self, request: &EvaluationRequest, granted: Scope) -> bool;
}
