//! Error types for the permission engine.
//!
//! These represent caller and infrastructure failures only. A denied
//! evaluation is expressed via `EvaluationResult.allowed == false`
//! with a [`DenialReason`](crate::models::DenialReason), not as an
//! error variant.

use thiserror::Error;

/// An unrecognized scope token was supplied.
///
/// Caller error; not retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid scope: {value:?}")]
pub struct InvalidScopeError {
    /// The rejected token.
    pub value: String,
}

/// The backing role/permission store could not be queried.
///
/// Infrastructure error, potentially retryable by the caller. Must
/// never be converted into an implicit allow or deny: a resolution
/// failure is not "no grants".
#[derive(Debug, Error)]
pub enum GrantResolutionError {
    /// The store is unreachable.
    #[error("role store unavailable: {0}")]
    StoreUnavailable(String),

    /// An unexpected error occurred while querying the store.
    #[error("role store query failed: {0}")]
    Internal(String),
}

/// Errors that can abort an evaluation call.
///
/// Only infrastructure failure is exceptional; a "denied" outcome is a
/// normal, successful result.
#[derive(Debug, Error)]
pub enum EvaluationError {
    /// An unrecognized scope value was supplied.
    #[error(transparent)]
    InvalidScope(#[from] InvalidScopeError),

    /// Grant resolution against the backing store failed; no decision
    /// can be made.
    #[error(transparent)]
    Resolution(#[from] GrantResolutionError),
}
