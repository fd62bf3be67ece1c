//! Public API trait for the permission engine.

use async_trait::async_trait;

use crate::error::EvaluationError;
use crate::models::{EvaluationRequest, EvaluationResult};

/// Public evaluation API for the permission engine.
///
/// Consumed by request-authorization middleware or any other caller
/// that needs an allow/deny decision:
///
/// ```ignore
/// let result = engine.evaluate(request).await?;
///
/// if result.allowed {
///     // proceed
/// } else {
///     // map result.denial_reason / result.message to a 403-equivalent
/// }
/// ```
#[async_trait]
pub trait PermissionEngineClient: Send + Sync {
    /// Decide whether the requested action is allowed, and if not, why.
    ///
    /// A denied outcome is a normal result, not an error.
    ///
    /// # Errors
    ///
    /// - [`EvaluationError::Resolution`] if the backing role store
    ///   could not be queried (no decision can be made)
    /// - [`EvaluationError::InvalidScope`] if the request carries an
    ///   unrecognized scope value
    async fn evaluate(
        &self,
        request: EvaluationRequest,
    ) -> Result<EvaluationResult, EvaluationError>;
}
