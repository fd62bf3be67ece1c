//! Domain service for the permission engine: the decision pipeline.

use std::sync::Arc;

use async_trait::async_trait;
use permission_engine_sdk::{
    ConditionEvaluator, EvaluationError, EvaluationRequest, EvaluationResult,
    PermissionEngineClient,
};
use tracing::debug;

use crate::domain::cache::GrantsCache;

/// Permission evaluation service.
///
/// Stateless per call: all state lives in the [`GrantsCache`] and the
/// role store behind it. The pipeline runs four stages in a fixed
/// order — grant lookup, permission-code filter, scope containment,
/// optional condition hook — and the order is caller-visible: a
/// principal who lacks the permission entirely gets `no_grant`
/// regardless of the requested scope.
pub struct Service {
    cache: Arc<GrantsCache>,
    condition: Option<Arc<dyn ConditionEvaluator>>,
}

impl Service {
    #[must_use]
    pub fn new(cache: Arc<GrantsCache>) -> Self {
        Self {
            cache,
            condition: None,
        }
    }

    /// Install an attribute-based condition evaluator as the final
    /// pipeline stage. Without one the stage is a no-op.
    #[must_use]
    pub fn with_condition_evaluator(mut self, evaluator: Arc<dyn ConditionEvaluator>) -> Self {
        self.condition = Some(evaluator);
        self
    }

    /// Decide whether the requested action is allowed.
    ///
    /// A denial is a normal result carrying a reason and message; only
    /// infrastructure failure is an error.
    ///
    /// # Errors
    ///
    /// Propagates [`EvaluationError::Resolution`] when the grant set
    /// cannot be resolved — no decision is substituted for it.
    #[tracing::instrument(
        skip_all,
        fields(
            principal_id = %request.principal_id,
            permission = %request.permission_code,
            requested_scope = %request.requested_scope,
        )
    )]
    pub async fn evaluate(
        &self,
        request: EvaluationRequest,
    ) -> Result<EvaluationResult, EvaluationError> {
        let grants = self.cache.get(&request.grant_key()).await?;

        let Some(granted) = grants.scope_of(&request.permission_code) else {
            debug!("denied: permission not granted");
            return Ok(EvaluationResult::no_grant(&request.permission_code));
        };

        if !granted.contains(request.requested_scope) {
            debug!(granted_scope = %granted, "denied: grant scope too narrow");
            return Ok(EvaluationResult::scope_mismatch(
                &request.permission_code,
                granted,
                request.requested_scope,
            ));
        }

        if let Some(condition) = &self.condition {
            if !condition.check(&request, granted) {
                debug!(granted_scope = %granted, "denied: grant condition failed");
                return Ok(EvaluationResult::condition_failed(&request.permission_code));
            }
        }

        Ok(EvaluationResult::allowed())
    }
}

#[async_trait]
impl PermissionEngineClient for Service {
    async fn evaluate(
        &self,
        request: EvaluationRequest,
    ) -> Result<EvaluationResult, EvaluationError> {
        Self::evaluate(self, request).await
    }
}

impl std::fmt::Debug for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Service")
            .field("cache", &self.cache)
            .field("has_condition_evaluator", &self.condition.is_some())
            .finish()
    }
}
