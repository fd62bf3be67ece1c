#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Permission Engine SDK
//!
//! This crate provides the public API for the `permission_engine` module:
//!
//! - [`PermissionEngineClient`] - Public evaluation API trait for consumers
//! - [`RoleStore`] - Backing-store trait implemented by the role administration collaborator
//! - [`RoleChangeListener`] - Notification consumer trait for role assignment/revocation
//! - [`ConditionEvaluator`] - Optional attribute-based constraint hook
//! - [`Scope`] - The scope lattice (`self < organization < tenant`)
//! - [`EvaluationRequest`], [`EvaluationResult`], [`DenialReason`] - Evaluation models
//! - [`GrantKey`], [`GrantSet`] - Resolved-grant models
//! - [`EvaluationError`], [`GrantResolutionError`], [`InvalidScopeError`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use permission_engine_sdk::{EvaluationRequest, PermissionEngineClient, Scope};
//!
//! let request = EvaluationRequest::new(
//!     principal_id,
//!     tenant_id,
//!     organization_id,
//!     "file.upload",
//!     Scope::Own,
//! );
//!
//! let result = engine.evaluate(request).await?;
//! if !result.allowed {
//!     // result.denial_reason distinguishes "no such grant" from
//!     // "granted, but not broadly enough"
//! }
//! ```

pub mod api;
pub mod condition;
pub mod error;
pub mod events;
pub mod models;
pub mod scope;
pub mod store;

// Re-export main types at crate root
pub use api::PermissionEngineClient;
pub use condition::ConditionEvaluator;
pub use error::{EvaluationError, GrantResolutionError, InvalidScopeError};
pub use events::{RoleChangeEvent, RoleChangeListener};
pub use models::{DenialReason, EvaluationRequest, EvaluationResult, GrantKey, GrantSet};
pub use scope::Scope;
pub use store::RoleStore;
