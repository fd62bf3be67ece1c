#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Permission Engine Module
//!
//! Decides, for a `(principal, tenant, organization, permission code,
//! requested scope)` tuple, whether an action is allowed — and if
//! denied, why. Grants are derived from role assignments held in an
//! external store, aggregated to the broadest scope per permission
//! code, and cached per principal context with event-driven
//! invalidation.
//!
//! Components:
//!
//! - [`GrantResolver`] - computes authoritative grant sets from the role store
//! - [`GrantsCache`] - read-through cache with explicit invalidation
//! - [`Service`] - the decision pipeline ([`PermissionEngineClient`] impl)
//! - [`InvalidationListener`] - evicts cache entries on role changes
//!
//! [`PermissionEngineClient`]: permission_engine_sdk::PermissionEngineClient

pub mod config;
pub mod domain;

pub use config::{CacheConfig, PermissionEngineConfig};
pub use domain::{GrantResolver, GrantsCache, InvalidationListener, Service};
