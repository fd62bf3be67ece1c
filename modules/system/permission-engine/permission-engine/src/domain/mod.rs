//! Domain layer for the permission engine.

pub mod cache;
pub mod listener;
pub mod resolver;
pub mod service;


pub use cache::GrantsCache;
pub use listener::InvalidationListener;
pub use resolver::GrantResolver;
pub use service::Service;
