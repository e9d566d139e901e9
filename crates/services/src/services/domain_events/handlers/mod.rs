//! Domain event handlers.
//!
//! This module contains the handlers shipped with the service: cache
//! invalidation and the request audit log.

mod cache_invalidation;
mod request_audit;

pub use cache_invalidation::CacheInvalidationHandler;
pub use request_audit::RequestAuditHandler;
