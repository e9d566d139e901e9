//! Domain events and the dispatcher that routes them to handlers.
//!
//! Accepted requests and cache reset notifications are published as
//! [`DomainEvent`]s. Business logic that lives outside this crate plugs in by
//! registering an [`EventHandler`].

mod dispatcher;
mod handler;
pub mod handlers;

pub use dispatcher::{DispatcherBuilder, DomainEventDispatcher};
pub use handler::{EventHandler, ExecutionMode, HandlerContext, HandlerError};
pub use handlers::{CacheInvalidationHandler, RequestAuditHandler};

use db::models::{
    cache_reset_event::CacheResetEvent, complaint::ComplaintStatusUpdate,
    queue_request::QueueEnrollmentRequest, review::ReviewSubmission,
};

#[derive(Debug, Clone, PartialEq)]
pub enum DomainEvent {
    /// Cached state for a queue/customer/employee triple went stale.
    CacheReset(CacheResetEvent),

    /// A customer asked to join a queue.
    QueueEnrollmentRequested(QueueEnrollmentRequest),

    /// A customer reviewed a queue entry.
    ReviewSubmitted(ReviewSubmission),

    /// A complaint's status was changed.
    ComplaintStatusUpdated {
        complaint_id: i64,
        update: ComplaintStatusUpdate,
    },
}

impl DomainEvent {
    /// Short name used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            DomainEvent::CacheReset(_) => "cache_reset",
            DomainEvent::QueueEnrollmentRequested(_) => "queue_enrollment_requested",
            DomainEvent::ReviewSubmitted(_) => "review_submitted",
            DomainEvent::ComplaintStatusUpdated { .. } => "complaint_status_updated",
        }
    }
}
