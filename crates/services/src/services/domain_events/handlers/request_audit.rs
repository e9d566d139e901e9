use async_trait::async_trait;

use crate::services::domain_events::{
    DomainEvent, EventHandler, ExecutionMode, HandlerContext, HandlerError,
};

/// Writes one structured log line per accepted client request.
pub struct RequestAuditHandler;

#[async_trait]
impl EventHandler for RequestAuditHandler {
    fn name(&self) -> &'static str {
        "request_audit"
    }

    fn execution_mode(&self) -> ExecutionMode {
        ExecutionMode::Spawned
    }

    fn handles(&self, event: &DomainEvent) -> bool {
        !matches!(event, DomainEvent::CacheReset(_))
    }

    async fn handle(&self, event: DomainEvent, _ctx: &HandlerContext) -> Result<(), HandlerError> {
        match event {
            DomainEvent::QueueEnrollmentRequested(request) => tracing::info!(
                request_id = %request.metadata.request_id,
                employee_id = request.employee_id,
                customer_id = request.customer_id,
                service_id = request.service_id,
                start_time = %request.start_time,
                "Queue enrollment requested"
            ),
            DomainEvent::ReviewSubmitted(review) => tracing::info!(
                request_id = %review.metadata.request_id,
                queue_id = review.queue_id,
                customer_id = review.customer_id,
                grade = review.grade,
                has_text = review.review_text.is_some(),
                "Review submitted"
            ),
            DomainEvent::ComplaintStatusUpdated {
                complaint_id,
                update,
            } => tracing::info!(
                complaint_id,
                status = %update.complaint_status,
                has_response = update.response_text().is_some(),
                "Complaint status updated"
            ),
            DomainEvent::CacheReset(_) => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};
    use db::models::{
        cache_reset_event::CacheResetEvent,
        complaint::{ComplaintStatus, ComplaintStatusUpdate},
        queue_request::QueueEnrollmentRequest,
        review::ReviewSubmission,
    };
    use tokio::sync::RwLock;

    use super::*;
    use crate::services::{config::Config, queue_cache::QueueCache};

    fn test_context() -> HandlerContext {
        HandlerContext::new(
            Arc::new(QueueCache::default()),
            Arc::new(RwLock::new(Config::default())),
        )
    }

    fn request_events() -> Vec<DomainEvent> {
        vec![
            DomainEvent::QueueEnrollmentRequested(QueueEnrollmentRequest::new(
                7,
                3,
                1,
                Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
            )),
            DomainEvent::ReviewSubmitted(ReviewSubmission::new(
                10,
                3,
                5,
                Some("Quick service".to_string()),
            )),
            DomainEvent::ComplaintStatusUpdated {
                complaint_id: 4,
                update: ComplaintStatusUpdate::new(ComplaintStatus::Resolved, Some("  ".to_string())),
            },
        ]
    }

    #[test]
    fn test_runs_in_background() {
        assert_eq!(RequestAuditHandler.execution_mode(), ExecutionMode::Spawned);
        assert_eq!(RequestAuditHandler.name(), "request_audit");
    }

    #[test]
    fn test_handles_client_requests_only() {
        for event in request_events() {
            assert!(RequestAuditHandler.handles(&event), "{}", event.kind());
        }
        assert!(!RequestAuditHandler.handles(&DomainEvent::CacheReset(CacheResetEvent::now(10, 5, 2))));
    }

    #[tokio::test]
    async fn test_audit_never_fails_or_touches_cache() {
        let ctx = test_context();
        let key = CacheResetEvent::now(10, 3, 7).key();
        ctx.cache.insert(key, serde_json::json!({"position": 1})).await;

        for event in request_events() {
            RequestAuditHandler.handle(event, &ctx).await.unwrap();
        }

        assert!(ctx.cache.contains(key));
    }
}
