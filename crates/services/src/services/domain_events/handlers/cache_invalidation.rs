use async_trait::async_trait;

use crate::services::domain_events::{
    DomainEvent, EventHandler, ExecutionMode, HandlerContext, HandlerError,
};

/// Evicts cached queue state when a `CacheReset` event arrives.
///
/// Runs inline so that once `dispatch` returns, readers no longer see the
/// stale entry.
#[derive(Debug, Default)]
pub struct CacheInvalidationHandler;

impl CacheInvalidationHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventHandler for CacheInvalidationHandler {
    fn name(&self) -> &'static str {
        "cache_invalidation"
    }

    fn execution_mode(&self) -> ExecutionMode {
        ExecutionMode::Inline
    }

    fn handles(&self, event: &DomainEvent) -> bool {
        matches!(event, DomainEvent::CacheReset(_))
    }

    async fn handle(&self, event: DomainEvent, ctx: &HandlerContext) -> Result<(), HandlerError> {
        let DomainEvent::CacheReset(reset) = event else {
            return Ok(());
        };

        let key = reset.key();
        let evicted = ctx.cache.invalidate(key).await.is_some();

        tracing::info!(
            key = %key,
            occurred_at = %reset.occurred_at(),
            evicted,
            "Cache reset applied"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use db::models::{
        cache_reset_event::{CacheResetEvent, QueueCacheKey},
        review::ReviewSubmission,
    };
    use serde_json::json;
    use tokio::sync::RwLock;

    use super::*;
    use crate::services::{config::Config, queue_cache::QueueCache};

    fn test_context() -> HandlerContext {
        HandlerContext::new(
            Arc::new(QueueCache::default()),
            Arc::new(RwLock::new(Config::default())),
        )
    }

    #[test]
    fn test_only_handles_cache_resets() {
        let handler = CacheInvalidationHandler::new();

        assert!(handler.handles(&DomainEvent::CacheReset(CacheResetEvent::now(1, 2, 3))));
        assert!(!handler.handles(&DomainEvent::ReviewSubmitted(ReviewSubmission::new(
            1, 2, 3, None
        ))));
        assert_eq!(handler.execution_mode(), ExecutionMode::Inline);
    }

    #[tokio::test]
    async fn test_evicts_matching_key_only() {
        let ctx = test_context();
        let target = QueueCacheKey {
            queue_id: 10,
            customer_id: 5,
            employee_id: 2,
        };
        let other = QueueCacheKey {
            employee_id: 3,
            ..target
        };
        ctx.cache.insert(target, json!({"position": 1})).await;
        ctx.cache.insert(other, json!({"position": 2})).await;

        CacheInvalidationHandler::new()
            .handle(
                DomainEvent::CacheReset(CacheResetEvent::now(10, 5, 2)),
                &ctx,
            )
            .await
            .unwrap();

        assert!(!ctx.cache.contains(target));
        assert!(ctx.cache.contains(other));
    }

    #[tokio::test]
    async fn test_missing_entry_is_not_an_error() {
        let ctx = test_context();

        let result = CacheInvalidationHandler::new()
            .handle(
                DomainEvent::CacheReset(CacheResetEvent::now(10, 5, 2)),
                &ctx,
            )
            .await;

        assert!(result.is_ok());
    }
}
