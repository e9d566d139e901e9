//! Domain event dispatcher for routing events to registered handlers.

use std::sync::Arc;

use tracing::{debug, warn};

use super::{DomainEvent, EventHandler, ExecutionMode, HandlerContext};

/// Dispatches domain events to registered handlers.
///
/// Handlers are partitioned by execution mode:
/// - Inline handlers run sequentially and block until completion
/// - Spawned handlers run via `tokio::spawn` (fire-and-forget)
///
/// Handlers are sorted by name for deterministic ordering.
pub struct DomainEventDispatcher {
    inline_handlers: Vec<Arc<dyn EventHandler>>,
    spawned_handlers: Vec<Arc<dyn EventHandler>>,
    ctx: Arc<HandlerContext>,
}

impl DomainEventDispatcher {
    /// Dispatches an event to all handlers that accept it.
    ///
    /// Handler errors are logged, never returned to the publisher.
    pub async fn dispatch(&self, event: DomainEvent) {
        for handler in &self.inline_handlers {
            if handler.handles(&event) {
                debug!(
                    handler = handler.name(),
                    event = event.kind(),
                    "Dispatching event to inline handler"
                );
                if let Err(e) = handler.handle(event.clone(), &self.ctx).await {
                    warn!(
                        handler = handler.name(),
                        event = event.kind(),
                        error = %e,
                        "Inline handler failed"
                    );
                }
            }
        }

        for handler in &self.spawned_handlers {
            if handler.handles(&event) {
                let handler = Arc::clone(handler);
                let event = event.clone();
                let ctx = Arc::clone(&self.ctx);

                debug!(
                    handler = handler.name(),
                    event = event.kind(),
                    "Spawning handler"
                );

                tokio::spawn(async move {
                    let kind = event.kind();
                    if let Err(e) = handler.handle(event, &ctx).await {
                        warn!(
                            handler = handler.name(),
                            event = kind,
                            error = %e,
                            "Spawned handler failed"
                        );
                    }
                });
            }
        }
    }

    pub fn handler_count(&self) -> usize {
        self.inline_handlers.len() + self.spawned_handlers.len()
    }
}

/// Builder for constructing a `DomainEventDispatcher`.
pub struct DispatcherBuilder {
    handlers: Vec<Arc<dyn EventHandler>>,
    ctx: HandlerContext,
}

impl DispatcherBuilder {
    pub fn new(ctx: HandlerContext) -> Self {
        Self {
            handlers: Vec::new(),
            ctx,
        }
    }

    pub fn with_handler<H: EventHandler + 'static>(mut self, handler: H) -> Self {
        self.handlers.push(Arc::new(handler));
        self
    }

    pub fn build(mut self) -> DomainEventDispatcher {
        self.handlers.sort_by_key(|h| h.name());

        let (inline, spawned): (Vec<_>, Vec<_>) = self
            .handlers
            .into_iter()
            .partition(|h| h.execution_mode() == ExecutionMode::Inline);

        DomainEventDispatcher {
            inline_handlers: inline,
            spawned_handlers: spawned,
            ctx: Arc::new(self.ctx),
        }
    }
}
