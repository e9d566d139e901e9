use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

use super::DomainEvent;
use crate::services::{config::Config, queue_cache::QueueCache};

/// Determines how an event handler should be executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Handler runs inline (blocking) - the dispatcher waits for completion.
    Inline,
    /// Handler runs via `tokio::spawn` (fire-and-forget) - the dispatcher does not wait.
    Spawned,
}

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("Handler failed: {0}")]
    Failed(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Shared services handed to every handler.
#[derive(Clone)]
pub struct HandlerContext {
    pub cache: Arc<QueueCache>,
    /// Live configuration, shared with the server; updates are visible to handlers.
    pub config: Arc<RwLock<Config>>,
}

impl HandlerContext {
    pub fn new(cache: Arc<QueueCache>, config: Arc<RwLock<Config>>) -> Self {
        Self { cache, config }
    }
}

/// Trait for domain event handlers.
///
/// Handlers choose their execution mode and filter the events they care
/// about via `handles`.
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// Returns the name of this handler (for logging and ordering).
    fn name(&self) -> &'static str;

    fn execution_mode(&self) -> ExecutionMode;

    /// Returns true if this handler should process the given event.
    fn handles(&self, event: &DomainEvent) -> bool;

    /// Handles the event. Called only if `handles` returned true.
    async fn handle(&self, event: DomainEvent, ctx: &HandlerContext) -> Result<(), HandlerError>;
}
