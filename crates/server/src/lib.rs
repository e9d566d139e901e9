pub mod error;
pub mod routes;

use std::sync::Arc;

use services::services::{
    config::Config,
    domain_events::{
        CacheInvalidationHandler, DispatcherBuilder, DomainEvent, DomainEventDispatcher,
        HandlerContext, RequestAuditHandler,
    },
    queue_cache::QueueCache,
    validation::ValidationRules,
};
use thiserror::Error;
use tokio::sync::RwLock;

/// Error type for server startup
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind to address: {0}")]
    Bind(#[from] std::io::Error),
    #[error("Invalid port value '{0}'")]
    InvalidPort(String),
}

/// Shared state handed to every route.
#[derive(Clone)]
pub struct AppState {
    config: Arc<RwLock<Config>>,
    cache: Arc<QueueCache>,
    dispatcher: Arc<DomainEventDispatcher>,
}

impl AppState {
    /// Wires the cache and the default event handlers.
    pub fn new(config: Config) -> Self {
        let cache = Arc::new(QueueCache::new(&config.cache));
        let config = Arc::new(RwLock::new(config));

        let dispatcher = DispatcherBuilder::new(HandlerContext::new(
            Arc::clone(&cache),
            Arc::clone(&config),
        ))
        .with_handler(CacheInvalidationHandler::new())
        .with_handler(RequestAuditHandler)
        .build();

        Self {
            config,
            cache,
            dispatcher: Arc::new(dispatcher),
        }
    }

    pub fn cache(&self) -> &QueueCache {
        &self.cache
    }

    pub async fn validation_rules(&self) -> ValidationRules {
        self.config.read().await.validation.clone()
    }

    pub async fn publish(&self, event: DomainEvent) {
        self.dispatcher.dispatch(event).await;
    }
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let terminate = async {
            if let Ok(mut sigterm) = signal(SignalKind::terminate()) {
                sigterm.recv().await;
            } else {
                tracing::error!("Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        };

        tokio::select! {
            _ = ctrl_c => {},
            _ = terminate => {},
        }
    }

    #[cfg(not(unix))]
    {
        ctrl_c.await;
    }
}
