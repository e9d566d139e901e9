use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::AppState;

pub mod cache;
pub mod complaints;
pub mod queues;
pub mod reviews;

async fn health() -> &'static str {
    "ok"
}

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .merge(queues::router())
        .merge(reviews::router())
        .merge(complaints::router())
        .merge(cache::router());

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
