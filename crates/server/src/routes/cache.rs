use axum::{
    Json, Router, body::Bytes, extract::State, http::StatusCode, routing::post,
};
use db::models::cache_reset_event::CacheResetEvent;
use services::services::{domain_events::DomainEvent, validation::parse_request};
use utils::response::ApiResponse;

use crate::{AppState, error::ApiError};

/// POST /api/cache/reset - Publishes a cache reset event
///
/// Returns once inline handlers ran, so the targeted entry is already gone.
pub async fn reset(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<ApiResponse<CacheResetEvent>>), ApiError> {
    let rules = state.validation_rules().await;
    let event: CacheResetEvent = parse_request(&body, &rules)?;

    state.publish(DomainEvent::CacheReset(event.clone())).await;

    Ok((StatusCode::ACCEPTED, Json(ApiResponse::success(event))))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/cache/reset", post(reset))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use chrono::{TimeZone, Utc};
    use db::models::cache_reset_event::QueueCacheKey;
    use serde_json::json;
    use services::services::config::Config;

    use super::*;
    use crate::routes::test_support::{app_with, send_json};

    #[tokio::test]
    async fn test_reset_evicts_cached_entry() {
        let (app, state) = app_with(Config::default());
        let key = QueueCacheKey {
            queue_id: 10,
            customer_id: 5,
            employee_id: 2,
        };
        state.cache().insert(key, json!({"position": 4})).await;

        let (status, response) = send_json::<CacheResetEvent>(
            app,
            Method::POST,
            "/api/cache/reset",
            r#"{"occurred_at":"2024-06-01T12:00:00Z","queue_id":10,"customer_id":5,"employee_id":2}"#,
        )
        .await;

        assert_eq!(status, StatusCode::ACCEPTED);
        let event = response.into_data().unwrap();
        assert_eq!(
            event.occurred_at(),
            Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
        );
        assert_eq!(event.key(), key);
        assert!(!state.cache().contains(key));
    }

    #[tokio::test]
    async fn test_reset_rejects_missing_identifier() {
        let (app, _) = app_with(Config::default());

        let (status, _) = send_json::<CacheResetEvent>(
            app,
            Method::POST,
            "/api/cache/reset",
            r#"{"occurred_at":"2024-06-01T12:00:00Z","queue_id":10,"customer_id":5}"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
