use axum::{
    Json, Router, body::Bytes, extract::State, http::StatusCode, routing::post,
};
use db::models::queue_request::QueueEnrollmentRequest;
use services::services::{domain_events::DomainEvent, validation::parse_request};
use utils::response::ApiResponse;

use crate::{AppState, error::ApiError};

/// POST /api/queues - Accepts a queue enrollment request
pub async fn enroll(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<ApiResponse<QueueEnrollmentRequest>>), ApiError> {
    let rules = state.validation_rules().await;
    let request: QueueEnrollmentRequest = parse_request(&body, &rules)?;

    state
        .publish(DomainEvent::QueueEnrollmentRequested(request.clone()))
        .await;

    Ok((StatusCode::ACCEPTED, Json(ApiResponse::success(request))))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/queues", post(enroll))
}
