use axum::{
    Json, Router, body::Bytes, extract::State, http::StatusCode, routing::post,
};
use db::models::review::ReviewSubmission;
use services::services::{domain_events::DomainEvent, validation::parse_request};
use utils::response::ApiResponse;

use crate::{AppState, error::ApiError};

/// POST /api/reviews - Accepts a review of a queue entry
pub async fn submit_review(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<ApiResponse<ReviewSubmission>>), ApiError> {
    let rules = state.validation_rules().await;
    let review: ReviewSubmission = parse_request(&body, &rules)?;

    state
        .publish(DomainEvent::ReviewSubmitted(review.clone()))
        .await;

    Ok((StatusCode::ACCEPTED, Json(ApiResponse::success(review))))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/reviews", post(submit_review))
}
