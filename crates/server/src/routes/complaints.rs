use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::put,
};
use db::models::complaint::ComplaintStatusUpdate;
use services::services::{
    domain_events::DomainEvent,
    validation::{ensure_positive_id, parse_request},
};
use utils::response::ApiResponse;

use crate::{AppState, error::ApiError};

/// PUT /api/complaints/{complaint_id}/status - Changes a complaint's status
pub async fn update_status(
    State(state): State<AppState>,
    Path(complaint_id): Path<i64>,
    body: Bytes,
) -> Result<(StatusCode, Json<ApiResponse<ComplaintStatusUpdate>>), ApiError> {
    ensure_positive_id("complaint_id", complaint_id)?;

    let rules = state.validation_rules().await;
    let update: ComplaintStatusUpdate = parse_request(&body, &rules)?;

    state
        .publish(DomainEvent::ComplaintStatusUpdated {
            complaint_id,
            update: update.clone(),
        })
        .await;

    Ok((StatusCode::ACCEPTED, Json(ApiResponse::success(update))))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/complaints/{complaint_id}/status", put(update_status))
}
