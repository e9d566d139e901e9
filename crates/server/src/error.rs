use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::services::validation::{RequestError, ValidationError};
use thiserror::Error;
use utils::response::ApiResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Request(RequestError::MalformedRequest(_)) => StatusCode::BAD_REQUEST,
            ApiError::Request(RequestError::Validation(_)) | ApiError::Validation(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        tracing::debug!(status = status.as_u16(), error = %message, "Request rejected");

        (status, Json(ApiResponse::<()>::error(&message))).into_response()
    }
}
