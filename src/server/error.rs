//! Request-level error mapping

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::features::EncodeError;

/// Failures that can end a prediction request
///
/// Every variant is isolated to its own request; none of them touch
/// server state.
#[derive(Debug)]
pub enum ApiError {
    /// The body failed schema validation (malformed JSON, missing or
    /// mistyped fields)
    InvalidPayload(JsonRejection),
    /// A categorical field held a value outside its code table
    UnknownCategory(EncodeError),
    /// The model failed to produce a usable scalar
    Inference(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidPayload(rejection)
    }
}

impl From<EncodeError> for ApiError {
    fn from(err: EncodeError) -> Self {
        ApiError::UnknownCategory(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind, message) = match self {
            // Keep the extractor's status; its body text carries the
            // field-level serde detail.
            ApiError::InvalidPayload(rejection) => {
                (rejection.status(), "invalid_request_error", rejection.body_text())
            }
            ApiError::UnknownCategory(err) => {
                (StatusCode::BAD_REQUEST, "invalid_request_error", err.to_string())
            }
            ApiError::Inference(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "server_error", message)
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: ErrorDetail {
                    message,
                    r#type: kind.to_string(),
                },
            }),
        )
            .into_response()
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub message: String,
    pub r#type: String,
}
