use std::any::Any;

use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::ErrorKind;
use crate::application::services::{AnalysisError, INTERNAL_ERROR_MESSAGE};

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

pub fn status_for(error: &AnalysisError) -> StatusCode {
    match error {
        AnalysisError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        e if e.kind() == ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_REQUEST,
    }
}

/// User-correctable errors are logged at `warn`, everything else at `error`.
/// Only `public_message` reaches the body.
pub fn analysis_error_response(error: &AnalysisError) -> Response {
    match error.kind() {
        ErrorKind::UserCorrectable => {
            tracing::warn!(error = ?error, "Request rejected");
        }
        ErrorKind::Internal => {
            tracing::error!(error = ?error, "Request failed");
        }
    }

    error_response(status_for(error), error.public_message())
}

pub fn multipart_error_response(error: MultipartError) -> Response {
    let status = error.status();
    tracing::warn!(error = %error.body_text(), status = %status, "Failed to read multipart upload");

    let message = if status == StatusCode::PAYLOAD_TOO_LARGE {
        "File is too large".to_string()
    } else {
        "Failed to read the uploaded file".to_string()
    };

    error_response(status, message)
}

pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = detail, "Handler panicked");

    error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
}
