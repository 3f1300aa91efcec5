use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::contact::controller::FAILURE_NOTICE;
use crate::contact::validation::FieldErrors;
use crate::theme::ThemeError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid contact form: {0:?}")]
    InvalidForm(FieldErrors),

    #[error("A submission is already in flight")]
    SubmissionInFlight,

    #[error("Email delivery failed")]
    Delivery,

    #[error("Theme store error: {0}")]
    Theme(#[from] ThemeError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone(), None),
            AppError::InvalidForm(errors) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "Please correct the highlighted fields".to_string(),
                Some(json!(errors)),
            ),
            AppError::SubmissionInFlight => (
                StatusCode::CONFLICT,
                "SUBMISSION_IN_FLIGHT",
                "A message is already being sent".to_string(),
                None,
            ),
            // Provider detail is logged where the send fails, never returned.
            AppError::Delivery => (
                StatusCode::BAD_GATEWAY,
                "DELIVERY_FAILED",
                FAILURE_NOTICE.to_string(),
                None,
            ),
            AppError::Theme(e) => {
                tracing::error!("Theme store error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "THEME_STORE_ERROR",
                    "The theme preference could not be saved".to_string(),
                    None,
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                    None,
                )
            }
        };

        let mut error = json!({
            "code": code,
            "message": message
        });
        if let Some(details) = details {
            error["fields"] = details;
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}
