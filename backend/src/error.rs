//! Application error handling
//!
//! This module provides unified error handling for the API,
//! converting engine and validation errors to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bmi_analyzer_shared::errors::EngineError;
use bmi_analyzer_shared::types::{ErrorDetail, ErrorResponse};
use bmi_analyzer_shared::validation::ValidationError;
use thiserror::Error;
use tracing::error;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Validation error: {}", .0.user_message())]
    Field(ValidationError),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidInput(msg) => ApiError::Validation(msg),
            EngineError::UnknownCategory(label) => ApiError::UnknownCategory(label),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Field(err)
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::Validation(errors.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, field) = match &self {
            ApiError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone(), None)
            }
            ApiError::Field(err) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                err.user_message(),
                Some(err.field.clone()),
            ),
            ApiError::UnknownCategory(label) => (
                StatusCode::BAD_REQUEST,
                "UNKNOWN_CATEGORY",
                format!("Unknown category: {}", label),
                Some("status".to_string()),
            ),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone(), None),
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                field,
            },
        });

        (status, body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
