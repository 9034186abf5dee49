//! Response types for the invoice engine API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an opaque internal error response.
    pub fn internal() -> Self {
        Self::new("INTERNAL_ERROR", "internal error")
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a response with the given status and body.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::Validation { message } => {
                Self::new(StatusCode::UNPROCESSABLE_ENTITY, ApiError::validation_error(message))
            }
            EngineError::InvalidDate { input, message } => Self::new(
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "INVALID_DATE",
                    format!("Invalid date '{}'", input),
                    message,
                ),
            ),
            // Storage and configuration details stay server-side
            EngineError::Repository { .. } => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, ApiError::internal())
            }
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("CONFIG_ERROR", "Configuration error"),
            ),
        }
    }
}
