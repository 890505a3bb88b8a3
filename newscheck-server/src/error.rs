//! API error handling module
//!
//! Every failure reaches the client as the same generic message plus a
//! stable `code`; the detailed cause only goes to the logs.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use newscheck_core::{EngineError, StoreError};
use thiserror::Error;

/// Message returned to clients for every failed verification.
pub const CLIENT_ERROR_MESSAGE: &str = "Failed to verify content";

/// API error type with structured variants for different error categories
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad request - client provided invalid input
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Payload too large - content exceeds the configured limit
    #[error("Payload too large: {size} bytes exceeds maximum of {max} bytes")]
    PayloadTooLarge { size: usize, max: usize },

    /// Request body rejected by the transport limit before it was read
    #[error("Request body exceeds the limit of {max} bytes")]
    BodyTooLarge { max: usize },

    /// Request timeout - operation took too long
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Internal server error - unexpected server-side failure
    #[error("Internal error: {0}")]
    Internal(String),

    /// Engine error - failure reported by the verification engine
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),
}

impl ApiError {
    /// Create a bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Create an internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Create a timeout error
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge { .. } | Self::BodyTooLarge { .. } => {
                StatusCode::PAYLOAD_TOO_LARGE
            }
            Self::Timeout(_) => StatusCode::REQUEST_TIMEOUT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Engine(e) => match e {
                EngineError::MalformedSubmission(_) => StatusCode::BAD_REQUEST,
                EngineError::StoreUnavailable(StoreError::Unavailable(_)) => {
                    StatusCode::SERVICE_UNAVAILABLE
                }
                EngineError::StoreUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// Get the error code for programmatic error handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "INVALID_INPUT",
            Self::PayloadTooLarge { .. } | Self::BodyTooLarge { .. } => "CONTENT_TOO_LARGE",
            Self::Timeout(_) => "TIMEOUT",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Engine(e) => match e {
                EngineError::MalformedSubmission(_) => "MALFORMED_SUBMISSION",
                EngineError::StoreUnavailable(StoreError::Unavailable(_)) => "STORE_UNAVAILABLE",
                EngineError::StoreUnavailable(StoreError::Query(_)) => "STORE_ERROR",
                EngineError::StoreUnavailable(StoreError::Integrity(_)) => "STORE_INTEGRITY",
            },
        }
    }

    /// Get the error category for logging
    fn error_category(&self) -> &'static str {
        match self {
            Self::BadRequest(_) | Self::PayloadTooLarge { .. } | Self::BodyTooLarge { .. } => {
                "bad_request"
            }
            Self::Timeout(_) => "timeout",
            Self::Internal(_) => "internal",
            Self::Engine(EngineError::MalformedSubmission(_)) => "bad_request",
            Self::Engine(EngineError::StoreUnavailable(_)) => "store",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let category = self.error_category();
        let code = self.error_code();
        let internal_message = self.to_string();

        if status.is_client_error() {
            tracing::warn!(
                status = %status,
                category = category,
                code = code,
                error = %internal_message,
                "Client error"
            );
        } else {
            tracing::error!(
                status = %status,
                category = category,
                code = code,
                error = %internal_message,
                "Server error"
            );
        }

        let body = serde_json::json!({
            "error": CLIENT_ERROR_MESSAGE,
            "code": code,
        });

        (status, Json(body)).into_response()
    }
}
