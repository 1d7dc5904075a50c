//! Server error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured error response for API clients
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

#[derive(Error, Debug)]
pub enum ServerError {
    #[error(transparent)]
    Core(#[from] babel_core::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServerError {
    /// Get the error code for structured responses
    pub fn code(&self) -> &'static str {
        match self {
            ServerError::Core(babel_core::Error::InvalidAddress(_)) => "INVALID_ADDRESS",
            ServerError::Core(babel_core::Error::PageOutOfRange { .. }) => "PAGE_OUT_OF_RANGE",
            ServerError::Core(babel_core::Error::EmptyQuery) => "EMPTY_QUERY",
            ServerError::InvalidRequest(_) => "INVALID_REQUEST",
            ServerError::InvalidConfig(_) => "INVALID_CONFIG",
            ServerError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::Core(_) => StatusCode::BAD_REQUEST,
            ServerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::InvalidConfig(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        if status.is_server_error() {
            tracing::error!(error = %self, code, "Request failed");
        } else {
            tracing::debug!(error = %self, code, "Rejected request");
        }
        crate::metrics::record_error(code);

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_are_client_errors() {
        let cases = [
            (babel_core::Error::InvalidAddress("x".into()), "INVALID_ADDRESS"),
            (
                babel_core::Error::PageOutOfRange { page: 0, max: 410 },
                "PAGE_OUT_OF_RANGE",
            ),
            (babel_core::Error::EmptyQuery, "EMPTY_QUERY"),
        ];
        for (core, code) in cases {
            let err = ServerError::from(core);
            assert_eq!(err.code(), code);
            assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_message_is_core_reason() {
        let err = ServerError::from(babel_core::Error::PageOutOfRange { page: 411, max: 410 });
        assert_eq!(
            err.to_string(),
            "Page number 411 out of range: must be between 1 and 410"
        );
    }

    #[test]
    fn test_internal_is_server_error() {
        let err = ServerError::Internal("join failed".into());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
