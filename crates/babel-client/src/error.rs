//! Client error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {status} - {message}")]
    Server {
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("Core error: {0}")]
    Core(#[from] babel_core::Error),
}

impl ClientError {
    /// Machine-readable code from the server's error body, if any
    pub fn server_code(&self) -> Option<&str> {
        match self {
            ClientError::Server { code, .. } => code.as_deref(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
