//! Core error types

use thiserror::Error;

/// Client-input failures. None of these are transient.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Page number {page} out of range: must be between 1 and {max}")]
    PageOutOfRange { page: i64, max: usize },

    #[error("Query text must not be empty")]
    EmptyQuery,
}
