//! babel-client: HTTP client for the Babel library server

pub mod client;
pub mod error;

pub use client::BabelClient;
pub use error::ClientError;
