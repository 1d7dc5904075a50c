//! babel-server: HTTP interface to the Babel library
//!
//! Thin boundary over `babel-core`: validates addresses and page numbers,
//! runs generation on the blocking pool, and maps failures to structured
//! JSON errors.

pub mod config;
pub mod error;
pub mod metrics;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use error::{ErrorResponse, ServerError};
pub use metrics::init_prometheus_recorder;
pub use routes::{create_router, HealthResponse, InfoResponse};
pub use state::{create_shared_state, ServerState, SharedState};
