//! Shared server state
//!
//! Holds no generator; each request builds its own stream.

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use tokio::sync::Semaphore;

use crate::config::ServerConfig;

pub struct ServerState {
    /// Present when metrics are enabled
    pub metrics: Option<PrometheusHandle>,
    /// One permit per full-book generation allowed to run at once.
    /// Held until the blocking task finishes, even if the client has gone.
    pub book_permits: Arc<Semaphore>,
}

pub type SharedState = Arc<ServerState>;

pub fn create_shared_state(config: &ServerConfig, metrics: Option<PrometheusHandle>) -> SharedState {
    Arc::new(ServerState {
        metrics,
        book_permits: Arc::new(Semaphore::new(config.max_concurrent_books)),
    })
}
