//! Server configuration (CLI flags with environment fallbacks)

use std::net::SocketAddr;

use axum::http::HeaderValue;
use clap::Parser;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::error::{Result, ServerError};

#[derive(Parser, Debug, Clone)]
#[command(name = "babel-server")]
#[command(about = "Serve books from the Babel library over HTTP")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "BABEL_LISTEN_ADDR", default_value = "0.0.0.0:8000")]
    pub listen: SocketAddr,

    /// Comma-separated CORS origins, or `*` for any origin
    #[arg(
        long,
        env = "BABEL_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub allowed_origins: Vec<String>,

    /// Full-book requests generated at the same time
    #[arg(long, env = "BABEL_MAX_CONCURRENT_BOOKS", default_value_t = 4)]
    pub max_concurrent_books: usize,

    /// Expose Prometheus metrics on /metrics
    #[arg(long, env = "BABEL_METRICS")]
    pub metrics: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([127, 0, 0, 1], 0)),
            allowed_origins: vec!["*".to_string()],
            max_concurrent_books: 4,
            metrics: false,
        }
    }
}

impl ServerConfig {
    /// Check values clap cannot check on its own
    pub fn validate(&self) -> Result<()> {
        if self.max_concurrent_books == 0 {
            return Err(ServerError::InvalidConfig(
                "max_concurrent_books must be at least 1".to_string(),
            ));
        }
        self.cors_layer().map(|_| ())
    }

    /// Build the CORS layer for the configured origins.
    ///
    /// Credentials are never allowed; tower-http rejects them together with a
    /// wildcard origin.
    pub fn cors_layer(&self) -> Result<CorsLayer> {
        let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

        if self.allowed_origins.iter().any(|o| o.trim() == "*") {
            return Ok(cors.allow_origin(Any));
        }

        let origins = self
            .allowed_origins
            .iter()
            .map(|o| o.trim())
            .filter(|o| !o.is_empty())
            .map(|o| {
                HeaderValue::from_str(o)
                    .map_err(|_| ServerError::InvalidConfig(format!("invalid CORS origin {o:?}")))
            })
            .collect::<Result<Vec<_>>>()?;

        if origins.is_empty() {
            return Err(ServerError::InvalidConfig(
                "allowed_origins is empty".to_string(),
            ));
        }

        Ok(cors.allow_origin(AllowOrigin::list(origins)))
    }
}
