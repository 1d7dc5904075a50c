//! Prometheus metrics
//!
//! Recording goes through the `metrics` facade and is a no-op until
//! [`init_prometheus_recorder`] installs the exporter.

use std::time::Duration;

use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};

use crate::error::{Result, ServerError};

pub const REQUESTS_TOTAL: &str = "babel_requests_total";
pub const REQUEST_ERRORS_TOTAL: &str = "babel_request_errors_total";
pub const GENERATION_SECONDS: &str = "babel_generation_seconds";

/// Single pages land in the low milliseconds, full books in the tens to hundreds
const GENERATION_BUCKETS: &[f64] = &[0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5];

/// Install the global Prometheus recorder. Call once per process.
pub fn init_prometheus_recorder() -> Result<PrometheusHandle> {
    PrometheusBuilder::new()
        .set_buckets_for_metric(Matcher::Full(GENERATION_SECONDS.to_string()), GENERATION_BUCKETS)
        .map_err(|e| ServerError::InvalidConfig(e.to_string()))?
        .install_recorder()
        .map_err(|e| ServerError::InvalidConfig(e.to_string()))
}

pub fn record_request(op: &'static str) {
    metrics::counter!(REQUESTS_TOTAL, "op" => op).increment(1);
}

pub fn record_error(code: &'static str) {
    metrics::counter!(REQUEST_ERRORS_TOTAL, "code" => code).increment(1);
}

pub fn record_generation(op: &'static str, elapsed: Duration) {
    metrics::histogram!(GENERATION_SECONDS, "op" => op).record(elapsed.as_secs_f64());
}
