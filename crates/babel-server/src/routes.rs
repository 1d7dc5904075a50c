//! HTTP routes

use std::num::IntErrorKind;
use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use babel_core::constants::{CHARS_PER_LINE, LINES_PER_PAGE, PAGES_PER_BOOK};
use babel_core::{
    generate_book, generate_page, Address, Book, Page, PageNumber, SearchRequest, SearchResponse,
    ALPHABET, STREAM_VERSION,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::{Result, ServerError};
use crate::metrics::{record_generation, record_request};
use crate::state::SharedState;

/// Landing response describing the library
#[derive(Debug, Serialize, Deserialize)]
pub struct InfoResponse {
    pub message: String,
    pub alphabet: String,
    pub chars_per_line: usize,
    pub lines_per_page: usize,
    pub pages_per_book: usize,
    pub stream_version: u16,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Create the public router with CORS and tracing.
///
/// Full-book concurrency is bounded by the permits in `state`.
pub fn create_router(config: &ServerConfig, state: SharedState) -> Result<Router> {
    config.validate()?;

    let mut router = Router::new()
        .route("/", get(info_handler))
        .route("/health", get(health_handler))
        .route("/book/:address", get(book_handler))
        .route("/page/:address/:page", get(page_handler))
        .route("/search", post(search_handler));

    if state.metrics.is_some() {
        router = router.route("/metrics", get(metrics_handler));
    }

    Ok(router
        .with_state(state)
        .layer(config.cors_layer()?)
        .layer(TraceLayer::new_for_http()))
}

async fn info_handler() -> Json<InfoResponse> {
    Json(InfoResponse {
        message: "Welcome to the Babel library. Books are named by 64-character hex addresses."
            .to_string(),
        alphabet: ALPHABET.iter().collect(),
        chars_per_line: CHARS_PER_LINE,
        lines_per_page: LINES_PER_PAGE,
        pages_per_book: PAGES_PER_BOOK,
        stream_version: STREAM_VERSION,
    })
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

async fn book_handler(
    State(state): State<SharedState>,
    Path(address): Path<String>,
) -> Result<Json<Book>> {
    record_request("book");
    let address = Address::parse(&address)?;

    let permit = state
        .book_permits
        .clone()
        .acquire_owned()
        .await
        .map_err(|e| ServerError::Internal(format!("book permits closed: {e}")))?;

    let start = Instant::now();
    let book = tokio::task::spawn_blocking(move || {
        // Released when generation ends, not when the request is dropped
        let _permit = permit;
        generate_book(&address)
    })
    .await
    .map_err(|e| ServerError::Internal(format!("book generation task failed: {e}")))?;
    let elapsed = start.elapsed();
    record_generation("book", elapsed);

    tracing::info!(
        address = %address,
        elapsed_ms = elapsed.as_secs_f64() * 1000.0,
        "Generated book"
    );

    Ok(Json(book))
}

async fn page_handler(Path((address, page)): Path<(String, String)>) -> Result<Json<Page>> {
    record_request("page");
    let address = Address::parse(&address)?;
    let page = PageNumber::new(parse_page_segment(&page)?)?;

    let start = Instant::now();
    let content = tokio::task::spawn_blocking(move || generate_page(&address, page))
        .await
        .map_err(|e| ServerError::Internal(format!("page generation task failed: {e}")))?;
    record_generation("page", start.elapsed());

    tracing::debug!(address = %address, page = page.get(), "Generated page");

    Ok(Json(content))
}

/// Parse a page path segment.
///
/// Integers beyond `i64` saturate so they still fail as out of range rather
/// than as malformed input.
fn parse_page_segment(segment: &str) -> Result<i64> {
    segment.parse::<i64>().or_else(|e| match e.kind() {
        IntErrorKind::PosOverflow => Ok(i64::MAX),
        IntErrorKind::NegOverflow => Ok(i64::MIN),
        _ => Err(ServerError::InvalidRequest(format!(
            "page number {segment:?} is not an integer"
        ))),
    })
}

async fn search_handler(
    payload: std::result::Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>> {
    record_request("search");
    let Json(request) = payload.map_err(|e| ServerError::InvalidRequest(e.body_text()))?;

    let response = SearchResponse::for_text(request.text)?;
    tracing::debug!(address = %response.address_hash, "Computed content address");

    Ok(Json(response))
}

async fn metrics_handler(State(state): State<SharedState>) -> impl IntoResponse {
    let body = state
        .metrics
        .as_ref()
        .map(|handle| handle.render())
        .unwrap_or_default();
    ([(CONTENT_TYPE, "text/plain; version=0.0.4")], body)
}
