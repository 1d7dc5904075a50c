//! Babel library HTTP client

use babel_core::{Address, Book, Page, PageNumber, SearchRequest, SearchResponse};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{ClientError, Result};

/// Error body returned by the server
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
    code: String,
}

/// Client for the three library operations
pub struct BabelClient {
    http: Client,
    server_url: String,
}

impl BabelClient {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), server_url)
    }

    /// Reuse an existing reqwest client (connection pool, timeouts)
    pub fn with_client(http: Client, server_url: impl Into<String>) -> Self {
        Self {
            http,
            server_url: server_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Check the server is up
    pub async fn health(&self) -> Result<()> {
        let url = format!("{}/health", self.server_url);
        let resp = self.http.get(&url).send().await?;
        check_status(resp).await?;
        Ok(())
    }

    /// Fetch all pages of a book
    pub async fn fetch_book(&self, address: &Address) -> Result<Book> {
        let url = format!("{}/book/{}", self.server_url, address);
        tracing::debug!(address = %address, "Fetching book");

        let resp = self.http.get(&url).send().await?;
        let book: Book = decode(resp).await?;

        tracing::debug!(address = %address, pages = book.content.len(), "Fetched book");
        Ok(book)
    }

    /// Fetch a single page
    pub async fn fetch_page(&self, address: &Address, page: PageNumber) -> Result<Page> {
        let url = format!("{}/page/{}/{}", self.server_url, address, page.get());
        tracing::debug!(address = %address, page = page.get(), "Fetching page");

        let resp = self.http.get(&url).send().await?;
        decode(resp).await
    }

    /// Ask the server for the content address of `text`
    pub async fn search(&self, text: &str) -> Result<SearchResponse> {
        let url = format!("{}/search", self.server_url);
        let resp = self
            .http
            .post(&url)
            .json(&SearchRequest {
                text: text.to_string(),
            })
            .send()
            .await?;
        decode(resp).await
    }
}

async fn check_status(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let text = resp.text().await.unwrap_or_default();
    let (code, message) = match serde_json::from_str::<ErrorBody>(&text) {
        Ok(body) => (Some(body.code), body.error),
        Err(_) => (None, text),
    };

    Err(ClientError::Server {
        status: status.as_u16(),
        code,
        message,
    })
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T> {
    let resp = check_status(resp).await?;
    let bytes = resp.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
