//! Content addressing: text -> address
//!
//! This is a one-way SHA-256 of the text. It names the book a client would
//! request for that text; it does not claim the text appears in that book.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::{Address, Error, Result};

/// Search request body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Missing text deserializes as empty and is rejected as [`Error::EmptyQuery`]
    #[serde(default)]
    pub text: String,
}

/// Search response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub address_hash: Address,
    pub query_text: String,
}

/// SHA-256 of the UTF-8 bytes of `text`
pub fn content_address(text: &str) -> Result<Address> {
    if text.is_empty() {
        return Err(Error::EmptyQuery);
    }
    let digest: [u8; 32] = Sha256::digest(text.as_bytes()).into();
    Ok(Address::from_bytes(digest))
}

impl SearchResponse {
    pub fn for_text(text: String) -> Result<Self> {
        let address_hash = content_address(&text)?;
        Ok(Self {
            address_hash,
            query_text: text,
        })
    }
}
