//! babel-core: Address space and deterministic content generation for the Babel library
//!
//! Every book in the library is named by a 256-bit address and its text is a
//! pure function of that address:
//!
//! ```text
//! address (64 hex) -> seed -> SymbolStream (AES-256 CTR) -> pages -> lines
//! ```
//!
//! # Contract
//!
//! The mapping from address to text is part of the public interface. Changing
//! the alphabet, the geometry or the stream construction changes every book
//! that has ever been "discovered", so all three are fixed at compile time:
//!
//! | Piece | Value |
//! |-------|-------|
//! | Alphabet | 25 symbols, see [`ALPHABET`] |
//! | Geometry | 80 chars/line, 40 lines/page, 410 pages/book |
//! | Stream | v1, see [`stream`] |
//!
//! # Search
//!
//! [`content_address`] is a one-way hash from text to an address. It does not
//! look for the text inside the generated space.

mod address;
mod alphabet;
mod error;
mod generator;
mod search;
mod seed;
pub mod stream;

pub use address::{Address, ADDRESS_HEX_LEN};
pub use alphabet::{symbol, ALPHABET, ALPHABET_SIZE};
pub use error::Error;
pub use generator::{generate_book, generate_page, Book, Page, PageNumber};
pub use search::{content_address, SearchRequest, SearchResponse};
pub use seed::{derive_seed, Seed};
pub use stream::{SymbolStream, STREAM_VERSION};

pub type Result<T> = std::result::Result<T, Error>;

/// Fixed book geometry
pub mod constants {
    /// Symbols per line
    pub const CHARS_PER_LINE: usize = 80;

    /// Lines per page
    pub const LINES_PER_PAGE: usize = 40;

    /// Pages per book
    pub const PAGES_PER_BOOK: usize = 410;

    /// Symbols on a single page (3,200)
    pub const CHARS_PER_PAGE: usize = CHARS_PER_LINE * LINES_PER_PAGE;

    /// Symbols in a full book (1,312,000)
    pub const CHARS_PER_BOOK: usize = CHARS_PER_PAGE * PAGES_PER_BOOK;
}
