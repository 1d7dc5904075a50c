//! Book and page generation

use serde::{Deserialize, Serialize};

use crate::constants::{CHARS_PER_LINE, CHARS_PER_PAGE, LINES_PER_PAGE, PAGES_PER_BOOK};
use crate::{Address, Error, Result, Seed, SymbolStream};

/// A validated 1-based page number in `[1, PAGES_PER_BOOK]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(usize);

impl PageNumber {
    pub const FIRST: PageNumber = PageNumber(1);
    pub const LAST: PageNumber = PageNumber(PAGES_PER_BOOK);

    pub fn new(page: i64) -> Result<Self> {
        if page < 1 || page > PAGES_PER_BOOK as i64 {
            return Err(Error::PageOutOfRange {
                page,
                max: PAGES_PER_BOOK,
            });
        }
        Ok(Self(page as usize))
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Stream indices that precede this page
    fn stream_offset(self) -> u64 {
        ((self.0 - 1) * CHARS_PER_PAGE) as u64
    }
}

/// One page of a book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub page_number: usize,
    pub lines: Vec<String>,
}

/// A whole book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub address_hash: Address,
    pub content: Vec<Page>,
}

impl Book {
    /// Look up a page; `None` only for a truncated book from elsewhere
    pub fn page(&self, page: PageNumber) -> Option<&Page> {
        self.content.get(page.get() - 1)
    }
}

/// Generate every page of the book at `address`.
///
/// Draws `CHARS_PER_BOOK` symbols from a fresh stream and cuts them into
/// pages and lines in draw order.
pub fn generate_book(address: &Address) -> Book {
    let mut stream = SymbolStream::new(&Seed::from(address));
    let content = (1..=PAGES_PER_BOOK)
        .map(|page_number| draw_page(&mut stream, page_number))
        .collect();

    Book {
        address_hash: *address,
        content,
    }
}

/// Generate a single page without producing the rest of the book.
///
/// The stream is advanced past the preceding pages before drawing, so the
/// result equals `generate_book(address).page(page)`.
pub fn generate_page(address: &Address, page: PageNumber) -> Page {
    let mut stream = SymbolStream::new(&Seed::from(address));
    stream.advance(page.stream_offset());
    draw_page(&mut stream, page.get())
}

fn draw_page(stream: &mut SymbolStream, page_number: usize) -> Page {
    let lines = (0..LINES_PER_PAGE)
        .map(|_| {
            let mut line = String::with_capacity(CHARS_PER_LINE);
            stream.push_symbols(&mut line, CHARS_PER_LINE);
            line
        })
        .collect();

    Page { page_number, lines }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ALPHABET;

    fn zero_address() -> Address {
        Address::parse(&"0".repeat(64)).unwrap()
    }

    fn some_address() -> Address {
        Address::parse("b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9").unwrap()
    }

    #[test]
    fn test_page_number_bounds() {
        assert!(PageNumber::new(1).is_ok());
        assert!(PageNumber::new(410).is_ok());
        assert_eq!(
            PageNumber::new(0),
            Err(Error::PageOutOfRange { page: 0, max: 410 })
        );
        assert!(PageNumber::new(-3).is_err());
        assert!(PageNumber::new(411).is_err());
        assert_eq!(PageNumber::LAST.get(), PAGES_PER_BOOK);
    }

    #[test]
    fn test_page_geometry_and_alphabet() {
        let page = generate_page(&some_address(), PageNumber::new(17).unwrap());
        assert_eq!(page.page_number, 17);
        assert_eq!(page.lines.len(), LINES_PER_PAGE);
        for line in &page.lines {
            assert_eq!(line.chars().count(), CHARS_PER_LINE);
            assert!(line.chars().all(|c| ALPHABET.contains(&c)));
        }
    }

    #[test]
    fn test_zero_address_first_page() {
        let page = generate_page(&zero_address(), PageNumber::FIRST);
        assert!(page.lines[0].starts_with("nizcpfhaoh.atyhf"));

        let again = generate_page(&zero_address(), PageNumber::FIRST);
        assert_eq!(page, again);
    }

    #[test]
    fn test_second_page_starts_after_first() {
        let page = generate_page(&zero_address(), PageNumber::new(2).unwrap());
        assert!(page.lines[0].starts_with("rd nupm cf"));
    }

    #[test]
    fn test_book_shape() {
        let book = generate_book(&some_address());
        assert_eq!(book.address_hash, some_address());
        assert_eq!(book.content.len(), PAGES_PER_BOOK);
        for (i, page) in book.content.iter().enumerate() {
            assert_eq!(page.page_number, i + 1);
            assert_eq!(page.lines.len(), LINES_PER_PAGE);
        }
    }

    #[test]
    fn test_book_matches_pages_at_edges() {
        let address = some_address();
        let book = generate_book(&address);
        for n in [1, 2, 205, 409, 410] {
            let page = PageNumber::new(n).unwrap();
            assert_eq!(book.page(page), Some(&generate_page(&address, page)), "page {n}");
        }
    }

    #[test]
    fn test_page_serializes_with_wire_field_names() {
        let page = Page {
            page_number: 3,
            lines: vec!["ab".to_string()],
        };
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["page_number"], 3);
        assert_eq!(json["lines"][0], "ab");
    }
}
