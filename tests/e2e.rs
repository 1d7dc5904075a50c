//! End-to-end properties of the generator

use babel_core::constants::{CHARS_PER_LINE, CHARS_PER_PAGE, LINES_PER_PAGE, PAGES_PER_BOOK};
use babel_core::{
    content_address, derive_seed, generate_book, generate_page, Address, Error, PageNumber,
    SymbolStream, ALPHABET,
};

fn zero_address() -> Address {
    Address::parse(&"0".repeat(64)).unwrap()
}

fn sample_addresses() -> Vec<Address> {
    vec![
        zero_address(),
        Address::parse(&"f".repeat(64)).unwrap(),
        content_address("hello world").unwrap(),
    ]
}

#[test]
fn test_full_book_is_deterministic() {
    for address in sample_addresses() {
        let first = generate_book(&address);
        let second = generate_book(&address);
        assert_eq!(first, second, "address {address}");
    }
}

#[test]
fn test_every_page_matches_book() {
    let address = content_address("seek consistency").unwrap();
    let book = generate_book(&address);

    for n in 1..=PAGES_PER_BOOK as i64 {
        let page = PageNumber::new(n).unwrap();
        assert_eq!(book.page(page), Some(&generate_page(&address, page)), "page {n}");
    }
}

#[test]
fn test_geometry_and_alphabet_closure() {
    let book = generate_book(&Address::parse(&"7".repeat(64)).unwrap());

    assert_eq!(book.content.len(), PAGES_PER_BOOK);
    for page in &book.content {
        assert_eq!(page.lines.len(), LINES_PER_PAGE);
        for line in &page.lines {
            assert_eq!(line.chars().count(), CHARS_PER_LINE);
            assert!(line.chars().all(|c| ALPHABET.contains(&c)), "{line:?}");
        }
    }
}

#[test]
fn test_zero_address_scenario() {
    let address = zero_address();
    assert!(derive_seed(&address.to_hex()).unwrap().is_zero());

    let page = generate_page(&address, PageNumber::FIRST);
    let expected: String = SymbolStream::new(&derive_seed("0").unwrap())
        .take(CHARS_PER_PAGE)
        .collect();
    assert_eq!(page.lines.concat(), expected);

    let book = generate_book(&address);
    assert_eq!(book.content[0], page);
    assert_eq!(generate_page(&address, PageNumber::FIRST), page);
}

#[test]
fn test_distinct_addresses_give_distinct_first_pages() {
    let a = generate_page(&zero_address(), PageNumber::FIRST);
    let one = Address::parse(&format!("{}1", "0".repeat(63))).unwrap();
    let b = generate_page(&one, PageNumber::FIRST);
    assert_ne!(a.lines, b.lines);
}

#[test]
fn test_search_then_read() {
    let address = content_address("hello world").unwrap();
    assert_eq!(
        address.to_hex(),
        "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
    );

    // The hashed address is a regular book address
    let parsed = Address::parse(&address.to_hex()).unwrap();
    let page = generate_page(&parsed, PageNumber::LAST);
    assert_eq!(page.page_number, PAGES_PER_BOOK);
}

#[test]
fn test_boundary_validation() {
    for bad in ["0".repeat(63), "0".repeat(65), format!("{}x", "0".repeat(63))] {
        assert!(matches!(Address::parse(&bad), Err(Error::InvalidAddress(_))), "{bad}");
    }
    for page in [0, -1, PAGES_PER_BOOK as i64 + 1] {
        assert!(matches!(PageNumber::new(page), Err(Error::PageOutOfRange { .. })));
    }
    assert_eq!(content_address(""), Err(Error::EmptyQuery));
}
