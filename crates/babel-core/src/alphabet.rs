//! The 25-symbol alphabet books are written in

/// Ordered alphabet; stream index `i` maps to `ALPHABET[i]`
pub const ALPHABET: [char; ALPHABET_SIZE] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'l', 'm', 'n', 'o', 'p', 'r', 's', 't', 'u',
    'x', 'y', 'z', ',', '.', '\'', ' ',
];

/// Number of symbols
pub const ALPHABET_SIZE: usize = 25;

/// Map a stream index to its symbol.
///
/// Indices come from [`crate::SymbolStream`] and are always `< ALPHABET_SIZE`;
/// anything larger wraps so the lookup cannot panic.
#[inline]
pub fn symbol(index: u8) -> char {
    ALPHABET[index as usize % ALPHABET_SIZE]
}
