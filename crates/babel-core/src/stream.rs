//! Deterministic symbol stream (stream v1)
//!
//! Expands a [`Seed`] into an unbounded sequence of alphabet indices using
//! AES-256 in counter mode:
//!
//! ```text
//! key     = SHA-256(seed magnitude, big-endian, no leading zeros)
//! block_i = le_u64(i) || 0^8                       (16 bytes)
//! index_i = le_u64(AES-256_key(block_i)[0..8]) mod 25
//! ```
//!
//! The construction is part of the address contract: any change to it
//! rewrites every book, so it is versioned by [`STREAM_VERSION`].
//!
//! Because index `i` depends only on `(key, i)`, advancing is O(1) and
//! yields exactly what drawing and discarding the same number of indices
//! would. Each caller owns its stream; there is no shared generator.

use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes256, Block};
use sha2::{Digest, Sha256};

use crate::alphabet::{symbol, ALPHABET_SIZE};
use crate::Seed;

/// Version of the seed-to-index construction
pub const STREAM_VERSION: u16 = 1;

/// Counter blocks encrypted per cipher call when filling buffers
const BATCH_BLOCKS: usize = 64;

/// Seeded, position-addressable stream of alphabet indices
pub struct SymbolStream {
    cipher: Aes256,
    position: u64,
}

impl SymbolStream {
    /// Create a fresh stream positioned at index 0
    pub fn new(seed: &Seed) -> Self {
        let key = Sha256::digest(seed.magnitude());
        let cipher = Aes256::new(GenericArray::from_slice(key.as_slice()));
        Self {
            cipher,
            position: 0,
        }
    }

    /// Number of indices drawn or advanced past so far
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Advance past `count` indices without producing them.
    ///
    /// Equivalent to calling [`next_index`](Self::next_index) `count` times.
    pub fn advance(&mut self, count: u64) {
        self.position = self.position.wrapping_add(count);
    }

    /// Index at an absolute position, without moving the stream
    pub fn index_at(&self, position: u64) -> u8 {
        let mut block = counter_block(position);
        self.cipher.encrypt_block(&mut block);
        reduce(&block)
    }

    /// Draw the next index in `[0, 25)`
    pub fn next_index(&mut self) -> u8 {
        let index = self.index_at(self.position);
        self.position = self.position.wrapping_add(1);
        index
    }

    /// Draw the next symbol
    pub fn next_symbol(&mut self) -> char {
        symbol(self.next_index())
    }

    /// Fill `out` with the next `out.len()` indices.
    ///
    /// Batches counter blocks through the cipher; order and values are the
    /// same as repeated `next_index` calls.
    pub fn fill_indices(&mut self, out: &mut [u8]) {
        let mut blocks = [Block::default(); BATCH_BLOCKS];

        for chunk in out.chunks_mut(BATCH_BLOCKS) {
            let blocks = &mut blocks[..chunk.len()];
            for (offset, block) in blocks.iter_mut().enumerate() {
                *block = counter_block(self.position.wrapping_add(offset as u64));
            }
            self.cipher.encrypt_blocks(blocks);

            for (slot, block) in chunk.iter_mut().zip(blocks.iter()) {
                *slot = reduce(block);
            }
            self.position = self.position.wrapping_add(chunk.len() as u64);
        }
    }

    /// Append the next `count` symbols to `out`
    pub fn push_symbols(&mut self, out: &mut String, count: usize) {
        let mut indices = vec![0u8; count];
        self.fill_indices(&mut indices);
        out.extend(indices.into_iter().map(symbol));
    }
}

impl Iterator for SymbolStream {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        Some(self.next_symbol())
    }
}

#[inline]
fn counter_block(position: u64) -> Block {
    let mut block = Block::default();
    block[..8].copy_from_slice(&position.to_le_bytes());
    block
}

#[inline]
fn reduce(block: &Block) -> u8 {
    let mut word = [0u8; 8];
    word.copy_from_slice(&block[..8]);
    (u64::from_le_bytes(word) % ALPHABET_SIZE as u64) as u8
}
