//! # Book Identifiers
//!
//! Short random URL-safe ids for new books.

use rand::Rng;

/// URL-safe alphabet (64 symbols)
const ALPHABET: &[u8; 64] = b"_-0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Default id length
pub const DEFAULT_ID_LENGTH: usize = 16;

/// Source of fresh book ids
pub trait IdGenerator: Send + Sync {
    /// Produce a candidate id. Callers check it against stored ids.
    fn generate(&self) -> String;
}

/// Random ids drawn uniformly from a 64-symbol URL-safe alphabet
#[derive(Debug, Clone)]
pub struct NanoIdGenerator {
    length: usize,
}

impl NanoIdGenerator {
    pub fn new() -> Self {
        Self::with_length(DEFAULT_ID_LENGTH)
    }

    pub fn with_length(length: usize) -> Self {
        Self { length }
    }
}

impl Default for NanoIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for NanoIdGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::thread_rng();
        (0..self.length)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect()
    }
}
