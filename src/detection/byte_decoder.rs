//! Byte → text decoding
//!
//! Two strategies turn raw call data into a cleaned, printable string:
//!
//! - **Codepoint**: decode UTF-8, skipping invalid bytes one sequence at a time,
//!   keeping only printable codepoints (see [`super::char_class`]).
//! - **ByteRange**: keep bytes in the printable ASCII range `[32,126]`, replace
//!   every other byte with a space.
//!
//! Both collapse whitespace runs to a single space and trim the ends. Decoding
//! never fails; pure binary noise degrades to an empty or sparse string, and
//! re-decoding the output yields the same string.

use super::char_class::strip_non_printable;
use crate::types::DecodeStrategy;

/// Decodes payload bytes with a fixed strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct ByteDecoder {
    strategy: DecodeStrategy,
}

impl ByteDecoder {
    pub fn new(strategy: DecodeStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> DecodeStrategy {
        self.strategy
    }

    pub fn decode(&self, data: &[u8]) -> String {
        match self.strategy {
            DecodeStrategy::Codepoint => decode_codepoints(data),
            DecodeStrategy::ByteRange => decode_byte_range(data),
        }
    }
}

/// UTF-8 decoding with best-effort recovery
pub fn decode_codepoints(data: &[u8]) -> String {
    let mut valid = String::with_capacity(data.len());
    // Invalid sequences are dropped; decoding resumes at the next byte
    for chunk in data.utf8_chunks() {
        valid.push_str(chunk.valid());
    }
    collapse_whitespace(&strip_non_printable(&valid))
}

/// Printable ASCII filter
pub fn decode_byte_range(data: &[u8]) -> String {
    let kept: String = data
        .iter()
        .map(|&b| if (32..=126).contains(&b) { b as char } else { ' ' })
        .collect();
    collapse_whitespace(&kept)
}

/// Join whitespace-separated fields with single spaces
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
