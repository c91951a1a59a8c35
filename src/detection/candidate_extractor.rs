//! Candidate message extraction
//!
//! Finds maximal runs of letters, digits and whitespace of at least
//! `min_msg_length` characters. A regex over a single character class is
//! greedy, so every run is reported once at its full length and runs never
//! overlap.

use regex::Regex;
use std::ops::Range;

#[derive(Debug, Clone)]
pub struct CandidateExtractor {
    pattern: Regex,
    min_length: usize,
}

impl CandidateExtractor {
    pub fn new(min_length: usize) -> Result<Self, regex::Error> {
        let pattern = Regex::new(&format!(r"[\p{{L}}\p{{N}}\s]{{{},}}", min_length.max(1)))?;
        Ok(Self {
            pattern,
            min_length,
        })
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Candidate substrings in order of appearance
    pub fn extract<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.pattern.find_iter(text).map(|m| m.as_str()).collect()
    }

    /// Byte spans of each candidate within `text`
    pub fn spans(&self, text: &str) -> Vec<Range<usize>> {
        self.pattern.find_iter(text).map(|m| m.range()).collect()
    }
}
