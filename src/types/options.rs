//! Enumerated options shared by configuration, CLI and the detection pipeline

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How raw payload bytes become candidate text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DecodeStrategy {
    /// UTF-8 codepoint decoding, skipping invalid bytes, keeping printable codepoints
    #[default]
    Codepoint,
    /// Keep bytes in the printable ASCII range [32,126], replace others with a space
    ByteRange,
}

impl std::fmt::Display for DecodeStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Codepoint => write!(f, "codepoint"),
            Self::ByteRange => write!(f, "byte-range"),
        }
    }
}

/// Order in which the block range is walked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ScanDirection {
    /// From the chain head down to `head - depth`
    #[default]
    Descending,
    /// From `head - depth` up to the chain head
    Ascending,
}

impl std::fmt::Display for ScanDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Descending => write!(f, "descending"),
            Self::Ascending => write!(f, "ascending"),
        }
    }
}
