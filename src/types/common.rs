//! Common types shared across the scanning pipeline
//!
//! A `TransactionPayload` is the read-only input to detection. `TransactionFindings`
//! and `BlockReport` carry accepted messages out to the report sinks.

use serde::{Deserialize, Serialize};

/// One transaction as seen by the detection pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionPayload {
    /// Transaction hash (0x-prefixed hex)
    pub hash: String,
    /// Destination address; `None` for contract creation
    pub to: Option<String>,
    /// Raw call data bytes
    #[serde(with = "hex_bytes")]
    pub data: Vec<u8>,
}

impl TransactionPayload {
    pub fn new(hash: impl Into<String>, to: Option<String>, data: Vec<u8>) -> Self {
        Self {
            hash: hash.into(),
            to,
            data,
        }
    }

    /// True when the transaction carries no call data at all
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// A fetched block reduced to what the scanner needs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerBlock {
    pub number: u64,
    pub transactions: Vec<TransactionPayload>,
}

/// Accepted messages found in a single transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionFindings {
    pub hash: String,
    pub to: Option<String>,
    pub messages: Vec<String>,
}

/// All transactions of one block that yielded at least one accepted message
///
/// Only materialised when `transactions` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockReport {
    pub block_number: u64,
    pub transactions: Vec<TransactionFindings>,
}

impl BlockReport {
    /// Total accepted messages across the block
    pub fn message_count(&self) -> usize {
        self.transactions.iter().map(|t| t.messages.len()).sum()
    }
}

/// Outcome counters for a completed scan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    pub blocks_scanned: u64,
    pub blocks_with_messages: u64,
    pub transactions_analysed: u64,
    pub messages_found: u64,
    /// Block numbers whose fetch failed, in scan order
    pub failed_blocks: Vec<u64>,
}

mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("0x{}", hex::encode(bytes)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        hex::decode(s.trim_start_matches("0x")).map_err(serde::de::Error::custom)
    }
}
