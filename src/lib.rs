//! Ethereum Calldata Message Scanner
//!
//! Scans a window of recent blocks for human-readable text embedded in
//! transaction call data, skipping known ABI calls.

pub mod cli;
pub mod config;
pub mod detection;
pub mod errors;
pub mod output;
pub mod processor;
pub mod rpc;
pub mod types;
