//! Calldata Message Scanner - Type System
//!
//! - `common`: Ledger-facing data (TransactionPayload, LedgerBlock) and per-block reports
//! - `options`: Strategy/direction enums shared by config, CLI and detection
//! - `signatures`: Known contract-call selector table

mod common;
mod options;
pub mod signatures;

pub use common::*;
pub use options::*;
pub use signatures::SignatureTable;
