//! Ethereum JSON-RPC integration module
//!
//! This module provides all ledger-related functionality including:
//! - **LedgerSource** - the read-only, possibly-failing block source the scanner consumes
//! - **Client** - `EthRpcClient`, a JSON-RPC over HTTP implementation using `reqwest`
//! - **Types** - wire types for `eth_blockNumber` / `eth_getBlockByNumber` responses
//!
//! There is deliberately no retry layer: a failed call surfaces immediately and the
//! scanner decides whether it is fatal (startup) or skippable (per block).

pub mod client;
pub mod types;

pub use client::EthRpcClient;
pub use types::{parse_quantity, RpcBlock, RpcTransaction};

use crate::errors::LedgerResult;
use crate::types::LedgerBlock;

/// Read-only block source
///
/// Implementations own their connection; the scanner never manages it beyond
/// the initial handshake performed at construction.
#[allow(async_fn_in_trait)]
pub trait LedgerSource {
    /// Current chain head block number
    async fn head_block_number(&self) -> LedgerResult<u64>;

    /// Full block (with transaction payloads) at `number`
    async fn block_by_number(&self, number: u64) -> LedgerResult<LedgerBlock>;
}
