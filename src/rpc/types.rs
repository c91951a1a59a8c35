//! JSON-RPC wire types

use crate::errors::LedgerError;
use crate::types::{LedgerBlock, TransactionPayload};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct RpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: Value,
}

impl<'a> RpcRequest<'a> {
    pub fn new(id: u64, method: &'a str, params: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            method,
            params,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
}

/// Block as returned by `eth_getBlockByNumber(n, true)`
#[derive(Debug, Clone, Deserialize)]
pub struct RpcBlock {
    pub number: String,
    #[serde(default)]
    pub transactions: Vec<RpcTransaction>,
}

/// Only the fields the scanner reads; everything else is ignored
#[derive(Debug, Clone, Deserialize)]
pub struct RpcTransaction {
    pub hash: String,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub input: String,
}

/// Parse a `0x`-prefixed hex quantity
pub fn parse_quantity(s: &str) -> Result<u64, LedgerError> {
    let digits = s
        .strip_prefix("0x")
        .ok_or_else(|| LedgerError::InvalidResponse(format!("Quantity without 0x prefix: {}", s)))?;
    u64::from_str_radix(digits, 16)
        .map_err(|e| LedgerError::InvalidResponse(format!("Invalid quantity {}: {}", s, e)))
}

/// Format a block number as a JSON-RPC quantity
pub fn format_quantity(n: u64) -> String {
    format!("0x{:x}", n)
}

impl TryFrom<RpcTransaction> for TransactionPayload {
    type Error = LedgerError;

    fn try_from(tx: RpcTransaction) -> Result<Self, Self::Error> {
        let data = hex::decode(tx.input.trim_start_matches("0x")).map_err(|e| {
            LedgerError::InvalidResponse(format!("Bad input hex in tx {}: {}", tx.hash, e))
        })?;
        Ok(TransactionPayload::new(tx.hash, tx.to, data))
    }
}

impl TryFrom<RpcBlock> for LedgerBlock {
    type Error = LedgerError;

    fn try_from(block: RpcBlock) -> Result<Self, Self::Error> {
        let number = parse_quantity(&block.number)?;
        let transactions = block
            .transactions
            .into_iter()
            .map(TransactionPayload::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(LedgerBlock {
            number,
            transactions,
        })
    }
}
