//! Known contract-call selectors
//!
//! A payload whose first 4 bytes match one of these selectors is a structured
//! ABI call, not free-form text. The label is informational only.

use crate::errors::{AppError, AppResult};
use lazy_static::lazy_static;
use std::collections::HashMap;

/// Selector length in bytes (first 4 bytes of keccak256 of the function signature)
pub const SELECTOR_LEN: usize = 4;

/// Well-known selectors (hex, lowercase) and their human-readable names
pub const KNOWN_SIGNATURES: &[(&str, &str)] = &[
    ("a9059cbb", "ERC20 transfer"),
    ("23b872dd", "ERC20 transferFrom"),
    ("095ea7b3", "ERC20 approve"),
    ("42842e0e", "ERC721 safeTransferFrom"),
    ("b88d4fde", "ERC721 safeTransferFrom with data"),
    ("a22cb465", "setApprovalForAll"),
    ("6352211e", "ownerOf (ERC721)"),
    ("70a08231", "balanceOf"),
    ("06fdde03", "name()"),
    ("95d89b41", "symbol()"),
    ("313ce567", "decimals()"),
    ("18160ddd", "totalSupply()"),
    ("dd62ed3e", "allowance"),
    ("f242432a", "ERC1155 safeTransferFrom"),
    ("2eb2c2d6", "ERC1155 safeBatchTransferFrom"),
    ("d0e30db0", "WETH deposit()"),
    ("2e1a7d4d", "WETH withdraw"),
];

lazy_static! {
    static ref DEFAULT_TABLE: HashMap<String, String> = KNOWN_SIGNATURES
        .iter()
        .map(|(sig, name)| (sig.to_string(), name.to_string()))
        .collect();
}

/// Selector → function name mapping used for membership tests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureTable {
    entries: HashMap<String, String>,
}

impl Default for SignatureTable {
    fn default() -> Self {
        Self {
            entries: DEFAULT_TABLE.clone(),
        }
    }
}

impl SignatureTable {
    /// An empty table (nothing is treated as a structured call)
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Add or replace a selector. Accepts `0x`-prefixed or bare hex, any case.
    ///
    /// Anything other than exactly 4 bytes of hex is rejected.
    pub fn with_entry(mut self, selector_hex: &str, name: &str) -> AppResult<Self> {
        let lowered = selector_hex.trim().to_ascii_lowercase();
        let digits = lowered.strip_prefix("0x").unwrap_or(&lowered);
        let bytes = hex::decode(digits)?;
        if bytes.len() != SELECTOR_LEN {
            return Err(AppError::InvalidData(format!(
                "selector must be {} bytes, got {} in {:?}",
                SELECTOR_LEN,
                bytes.len(),
                selector_hex
            )));
        }
        self.entries.insert(hex::encode(bytes), name.to_string());
        Ok(self)
    }

    /// Name registered for the payload's selector, if any
    ///
    /// Payloads shorter than a selector never match.
    pub fn lookup(&self, data: &[u8]) -> Option<&str> {
        if data.len() < SELECTOR_LEN {
            return None;
        }
        let selector = hex::encode(&data[..SELECTOR_LEN]);
        self.entries.get(&selector).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
