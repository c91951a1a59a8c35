//! Structured-call filter
//!
//! Payloads that begin with a known ABI selector are contract calls and are
//! skipped before decoding. Pure membership test, no side effects.

use crate::types::SignatureTable;

/// Rejects payloads whose leading selector is in the signature table
#[derive(Debug, Clone, Default)]
pub struct SignatureFilter {
    table: SignatureTable,
}

impl SignatureFilter {
    pub fn new(table: SignatureTable) -> Self {
        Self { table }
    }

    /// True if the first 4 bytes match a known selector
    ///
    /// Payloads shorter than 4 bytes are never structured calls.
    pub fn is_structured_call(&self, data: &[u8]) -> bool {
        self.table.lookup(data).is_some()
    }

    /// Function name for the payload's selector, for labelling only
    pub fn label(&self, data: &[u8]) -> Option<&str> {
        self.table.lookup(data)
    }

    pub fn table(&self) -> &SignatureTable {
        &self.table
    }
}
