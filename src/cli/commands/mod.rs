pub mod inspect;
pub mod scan;
pub mod test_rpc;

use crate::config::{DetectionConfig, LedgerConfig};
use crate::types::DecodeStrategy;
use clap::Args;

/// Ledger endpoint overrides shared by network commands
#[derive(Args, Debug, Clone, Default)]
pub struct LedgerArgs {
    /// JSON-RPC endpoint URL; may contain `{key}` (overrides config.toml)
    #[arg(long)]
    pub rpc_url: Option<String>,

    /// Provider API key (overrides INFURA_KEY)
    #[arg(long)]
    pub api_key: Option<String>,
}

impl LedgerArgs {
    pub fn apply(&self, config: &mut LedgerConfig) {
        if let Some(url) = &self.rpc_url {
            config.endpoint_template = url.clone();
        }
        if let Some(key) = &self.api_key {
            config.api_key = Some(key.clone());
        }
    }
}

/// Detection overrides shared by `scan` and `inspect`
#[derive(Args, Debug, Clone, Default)]
pub struct DetectionArgs {
    /// Byte decoding strategy
    #[arg(long, value_enum)]
    pub strategy: Option<DecodeStrategy>,

    /// Use the lighter heuristic (no letter-ratio or vowel rules)
    #[arg(long)]
    pub lenient: bool,
}

impl DetectionArgs {
    pub fn apply(&self, config: &mut DetectionConfig) {
        if let Some(strategy) = self.strategy {
            config.decode_strategy = strategy;
        }
        if self.lenient {
            config.with_letter_ratio_check = false;
            config.require_vowel = false;
        }
    }
}
