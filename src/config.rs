use crate::errors::LedgerError;
use crate::types::{DecodeStrategy, ScanDirection};
use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Environment variable holding the node provider API key
pub const API_KEY_ENV: &str = "INFURA_KEY";

/// Dotenv file read from the working directory at startup
pub const ENV_FILE: &str = ".env";

/// Application configuration loaded from config.toml or environment variables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub ledger: LedgerConfig,
    pub scan: ScanConfig,
    pub detection: DetectionConfig,
}

/// Ethereum JSON-RPC endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Endpoint URL; `{key}` is replaced with `api_key`
    pub endpoint_template: String,
    pub api_key: Option<String>,
    /// Transport-level request timeout
    pub timeout_seconds: u64,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            endpoint_template: "https://mainnet.infura.io/v3/{key}".to_string(),
            api_key: None,
            timeout_seconds: 30,
        }
    }
}

impl LedgerConfig {
    /// Resolve the endpoint URL, failing if the template needs a key that is missing
    pub fn endpoint(&self) -> Result<String, LedgerError> {
        if !self.endpoint_template.contains("{key}") {
            return Ok(self.endpoint_template.clone());
        }
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(self.endpoint_template.replace("{key}", key)),
            _ => Err(LedgerError::MissingCredential),
        }
    }
}

/// Block range walk configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Number of blocks below the head to include
    pub depth: u64,
    /// Unconditional delay between blocks
    pub pacing_ms: u64,
    pub direction: ScanDirection,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            depth: 100,
            pacing_ms: 250,
            direction: ScanDirection::Descending,
        }
    }
}

/// Thresholds and switches for the message detection pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Minimum candidate length in characters
    pub min_msg_length: usize,
    pub min_word_length: usize,
    pub min_words: usize,
    pub letter_ratio: f64,
    /// Stronger variant: reject candidates below `letter_ratio`
    pub with_letter_ratio_check: bool,
    /// Stronger variant: valid words must contain a vowel
    pub require_vowel: bool,
    pub decode_strategy: DecodeStrategy,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            min_msg_length: 4,
            min_word_length: 3,
            min_words: 2,
            letter_ratio: 0.6,
            with_letter_ratio_check: true,
            require_vowel: true,
            decode_strategy: DecodeStrategy::Codepoint,
        }
    }
}

impl DetectionConfig {
    /// The lighter heuristic: plain letter check, no ratio or vowel rules
    pub fn lenient() -> Self {
        Self {
            with_letter_ratio_check: false,
            require_vowel: false,
            ..Self::default()
        }
    }
}

impl AppConfig {
    /// Load configuration from config.toml file and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        load_env_file(Path::new(ENV_FILE))?;
        Self::load_from("config")
    }

    /// Load using an explicit config file stem (extension resolved by the `config` crate)
    pub fn load_from(file_stem: &str) -> Result<Self, ConfigError> {
        let defaults = AppConfig::default();
        let config = Config::builder()
            .set_default("ledger.endpoint_template", defaults.ledger.endpoint_template)?
            .set_default("ledger.timeout_seconds", defaults.ledger.timeout_seconds)?
            .set_default("scan.depth", defaults.scan.depth)?
            .set_default("scan.pacing_ms", defaults.scan.pacing_ms)?
            .set_default("scan.direction", defaults.scan.direction.to_string())?
            .set_default(
                "detection.min_msg_length",
                defaults.detection.min_msg_length as i64,
            )?
            .set_default(
                "detection.min_word_length",
                defaults.detection.min_word_length as i64,
            )?
            .set_default("detection.min_words", defaults.detection.min_words as i64)?
            .set_default("detection.letter_ratio", defaults.detection.letter_ratio)?
            .set_default(
                "detection.with_letter_ratio_check",
                defaults.detection.with_letter_ratio_check,
            )?
            .set_default("detection.require_vowel", defaults.detection.require_vowel)?
            .set_default("detection.decode_strategy", "codepoint")?
            // Load from config.toml if it exists
            .add_source(File::with_name(file_stem).required(false))
            // SCANNER_SCAN__DEPTH=50, SCANNER_LEDGER__API_KEY=..., etc.
            .add_source(
                config::Environment::with_prefix("SCANNER")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;

        // The provider key keeps the name the scanner has always read
        if let Ok(key) = env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                app_config.ledger.api_key = Some(key);
            }
        }

        Ok(app_config)
    }

    /// Get default config values when no usable configuration is present
    pub fn get_defaults() -> Result<Self, ConfigError> {
        match Self::load() {
            Ok(config) => Ok(config),
            Err(_) => Ok(Self::default()),
        }
    }
}

/// Copy `KEY=value` pairs from a dotenv file into the process environment.
///
/// Variables that are already set keep their value. Returns `false` when the
/// file does not exist; a file that exists but cannot be parsed is an error.
pub fn load_env_file(path: &Path) -> Result<bool, ConfigError> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(true),
        Err(e) if e.not_found() => Ok(false),
        Err(e) => Err(ConfigError::Message(format!("{}: {}", path.display(), e))),
    }
}
