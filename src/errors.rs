use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// Ledger (JSON-RPC) operations
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    /// File I/O operations, including writing reports to stdout
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation/parsing
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Ledger source error types
#[derive(Error, Debug)]
pub enum LedgerError {
    /// No API key configured for the node endpoint
    #[error("Missing credential: set INFURA_KEY or ledger.api_key in config.toml")]
    MissingCredential,

    /// Failed to establish connection to the JSON-RPC endpoint
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// RPC method call failed (network errors, HTTP status, JSON-RPC error object)
    #[error("RPC call failed: {method} - {message}")]
    CallFailed { method: String, message: String },

    /// RPC returned unexpected or malformed response data
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Node answered with `null` for the requested block
    #[error("Block not found: {number}")]
    BlockNotFound { number: u64 },

    /// RPC request timed out at the transport level
    #[error("Request timeout: {timeout_seconds}s for {operation}")]
    Timeout {
        timeout_seconds: u64,
        operation: String,
    },
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidData(format!("JSON error: {}", err))
    }
}

impl From<hex::FromHexError> for AppError {
    fn from(err: hex::FromHexError) -> Self {
        AppError::InvalidData(format!("Hex decode error: {}", err))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
