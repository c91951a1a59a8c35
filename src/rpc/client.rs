use crate::config::LedgerConfig;
use crate::errors::{LedgerError, LedgerResult};
use crate::rpc::types::{format_quantity, parse_quantity, RpcBlock, RpcRequest, RpcResponse};
use crate::rpc::LedgerSource;
use crate::types::LedgerBlock;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, info};

/// Ethereum JSON-RPC client over HTTP
///
/// One request in flight at a time from the scanner's point of view; no retries.
pub struct EthRpcClient {
    http: reqwest::Client,
    endpoint: String,
    timeout_seconds: u64,
    next_id: AtomicU64,
    error_count: AtomicU64,
}

impl EthRpcClient {
    /// Build the client and perform the initial handshake (`eth_chainId`)
    ///
    /// Fails with `MissingCredential` before any network traffic if the endpoint
    /// needs a key that is not configured.
    pub async fn new(config: LedgerConfig) -> LedgerResult<Self> {
        let endpoint = config.endpoint()?;
        let mut builder =
            reqwest::Client::builder().timeout(Duration::from_secs(config.timeout_seconds));
        // Local nodes are reached directly even when a system proxy is configured
        if is_loopback_endpoint(&endpoint) {
            builder = builder.no_proxy();
        }
        let http = builder
            .build()
            .map_err(|e| {
                LedgerError::ConnectionFailed(format!("Failed to create HTTP client: {}", e))
            })?;

        let client = Self {
            http,
            endpoint,
            timeout_seconds: config.timeout_seconds,
            next_id: AtomicU64::new(1),
            error_count: AtomicU64::new(0),
        };

        let chain_id = client.chain_id().await.map_err(|e| {
            LedgerError::ConnectionFailed(format!(
                "Failed to connect to JSON-RPC endpoint - check URL and API key: {}",
                e
            ))
        })?;
        info!("JSON-RPC connection established (chain id {})", chain_id);

        Ok(client)
    }

    /// Chain id reported by the node
    pub async fn chain_id(&self) -> LedgerResult<u64> {
        let raw: String = self.call("eth_chainId", json!([])).await?;
        parse_quantity(&raw)
    }

    /// Number of failed calls since construction
    pub fn get_error_count(&self) -> u64 {
        self.error_count.load(Ordering::Relaxed)
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> LedgerResult<T> {
        let result = self.call_inner(method, params).await;
        if result.is_err() {
            self.error_count.fetch_add(1, Ordering::Relaxed);
        }
        result
    }

    async fn call_inner<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Value,
    ) -> LedgerResult<T> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = RpcRequest::new(id, method, params);
        debug!("JSON-RPC request {} {}", id, method);

        let response = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.transport_error(method, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LedgerError::CallFailed {
                method: method.to_string(),
                message: format!("HTTP status {}", status),
            });
        }

        let body: RpcResponse = response
            .json()
            .await
            .map_err(|e| self.transport_error(method, e))?;

        if let Some(err) = body.error {
            return Err(LedgerError::CallFailed {
                method: method.to_string(),
                message: format!("{} (code {})", err.message, err.code),
            });
        }

        serde_json::from_value(body.result.unwrap_or(Value::Null)).map_err(|e| {
            LedgerError::InvalidResponse(format!("Unexpected {} result: {}", method, e))
        })
    }

    fn transport_error(&self, method: &str, err: reqwest::Error) -> LedgerError {
        if err.is_timeout() {
            LedgerError::Timeout {
                timeout_seconds: self.timeout_seconds,
                operation: method.to_string(),
            }
        } else if err.is_decode() {
            LedgerError::InvalidResponse(format!("{}: {}", method, err))
        } else {
            LedgerError::CallFailed {
                method: method.to_string(),
                message: err.to_string(),
            }
        }
    }
}

fn is_loopback_endpoint(endpoint: &str) -> bool {
    reqwest::Url::parse(endpoint)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .map(|host| matches!(host.as_str(), "localhost" | "127.0.0.1" | "[::1]" | "::1"))
        .unwrap_or(false)
}

impl LedgerSource for EthRpcClient {
    async fn head_block_number(&self) -> LedgerResult<u64> {
        let raw: String = self.call("eth_blockNumber", json!([])).await?;
        parse_quantity(&raw)
    }

    async fn block_by_number(&self, number: u64) -> LedgerResult<LedgerBlock> {
        let block: Option<RpcBlock> = self
            .call(
                "eth_getBlockByNumber",
                json!([format_quantity(number), true]),
            )
            .await?;
        let block = block.ok_or(LedgerError::BlockNotFound { number })?;
        LedgerBlock::try_from(block)
    }
}
