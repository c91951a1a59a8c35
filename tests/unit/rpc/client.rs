use calldata_message_scanner::config::LedgerConfig;
use calldata_message_scanner::errors::{AppError, LedgerError};
use calldata_message_scanner::rpc::{parse_quantity, EthRpcClient, RpcBlock};
use calldata_message_scanner::types::LedgerBlock;
use serde_json::json;

/// Tests for the JSON-RPC client component
///
/// These tests do not require a live Ethereum node.

#[test]
fn test_ledger_config_defaults() {
    let config = LedgerConfig::default();

    assert!(config.endpoint_template.starts_with("https://"));
    assert!(config.endpoint_template.contains("{key}"));
    assert!(config.api_key.is_none());
    assert!(config.timeout_seconds > 0);
}

#[test]
fn test_endpoint_substitutes_key() {
    let config = LedgerConfig {
        api_key: Some("abc123".to_string()),
        ..LedgerConfig::default()
    };
    assert_eq!(
        config.endpoint().unwrap(),
        "https://mainnet.infura.io/v3/abc123"
    );
}

#[tokio::test]
async fn test_missing_credential_is_fatal_app_error() {
    let err: AppError = match EthRpcClient::new(LedgerConfig::default()).await {
        Ok(_) => panic!("client created without credential"),
        Err(e) => e.into(),
    };
    assert!(matches!(
        err,
        AppError::Ledger(LedgerError::MissingCredential)
    ));
}

#[test]
fn test_rpc_block_with_contract_creation() {
    let raw = json!({
        "number": "0x12a05f2",
        "transactions": [
            {"hash": "0x01", "to": null, "input": "0x6080604052"},
            {"hash": "0x02", "to": "0xabc", "input": "0x"}
        ]
    });
    let block: RpcBlock = serde_json::from_value(raw).unwrap();
    let block = LedgerBlock::try_from(block).unwrap();
    assert_eq!(block.number, parse_quantity("0x12a05f2").unwrap());
    assert_eq!(block.transactions[0].to, None);
    assert_eq!(block.transactions[0].data, vec![0x60, 0x80, 0x60, 0x40, 0x52]);
    assert!(block.transactions[1].is_empty());
}

#[test]
fn test_error_messages_name_the_operation() {
    let err = LedgerError::Timeout {
        timeout_seconds: 30,
        operation: "eth_getBlockByNumber".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Request timeout: 30s for eth_getBlockByNumber"
    );

    let err = LedgerError::CallFailed {
        method: "eth_blockNumber".to_string(),
        message: "HTTP status 429".to_string(),
    };
    assert!(err.to_string().contains("eth_blockNumber"));
}
