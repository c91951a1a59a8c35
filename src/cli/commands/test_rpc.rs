use super::LedgerArgs;
use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::rpc::{EthRpcClient, LedgerSource};
use clap::Args;
use tracing::{error, info};

/// Test JSON-RPC connectivity
#[derive(Args, Debug)]
pub struct TestRpcCommand {
    #[command(flatten)]
    pub ledger: LedgerArgs,
}

impl TestRpcCommand {
    pub async fn run(&self) -> AppResult<()> {
        info!("=== Testing JSON-RPC Connection ===");

        let app_config = AppConfig::get_defaults().map_err(|e| AppError::Config(e.to_string()))?;
        let mut ledger_config = app_config.ledger;
        self.ledger.apply(&mut ledger_config);

        info!("Testing connection to: {}", ledger_config.endpoint_template);

        match EthRpcClient::new(ledger_config).await {
            Ok(client) => match client.head_block_number().await {
                Ok(head) => {
                    println!("JSON-RPC connection test PASSED");
                    println!("Chain head: {}", head);
                }
                Err(e) => {
                    error!("Head block lookup failed: {}", e);
                    return Err(AppError::Ledger(e));
                }
            },
            Err(e) => {
                error!("Failed to create JSON-RPC client: {}", e);
                println!("JSON-RPC connection test FAILED");
                println!("Error: {}", e);
                println!("\nTroubleshooting tips:");
                println!("1. Check that INFURA_KEY (or --api-key) is set");
                println!("2. Verify the endpoint URL is correct");
                println!("3. Check network access to the provider");

                return Err(AppError::Ledger(e));
            }
        }

        Ok(())
    }
}
