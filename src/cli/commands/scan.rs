use super::{DetectionArgs, LedgerArgs};
use crate::config::{AppConfig, ScanConfig};
use crate::detection::MessageDetector;
use crate::errors::{AppError, AppResult};
use crate::output::{stdout_sink, OutputFormat};
use crate::processor::{BlockScanner, ConfigValidator};
use crate::rpc::EthRpcClient;
use crate::types::ScanDirection;
use clap::Args;
use std::time::Duration;
use tracing::info;

/// Scan recent blocks for embedded messages
#[derive(Args, Debug)]
pub struct ScanCommand {
    /// Number of blocks below the chain head to scan (overrides config.toml)
    #[arg(long)]
    pub depth: Option<u64>,

    /// Delay between blocks in milliseconds (overrides config.toml)
    #[arg(long)]
    pub pacing_ms: Option<u64>,

    /// Walk the range from the head down or from `head - depth` up
    #[arg(long, value_enum)]
    pub direction: Option<ScanDirection>,

    /// Report output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub detection: DetectionArgs,

    #[command(flatten)]
    pub ledger: LedgerArgs,
}

impl ScanCommand {
    pub async fn run(&self) -> AppResult<()> {
        let mut config = AppConfig::load().map_err(|e| AppError::Config(e.to_string()))?;
        self.apply_overrides(&mut config);

        ConfigValidator::validate_detection_config(&config.detection)?;
        ConfigValidator::validate_scan_config(&config.scan)?;
        ConfigValidator::log_config_summary(&config.scan, &config.detection);

        // Missing key, failed handshake and failed head lookup all end the process
        let client = EthRpcClient::new(config.ledger.clone()).await?;
        let detector = MessageDetector::new(&config.detection)?;
        let scanner = BlockScanner::new(
            &client,
            detector,
            Duration::from_millis(config.scan.pacing_ms),
        );

        let mut sink = stdout_sink(self.format);
        let summary = scanner
            .scan_from_head(config.scan.depth, config.scan.direction, &mut sink)
            .await?;

        info!(
            "RPC errors during scan: {} ({} block(s) skipped)",
            client.get_error_count(),
            summary.failed_blocks.len()
        );
        Ok(())
    }

    pub fn apply_overrides(&self, config: &mut AppConfig) {
        self.ledger.apply(&mut config.ledger);
        self.detection.apply(&mut config.detection);
        apply_scan_overrides(self, &mut config.scan);
    }
}

fn apply_scan_overrides(command: &ScanCommand, scan: &mut ScanConfig) {
    if let Some(depth) = command.depth {
        scan.depth = depth;
    }
    if let Some(pacing_ms) = command.pacing_ms {
        scan.pacing_ms = pacing_ms;
    }
    if let Some(direction) = command.direction {
        scan.direction = direction;
    }
}
