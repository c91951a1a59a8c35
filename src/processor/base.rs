use crate::config::{DetectionConfig, ScanConfig};
use crate::errors::{AppError, AppResult};
use crate::types::ScanSummary;
use tracing::{info, warn};

/// Configuration validation utilities
pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate_detection_config(config: &DetectionConfig) -> AppResult<()> {
        if config.min_msg_length == 0 {
            return Err(AppError::Config(
                "Minimum message length must be greater than 0".to_string(),
            ));
        }
        if config.min_words == 0 {
            return Err(AppError::Config(
                "Minimum word count must be greater than 0".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&config.letter_ratio) {
            return Err(AppError::Config(format!(
                "Letter ratio must be within [0, 1], got {}",
                config.letter_ratio
            )));
        }
        Ok(())
    }

    pub fn validate_scan_config(config: &ScanConfig) -> AppResult<()> {
        if config.pacing_ms < 100 {
            warn!(
                "Pacing of {}ms is below 100ms - public endpoints may rate-limit the scan",
                config.pacing_ms
            );
        }
        Ok(())
    }

    pub fn log_config_summary(scan: &ScanConfig, detection: &DetectionConfig) {
        info!("=== Scan Configuration ===");
        info!("  Depth: {} blocks ({})", scan.depth, scan.direction);
        info!("  Pacing: {}ms", scan.pacing_ms);
        info!("  Decode strategy: {}", detection.decode_strategy);
        info!(
            "  Thresholds: min length {}, min words {}, min word length {}",
            detection.min_msg_length, detection.min_words, detection.min_word_length
        );
        info!(
            "  Letter ratio check: {} (>= {}), vowel rule: {}",
            detection.with_letter_ratio_check, detection.letter_ratio, detection.require_vowel
        );
    }
}

/// Progress reporting utilities
pub struct ProgressReporter;

impl ProgressReporter {
    /// Format elapsed seconds as `45.2s`, `5m 46s` or `1h 30m 45s`
    pub fn format_elapsed_time(elapsed_secs: f64) -> String {
        if elapsed_secs < 60.0 {
            format!("{:.1}s", elapsed_secs)
        } else if elapsed_secs < 3600.0 {
            let minutes = (elapsed_secs / 60.0).floor();
            let seconds = elapsed_secs % 60.0;
            format!("{}m {:.0}s", minutes, seconds)
        } else {
            let hours = (elapsed_secs / 3600.0).floor();
            let remaining = elapsed_secs % 3600.0;
            let minutes = (remaining / 60.0).floor();
            let seconds = remaining % 60.0;
            format!("{}h {}m {:.0}s", hours, minutes, seconds)
        }
    }

    pub fn report_completion(summary: &ScanSummary, elapsed: f64) {
        info!("=== Scan Completed ===");
        info!("  Blocks scanned: {}", summary.blocks_scanned);
        info!("  Blocks with messages: {}", summary.blocks_with_messages);
        info!("  Transactions analysed: {}", summary.transactions_analysed);
        info!("  Messages found: {}", summary.messages_found);
        if !summary.failed_blocks.is_empty() {
            info!(
                "  Failed blocks: {} {:?}",
                summary.failed_blocks.len(),
                summary.failed_blocks
            );
        }
        info!("  Time elapsed: {}", Self::format_elapsed_time(elapsed));
    }
}
