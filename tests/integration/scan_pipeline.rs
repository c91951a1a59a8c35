//! Scan orchestration against a scripted ledger
//!
//! Verifies ordering, per-block failure policy and report shape end to end.

use anyhow::Result;
use calldata_message_scanner::config::DetectionConfig;
use calldata_message_scanner::detection::MessageDetector;
use calldata_message_scanner::errors::{AppError, LedgerError};
use calldata_message_scanner::output::ConsoleReportWriter;
use calldata_message_scanner::processor::{BlockScanner, ScanRange};
use calldata_message_scanner::types::{BlockReport, ScanDirection};
use std::time::Duration;
use tracing_subscriber::layer::SubscriberExt;

use crate::common::{noisy_text, transfer_with_text, tx, MockLedger, WarnCounter};

fn detector() -> MessageDetector {
    MessageDetector::new(&DetectionConfig::default()).unwrap()
}

fn scripted_ledger() -> MockLedger {
    MockLedger::with_head(105)
        .block(
            105,
            vec![
                tx("0x105a", noisy_text("hello world this is a test")),
                tx("0x105b", transfer_with_text("hello world this is a test")),
            ],
        )
        .block(104, vec![tx("0x104a", b"xk qz 99".to_vec())])
        .block(
            103,
            vec![
                tx("0x103a", Vec::new()),
                tx("0x103b", noisy_text("gm frens see you on chain")),
                tx("0x103c", noisy_text("another hidden note lives here")),
            ],
        )
}

#[tokio::test]
async fn test_descending_scan_emits_only_blocks_with_messages() -> Result<()> {
    let ledger = scripted_ledger();
    let scanner = BlockScanner::new(&ledger, detector(), Duration::ZERO);
    let mut reports: Vec<BlockReport> = Vec::new();

    let summary = scanner
        .scan_from_head(5, ScanDirection::Descending, &mut reports)
        .await?;

    assert_eq!(ledger.fetch_log(), vec![105, 104, 103, 102, 101, 100]);
    assert_eq!(
        reports.iter().map(|r| r.block_number).collect::<Vec<_>>(),
        vec![105, 103]
    );

    // Transfer call in block 105 is filtered out entirely
    assert_eq!(reports[0].transactions.len(), 1);
    assert_eq!(reports[0].transactions[0].hash, "0x105a");
    assert_eq!(
        reports[0].transactions[0].messages,
        vec!["hello world this is a test".to_string()]
    );

    assert_eq!(reports[1].transactions.len(), 2);
    assert_eq!(summary.blocks_scanned, 6);
    assert_eq!(summary.blocks_with_messages, 2);
    assert_eq!(summary.messages_found, 3);
    assert!(summary.failed_blocks.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_ascending_scan_order() -> Result<()> {
    let ledger = scripted_ledger();
    let scanner = BlockScanner::new(&ledger, detector(), Duration::ZERO);
    let mut reports: Vec<BlockReport> = Vec::new();

    scanner
        .scan_from_head(2, ScanDirection::Ascending, &mut reports)
        .await?;

    assert_eq!(ledger.fetch_log(), vec![103, 104, 105]);
    assert_eq!(
        reports.iter().map(|r| r.block_number).collect::<Vec<_>>(),
        vec![103, 105]
    );
    Ok(())
}

#[tokio::test]
async fn test_failed_block_logged_once_and_scan_continues() -> Result<()> {
    let counter = WarnCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let _guard = tracing::subscriber::set_default(subscriber);

    for direction in [ScanDirection::Descending, ScanDirection::Ascending] {
        let before = counter.count();
        let ledger = scripted_ledger().failing(104);
        let scanner = BlockScanner::new(&ledger, detector(), Duration::ZERO);
        let mut reports: Vec<BlockReport> = Vec::new();

        let summary = scanner
            .scan(ScanRange::new(103, 105, direction), &mut reports)
            .await?;

        let expected = match direction {
            ScanDirection::Descending => vec![105, 104, 103],
            ScanDirection::Ascending => vec![103, 104, 105],
        };
        assert_eq!(ledger.fetch_log(), expected, "no retry of block 104");
        assert_eq!(summary.failed_blocks, vec![104]);
        assert_eq!(counter.count() - before, 1, "failure logged exactly once");
        assert_eq!(reports.len(), 2);
    }
    Ok(())
}

#[tokio::test]
async fn test_head_lookup_failure_is_fatal() {
    let ledger = MockLedger {
        fail_head: true,
        ..MockLedger::with_head(10)
    };
    let scanner = BlockScanner::new(&ledger, detector(), Duration::ZERO);
    let mut reports: Vec<BlockReport> = Vec::new();

    let result = scanner
        .scan_from_head(5, ScanDirection::Descending, &mut reports)
        .await;

    assert!(matches!(
        result,
        Err(AppError::Ledger(LedgerError::CallFailed { .. }))
    ));
    assert!(ledger.fetch_log().is_empty());
}

#[tokio::test]
async fn test_pacing_applies_between_blocks_even_on_failure() -> Result<()> {
    let ledger = MockLedger::with_head(3).failing(2).failing(1);
    let scanner = BlockScanner::new(&ledger, detector(), Duration::from_millis(20));
    let mut reports: Vec<BlockReport> = Vec::new();

    let started = std::time::Instant::now();
    let summary = scanner
        .scan(ScanRange::new(1, 3, ScanDirection::Descending), &mut reports)
        .await?;

    // Two gaps between three blocks
    assert!(started.elapsed() >= Duration::from_millis(40));
    assert_eq!(summary.failed_blocks, vec![2, 1]);
    assert!(reports.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_console_output_line_shape() -> Result<()> {
    let ledger = scripted_ledger();
    let scanner = BlockScanner::new(&ledger, detector(), Duration::ZERO);
    let mut writer = ConsoleReportWriter::new(Vec::new());

    scanner
        .scan(ScanRange::new(105, 105, ScanDirection::Descending), &mut writer)
        .await?;

    let out = String::from_utf8(writer.into_inner())?;
    assert_eq!(
        out,
        "\nBlock 105\n\
         Tx: 0x105a\n\
         To: 0x000000000000000000000000000000000000dead\n\
         Possible messages:\n  - \"hello world this is a test\"\n\n"
    );
    Ok(())
}
