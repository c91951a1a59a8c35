//! Scan orchestration
//!
//! Walks a block range strictly sequentially. For each block: fetch, run every
//! transaction through the detector, emit a report only if something was
//! accepted, then pause for the pacing delay. A failed fetch is logged once
//! and skipped; it is never retried and never aborts the scan.

use crate::detection::MessageDetector;
use crate::errors::AppResult;
use crate::output::ReportSink;
use crate::processor::{ProgressReporter, ScanRange};
use crate::rpc::LedgerSource;
use crate::types::{BlockReport, LedgerBlock, ScanDirection, ScanSummary, TransactionFindings};
use std::time::{Duration, Instant};
use tokio::time::sleep;
use tracing::{debug, info, warn};

pub struct BlockScanner<'a, L: LedgerSource> {
    ledger: &'a L,
    detector: MessageDetector,
    pacing: Duration,
}

impl<'a, L: LedgerSource> BlockScanner<'a, L> {
    pub fn new(ledger: &'a L, detector: MessageDetector, pacing: Duration) -> Self {
        Self {
            ledger,
            detector,
            pacing,
        }
    }

    /// Look up the chain head and scan `depth` blocks below it
    ///
    /// A failed head lookup is returned as an error; the caller treats it as fatal.
    pub async fn scan_from_head<S: ReportSink + ?Sized>(
        &self,
        depth: u64,
        direction: ScanDirection,
        sink: &mut S,
    ) -> AppResult<ScanSummary> {
        let head = self.ledger.head_block_number().await?;
        let range = ScanRange::from_head(head, depth, direction);
        info!(
            "Chain head {}; scanning blocks {}..={} ({})",
            head, range.low, range.high, direction
        );
        self.scan(range, sink).await
    }

    /// Scan every block in `range`, emitting non-empty reports to `sink`
    pub async fn scan<S: ReportSink + ?Sized>(
        &self,
        range: ScanRange,
        sink: &mut S,
    ) -> AppResult<ScanSummary> {
        let started = Instant::now();
        let mut summary = ScanSummary::default();
        let total = range.len();

        for (index, number) in range.blocks().enumerate() {
            if index > 0 {
                sleep(self.pacing).await;
            }

            summary.blocks_scanned += 1;
            let block = match self.ledger.block_by_number(number).await {
                Ok(block) => block,
                Err(e) => {
                    warn!("Block {} fetch error: {}", number, e);
                    summary.failed_blocks.push(number);
                    continue;
                }
            };

            summary.transactions_analysed += block.transactions.len() as u64;
            if let Some(report) = self.analyse_block(number, &block) {
                summary.blocks_with_messages += 1;
                summary.messages_found += report.message_count() as u64;
                sink.emit(&report)?;
            }

            if (index as u64 + 1) % 25 == 0 {
                info!(
                    "Scanned {}/{} blocks ({} with messages)",
                    index + 1,
                    total,
                    summary.blocks_with_messages
                );
            }
        }

        ProgressReporter::report_completion(&summary, started.elapsed().as_secs_f64());
        Ok(summary)
    }

    /// Accepted messages for every transaction in one block
    ///
    /// `None` when no transaction yielded a message.
    pub fn analyse_block(&self, number: u64, block: &LedgerBlock) -> Option<BlockReport> {
        let transactions: Vec<TransactionFindings> = block
            .transactions
            .iter()
            .filter_map(|tx| {
                let messages = self.detector.analyse(tx);
                if messages.is_empty() {
                    return None;
                }
                debug!("Tx {} yielded {} message(s)", tx.hash, messages.len());
                Some(TransactionFindings {
                    hash: tx.hash.clone(),
                    to: tx.to.clone(),
                    messages,
                })
            })
            .collect();

        if transactions.is_empty() {
            return None;
        }
        Some(BlockReport {
            block_number: number,
            transactions,
        })
    }
}
