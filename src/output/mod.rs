//! Block report output
//!
//! The console format is line-oriented and stable:
//!
//! ```text
//!
//! Block <n>
//! Tx: <hash>
//! To: <address>
//! Possible messages:
//!   - "<message>"
//!
//! ```
//!
//! `To:` is omitted for contract creations. JSON output writes one report per line.

use crate::errors::AppResult;
use crate::types::BlockReport;
use clap::ValueEnum;
use std::io::Write;

/// Output format for block reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable console output
    #[default]
    Console,
    /// One JSON object per block report per line
    Json,
}

/// Destination for block reports emitted by the scanner
pub trait ReportSink {
    fn emit(&mut self, report: &BlockReport) -> AppResult<()>;
}

/// Collects reports in memory
impl ReportSink for Vec<BlockReport> {
    fn emit(&mut self, report: &BlockReport) -> AppResult<()> {
        self.push(report.clone());
        Ok(())
    }
}

pub struct ConsoleReportWriter<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for ConsoleReportWriter<W> {
    fn emit(&mut self, report: &BlockReport) -> AppResult<()> {
        write!(self.out, "{}", format_console(report))?;
        self.out.flush()?;
        Ok(())
    }
}

pub struct JsonReportWriter<W: Write> {
    out: W,
}

impl<W: Write> JsonReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for JsonReportWriter<W> {
    fn emit(&mut self, report: &BlockReport) -> AppResult<()> {
        serde_json::to_writer(&mut self.out, report)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Render one block report in console format
pub fn format_console(report: &BlockReport) -> String {
    let mut s = format!("\nBlock {}\n", report.block_number);
    for tx in &report.transactions {
        s.push_str(&format!("Tx: {}\n", tx.hash));
        if let Some(to) = &tx.to {
            s.push_str(&format!("To: {}\n", to));
        }
        s.push_str("Possible messages:\n");
        for message in &tx.messages {
            s.push_str(&format!("  - {:?}\n", message));
        }
        s.push('\n');
    }
    s
}

/// Boxed sink for the selected format on stdout
pub fn stdout_sink(format: OutputFormat) -> Box<dyn ReportSink> {
    let stdout = std::io::stdout();
    match format {
        OutputFormat::Console => Box::new(ConsoleReportWriter::new(stdout)),
        OutputFormat::Json => Box::new(JsonReportWriter::new(stdout)),
    }
}

impl<S: ReportSink + ?Sized> ReportSink for Box<S> {
    fn emit(&mut self, report: &BlockReport) -> AppResult<()> {
        (**self).emit(report)
    }
}
