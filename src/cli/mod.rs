use crate::errors::AppResult;
use clap::{Parser, Subcommand};

pub mod commands;

/// Ethereum calldata message scanner
#[derive(Parser)]
#[command(name = "calldata-message-scanner")]
#[command(about = "Find human-readable messages hidden in Ethereum transaction call data")]
#[command(version)]
pub struct Cli {
    /// Log at info level (RUST_LOG still takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Scan recent blocks for embedded messages
    Scan(commands::scan::ScanCommand),
    /// Run the detection pipeline on a single hex payload (offline)
    Inspect(commands::inspect::InspectCommand),
    /// Test JSON-RPC connectivity
    TestRpc(commands::test_rpc::TestRpcCommand),
}

pub async fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only reports
    // Uses RUST_LOG environment variable (defaults to "warn", or "info" with --verbose)
    let default_level = if cli.verbose { "info" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .try_init();

    match cli.command {
        Commands::Scan(command) => command.run().await,
        Commands::Inspect(command) => command.run(),
        Commands::TestRpc(command) => command.run().await,
    }
}
