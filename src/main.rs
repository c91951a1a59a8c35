#[tokio::main]
async fn main() {
    if let Err(e) = calldata_message_scanner::cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
