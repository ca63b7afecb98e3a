//! Terminal chat client.
//!
//! Connects to a Tsudoi server, sends typed lines as input events and prints
//! every frame the server sends back.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin tsudoi-client -- --user alice
//! cargo run --bin tsudoi-client -- -u bob --url ws://127.0.0.1:23234/ws
//! ```

use clap::Parser;

use tsudoi_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "tsudoi-client")]
#[command(about = "Terminal client for the Tsudoi multi-room chat", long_about = None)]
struct Args {
    /// Display name shown to other users
    #[arg(short = 'u', long)]
    user: String,

    /// WebSocket server URL
    #[arg(long, default_value = "ws://127.0.0.1:23234/ws")]
    url: String,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    match tsudoi_client::run_client_session(&args.url, &args.user).await {
        Ok(()) => tracing::info!("Client session ended"),
        Err(e) => {
            tracing::error!("Client error: {}", e);
            std::process::exit(1);
        }
    }
}
