//! WebSocket endpoint resolver - Entry Point
//!
//! 1. Loads `.env` (if it exists)
//! 2. Initializes logging
//! 3. Resolves the endpoint from `NODE_ENV`
//! 4. Prints the resolved configuration as JSON on stdout

use tracing::{info, warn};
use ws_config::config::{self, logging::init_logging};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if it exists)
    dotenvy::dotenv().ok();

    init_logging();

    let resolved = config::global();
    match resolved.ws_url() {
        Some(url) => info!(ws_url = %url, "[CONFIG] WebSocket endpoint resolved"),
        None => warn!("[CONFIG] No WebSocket endpoint for this environment"),
    }

    println!("{}", serde_json::to_string_pretty(resolved)?);
    Ok(())
}
