//! # colgraph
//!
//! Loads a TOML dataset into a schema-typed columnar graph and inspects it.
//!
//! ## Usage
//!
//! ```bash
//! colgraph load -f graph.toml
//! colgraph stats -f graph.toml --json-mode
//! colgraph neighbors -f graph.toml --vertex a
//! ```

use clap::Parser;
use colgraph::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    let cli = cli::Cli::parse();

    // COLGRAPH_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("COLGRAPH_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| cli.default_filter().into());

    // Logs go to stderr so that stdout carries only command output.
    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}
