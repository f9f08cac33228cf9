//! # Giraffe - Growth Stage Finder
//!
//! The main binary for the giraffe foot-length classifier.
//!
//! This application provides:
//! - CLI interface for one-shot classification and stage lookup
//! - Interactive prompt with "try again"
//! - HTTP JSON API server (axum-based)
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                  apps/giraffe (THE BINARY)                │
//! │                                                           │
//! │  ┌─────────────┐   ┌──────────────┐   ┌──────────────┐   │
//! │  │    CLI      │   │  Interactive │   │   HTTP API   │   │
//! │  │   (clap)    │   │  (rustyline) │   │   (axum)     │   │
//! │  └──────┬──────┘   └──────┬───────┘   └──────┬───────┘   │
//! │         └─────────────────┼──────────────────┘           │
//! │                           ▼                               │
//! │                   ┌───────────────┐                       │
//! │                   │ giraffe-core  │                       │
//! │                   │  (THE LOGIC)  │                       │
//! │                   └───────────────┘                       │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! giraffe classify 16.5
//! giraffe stages
//! giraffe stage adult --json-mode
//! giraffe server --port 8080 --config giraffe.toml
//! ```

use clap::Parser;
use giraffe::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    init_tracing(cli.verbose);

    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    if let Err(e) = cli::execute(cli).await {
        // Recoverable failures were already shown to the user.
        if e.is_recoverable() {
            tracing::debug!("Rejected input: {}", e);
        } else {
            tracing::error!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

/// GIRAFFE_LOG_FORMAT=json enables machine-parseable output.
fn init_tracing(verbose: bool) {
    let log_format = std::env::var("GIRAFFE_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if verbose {
        "giraffe=debug,tower_http=debug"
    } else {
        "giraffe=info,tower_http=debug"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    // Logs go to stderr so stdout stays clean for --json-mode.
    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}

/// Print the startup banner.
fn print_banner() {
    println!(
        r#"
  Giraffe Growth Stage Finder v{}

  Measure • Classify • Discover
"#,
        env!("CARGO_PKG_VERSION")
    );
}
