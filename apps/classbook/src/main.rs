//! # Classbook - Student Roster
//!
//! The main binary for the Classbook interactive roster.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │          apps/classbook (THE BINARY)         │
//! │                                              │
//! │  ┌─────────────┐        ┌────────────────┐   │
//! │  │    CLI      │───────▶│  Shell (menu)  │   │
//! │  │   (clap)    │        │ stdin / stdout │   │
//! │  └─────────────┘        └───────┬────────┘   │
//! │                                 ▼            │
//! │                      ┌──────────────────┐    │
//! │                      │  classbook-core  │    │
//! │                      │   (THE LOGIC)    │    │
//! │                      └──────────────────┘    │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! classbook
//! classbook --quiet --json-mode
//! RUST_LOG=classbook=debug classbook
//! ```

use clap::Parser;
use classbook::cli::{self, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr only — stdout is the interactive surface.
    // CLASSBOOK_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("CLASSBOOK_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| cli.default_log_filter().into());

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
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_ansi(false),
                )
                .init();
        }
    }

    if let Err(e) = cli::execute(&cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}
