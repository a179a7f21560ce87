//! # Classbook CLI Module
//!
//! Command-line flags and the entry into the interactive shell.
//!
//! ## Flags
//!
//! - `--quiet` - Skip the welcome banner
//! - `--verbose` - Debug-level logging on stderr
//! - `--json-mode` - Print list, search and report views as JSON

use crate::render::{self, OutputMode};
use crate::shell::{Shell, ShellError};
use clap::Parser;
use std::io;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Classbook - interactive student roster
///
/// Register students with their grades, search them by name and print the
/// class report. Nothing is saved when the program ends.
#[derive(Parser, Debug)]
#[command(name = "classbook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long)]
    pub quiet: bool,

    /// Output views in JSON format (for programmatic access)
    #[arg(long)]
    pub json_mode: bool,
}

impl Cli {
    /// Output mode selected by the flags.
    pub fn output_mode(&self) -> OutputMode {
        if self.json_mode {
            OutputMode::Json
        } else {
            OutputMode::Text
        }
    }

    /// Default log filter when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "classbook=debug"
        } else {
            "classbook=warn"
        }
    }
}

// =============================================================================
// EXECUTION
// =============================================================================

/// Run the interactive shell on the process stdin/stdout.
pub fn execute(cli: &Cli) -> Result<(), ShellError> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    if !cli.quiet {
        println!("{}", render::WELCOME);
        println!();
    }

    tracing::debug!(mode = ?cli.output_mode(), "Starting shell");
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), cli.output_mode());
    shell.run()
}
