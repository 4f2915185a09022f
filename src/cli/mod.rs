//! CLI module for the Riffle demo driver.
//!
//! ## Commands
//!
//! - `sort <file>` - Sort a file-backed integer array repeatedly and print a prefix per run
//! - `bench` - Compute one functional-primitives job and print its aggregate and timing
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::version::RIFFLE_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// The Riffle merge sort demo driver
#[derive(Parser, Debug)]
#[command(name = "riffle")]
#[command(version = RIFFLE_VERSION)]
#[command(about = "Merge sort demo driver and functional-primitives micro-benchmark", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sort newline-delimited integers from a file, repeatedly, printing a prefix per run
    Sort {
        /// Input file, one integer per line
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Number of times to re-sort the original array
        #[arg(long, default_value_t = 10)]
        runs: usize,
        /// How many leading elements of the sorted result to print
        #[arg(long, default_value_t = 10)]
        show: usize,
    },

    /// Run one functional-primitives job and print its aggregate and timing
    Bench {
        /// Upper bound of the generated range
        #[arg(long, default_value_t = 5_000_000)]
        n: i64,
        /// Use the native iterator job instead of the hand-rolled one
        #[arg(long)]
        native: bool,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Sort { file, runs, show } => commands::sort_file(&file, runs, show),
        Command::Bench { n, native } => commands::bench_job(n, native),
    }
}
