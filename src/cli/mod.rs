//! CLI module for exprcheck
//!
//! ## Commands
//!
//! - (none) / `repl` - Interactive shell
//! - `check <TEXT>` / `check --file <PATH>` - Check one line, or every line of a file
//! - `lex <TEXT>` - Print the token sequence (debug)
//! - `trace <TEXT>` - Print the recognizer trace and the verdict (debug)
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
use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::ShellConfig;
use crate::version::EXPRCHECK_VERSION;

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
/// Carries a user-facing message and an exit code. `run()` prints the message and exits with
/// the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already rendered)
    pub message: String,
    pub exit_code: ExitCode,
}

impl CliError {
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

/// Syntax checker for a small expression language
#[derive(Parser, Debug)]
#[command(name = "exprcheck")]
#[command(version = EXPRCHECK_VERSION)]
#[command(about = "Check lines of a small expression language for lexical and syntax errors", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Print the recognizer trace for each line
    #[arg(long, global = true)]
    pub trace: bool,

    /// Do not list tokens after scanning (shell only)
    #[arg(long = "no-tokens", global = true)]
    pub no_tokens: bool,

    /// Shell prompt
    #[arg(long, value_name = "TEXT", global = true)]
    pub prompt: Option<String>,

    /// Log scanner and recognizer activity to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the interactive shell (default)
    Repl,

    /// Check one line, or every non-blank line of a file
    Check {
        /// Line to check
        #[arg(
            value_name = "TEXT",
            allow_hyphen_values = true,
            conflicts_with = "file",
            required_unless_present = "file"
        )]
        text: Option<String>,
        /// Check each line of this file
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
    },

    /// Print the token sequence of a line
    Lex {
        #[arg(value_name = "TEXT", allow_hyphen_values = true)]
        text: String,
    },

    /// Print the recognizer trace of a line, then the verdict
    Trace {
        #[arg(value_name = "TEXT", allow_hyphen_values = true)]
        text: String,
    },
}

impl Cli {
    /// Shell settings after applying the command-line overrides.
    pub fn shell_config(&self) -> ShellConfig {
        let mut config = ShellConfig::new()
            .with_show_tokens(!self.no_tokens)
            .with_trace(self.trace);
        if let Some(prompt) = &self.prompt {
            config = config.with_prompt(prompt.clone());
        }
        config
    }
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
    init_logging(cli.verbose);

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

/// Default log filter when `RUST_LOG` is unset.
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "warn,exprcheck=debug,exprcheck_syntax=trace"
    } else {
        "warn"
    }
}

/// Install the stderr subscriber. Logs never share stdout with shell output.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = cli.shell_config();
    match cli.command {
        None | Some(Command::Repl) => commands::repl(config),
        Some(Command::Check { file: Some(path), .. }) => commands::check_file(&path.to_string_lossy()),
        Some(Command::Check { text: Some(text), .. }) => commands::check_text(&text, config.trace),
        Some(Command::Check { text: None, file: None }) => {
            Err(CliError::failure("Error: check requires a line of text or --file <PATH>"))
        }
        Some(Command::Lex { text }) => commands::lex_text(&text),
        Some(Command::Trace { text }) => commands::trace_text(&text),
    }
}

// ============================================================================
// Tests
// ============================================================================
