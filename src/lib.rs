#![forbid(unsafe_code)]
//! exprcheck: a line-oriented syntax checker for a small expression language.
//!
//! The language has arithmetic (`+ - * / %`), unary minus, assignment, function-call syntax,
//! parenthesized grouping, and `null`/number/string/identifier literals. A line is either valid
//! or rejected with the first lexical or syntax error found.
//!
//! This crate provides the binary's pieces: the command-line interface, the interactive shell and
//! its configuration. The scanner and recognizer live in `exprcheck_syntax` and are re-exported
//! here.
//!
//! ## Panic Policy
//!
//! A rejected line is an ordinary result, never a panic. Commands and the shell return `Result`
//! and propagate with `?`; the `cli` module denies `clippy::unwrap_used` and `clippy::expect_used`.
//! Registry lookups that cannot fail for a valid id use `.expect("INVARIANT: ...")`. Tests may
//! unwrap freely.

pub mod cli;
pub mod config;
pub mod repl;
pub mod version;

pub use exprcheck_syntax::{check, diagnostics, lexer, parser};

pub use config::ShellConfig;
pub use repl::{Repl, ReplError, SessionSummary};
