//! Interactive shell: one line in, one verdict out.
//!
//! Each cycle writes the prompt, reads a line, trims it, and either ends the session (exit word or
//! end of input) or checks the line. Every line gets a fresh scanner and recognizer; a rejected
//! line is reported and the loop continues.
//!
//! The shell is generic over [`BufRead`] and [`Write`] so sessions can be driven from memory in
//! tests. Interrupts (Ctrl-C) use the default process signal handling.

use std::fmt::Write as _;
use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::debug;

use exprcheck_syntax::diagnostics::{self, ErrorKind};
use exprcheck_syntax::{Token, lexer, parser};
use miette::Diagnostic;

use crate::config::ShellConfig;
use crate::version::EXPRCHECK_VERSION;

/// Failure of the session itself. Diagnosed lines are not errors at this level.
#[derive(Debug, Error)]
pub enum ReplError {
    #[error("failed to read input line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("failed to write shell output: {0}")]
    Write(#[from] io::Error),
}

/// Verdict for one processed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Accepted,
    LexicalError,
    SyntaxError,
}

/// Counts collected over a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Lines checked (exit words are not counted)
    pub lines: usize,
    pub accepted: usize,
    pub lexical_errors: usize,
    pub syntax_errors: usize,
}

impl SessionSummary {
    fn record(&mut self, outcome: LineOutcome) {
        self.lines += 1;
        match outcome {
            LineOutcome::Accepted => self.accepted += 1,
            LineOutcome::LexicalError => self.lexical_errors += 1,
            LineOutcome::SyntaxError => self.syntax_errors += 1,
        }
    }

    /// Lines rejected by either stage.
    pub fn rejected(&self) -> usize {
        self.lexical_errors + self.syntax_errors
    }
}

/// The interactive shell.
pub struct Repl<R, W> {
    input: R,
    output: W,
    config: ShellConfig,
    summary: SessionSummary,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(input: R, output: W, config: ShellConfig) -> Self {
        Self {
            input,
            output,
            config,
            summary: SessionSummary::default(),
        }
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn summary(&self) -> SessionSummary {
        self.summary
    }

    /// Release the output sink (used by tests to inspect what was written).
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the read-check-print loop until an exit word or end of input.
    pub fn run(&mut self) -> Result<SessionSummary, ReplError> {
        debug!(prompt = %self.config.prompt, trace = self.config.trace, "shell started");
        self.write_banner()?;

        loop {
            write!(self.output, "{}", self.config.prompt)?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self.input.read_line(&mut line).map_err(|source| ReplError::Read {
                line: self.summary.lines + 1,
                source,
            })?;

            if read == 0 {
                debug!("end of input");
                writeln!(self.output)?;
                writeln!(self.output, "Exiting...")?;
                break;
            }

            if self.config.is_exit_word(&line) {
                debug!(word = line.trim(), "exit word");
                writeln!(self.output, "Terminating...")?;
                break;
            }

            self.process_line(&line)?;
        }

        debug!(
            lines = self.summary.lines,
            accepted = self.summary.accepted,
            rejected = self.summary.rejected(),
            "shell finished"
        );
        Ok(self.summary)
    }

    /// Check one line and print the result. The line is trimmed first.
    pub fn process_line(&mut self, line: &str) -> Result<LineOutcome, ReplError> {
        let line = line.trim();

        let tokens = match lexer::scan(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                debug!(error = %err, "line rejected by scanner");
                if self.config.show_tokens {
                    writeln!(self.output, "TOKENS: none")?;
                }
                self.write_diagnostic(ErrorKind::Lexical, line, &err)?;
                return Ok(self.finish(LineOutcome::LexicalError));
            }
        };

        if self.config.show_tokens {
            writeln!(self.output, "TOKENS: {}", format_tokens(&tokens))?;
        }

        let result = if self.config.trace {
            let (result, trace) = parser::parse_traced(&tokens);
            for entry in &trace {
                writeln!(self.output, "{entry}")?;
            }
            result
        } else {
            parser::parse(&tokens)
        };

        let outcome = match result {
            Ok(()) => {
                writeln!(self.output, "valid")?;
                LineOutcome::Accepted
            }
            Err(err) => {
                debug!(error = %err, "line rejected by recognizer");
                self.write_diagnostic(ErrorKind::Syntax, line, &err)?;
                LineOutcome::SyntaxError
            }
        };
        Ok(self.finish(outcome))
    }

    /// Write the stage heading, then the diagnostic drawn against the line it was raised on.
    fn write_diagnostic<D>(&mut self, kind: ErrorKind, line: &str, err: &D) -> io::Result<()>
    where
        D: Diagnostic + Clone + Send + Sync + 'static,
    {
        writeln!(self.output, "{kind}")?;
        writeln!(self.output, "{}", diagnostics::render(line, err).trim_end())
    }

    fn finish(&mut self, outcome: LineOutcome) -> LineOutcome {
        self.summary.record(outcome);
        outcome
    }

    fn write_banner(&mut self) -> io::Result<()> {
        match self.config.exit_words.first() {
            Some(word) => writeln!(self.output, "exprcheck {EXPRCHECK_VERSION}: type '{word}' to quit.")?,
            None => writeln!(self.output, "exprcheck {EXPRCHECK_VERSION}: press Ctrl-D to quit.")?,
        }
        writeln!(self.output)
    }
}

/// Render a token sequence the way the shell lists it: `[Token(KIND, 'lexeme'), ...]`.
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut out = String::from("[");
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{token}");
    }
    out.push(']');
    out
}
