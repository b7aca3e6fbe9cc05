//! Diagnostics for the scanner and the recognizer.
//!
//! The two stages fail in disjoint ways: [`LexError`] from scanning and [`SyntaxError`] from
//! recognition. [`CheckError`] joins them for callers that run both stages on one line.
//! Every diagnostic is terminal for the line it was raised on and carries no state across lines.
//!
//! All three types implement [`miette::Diagnostic`], so a caller can render them against the
//! source line with [`render`].

use std::fmt;

use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme, SourceSpan};
use thiserror::Error;

use crate::lexer::{Token, TokenKind};
use crate::parser::Production;

/// Which stage rejected a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Lexical,
    Syntax,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Lexical => write!(f, "lexical error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
        }
    }
}

// ============================================================================
// Lexical errors
// ============================================================================

/// A scanning failure. Scanning stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum LexError {
    #[error("unexpected character '{ch}'")]
    #[diagnostic(code(exprcheck::lex::unexpected_char))]
    UnexpectedChar {
        ch: char,
        #[label("not part of the expression language")]
        span: SourceSpan,
    },

    #[error("unterminated string")]
    #[diagnostic(
        code(exprcheck::lex::unterminated_string),
        help("close the string with a double quote; escape sequences are not supported")
    )]
    UnterminatedString {
        #[label("string starts here and runs to the end of the line")]
        span: SourceSpan,
    },

    /// An invariant breach inside the scanner, reported instead of panicking.
    #[error("unexpected internal scanner fault: {message}")]
    #[diagnostic(code(exprcheck::lex::internal))]
    Internal { message: String },
}

impl LexError {
    pub fn internal(message: impl Into<String>) -> Self {
        LexError::Internal {
            message: message.into(),
        }
    }
}

// ============================================================================
// Syntax errors
// ============================================================================

/// A recognition failure. Recognition stops at the first one.
///
/// Token-carrying variants record the offending token's kind and lexeme, its index in the token
/// sequence (`position`) and its source span.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SyntaxError {
    #[error("expected {expected}, found {found}")]
    #[diagnostic(code(exprcheck::syntax::mismatch))]
    Mismatch {
        expected: TokenKind,
        found: TokenKind,
        lexeme: String,
        position: usize,
        production: Production,
        #[label("expected {expected} while recognizing {production}")]
        span: SourceSpan,
    },

    #[error("expected a primary value, found {found}")]
    #[diagnostic(
        code(exprcheck::syntax::expected_primary),
        help("a primary value is null, a number, a string, an identifier or a parenthesized expression")
    )]
    ExpectedPrimary {
        found: TokenKind,
        lexeme: String,
        position: usize,
        production: Production,
        #[label("while recognizing {production}")]
        span: SourceSpan,
    },

    #[error("input not fully consumed: found {found} after a complete statement")]
    #[diagnostic(code(exprcheck::syntax::trailing_input))]
    TrailingInput {
        found: TokenKind,
        lexeme: String,
        position: usize,
        #[label("unexpected trailing input")]
        span: SourceSpan,
    },

    #[error("token sequence is missing its END marker")]
    #[diagnostic(code(exprcheck::syntax::missing_end))]
    MissingEnd,
}

impl SyntaxError {
    pub(crate) fn mismatch(expected: TokenKind, found: &Token, position: usize, production: Production) -> Self {
        SyntaxError::Mismatch {
            expected,
            found: found.kind,
            lexeme: found.lexeme.clone(),
            position,
            production,
            span: found.span.into(),
        }
    }

    pub(crate) fn expected_primary(found: &Token, position: usize, production: Production) -> Self {
        SyntaxError::ExpectedPrimary {
            found: found.kind,
            lexeme: found.lexeme.clone(),
            position,
            production,
            span: found.span.into(),
        }
    }

    pub(crate) fn trailing_input(found: &Token, position: usize) -> Self {
        SyntaxError::TrailingInput {
            found: found.kind,
            lexeme: found.lexeme.clone(),
            position,
            span: found.span.into(),
        }
    }

    /// Index of the offending token in the token sequence, if the error is tied to one.
    pub fn position(&self) -> Option<usize> {
        match self {
            SyntaxError::Mismatch { position, .. }
            | SyntaxError::ExpectedPrimary { position, .. }
            | SyntaxError::TrailingInput { position, .. } => Some(*position),
            SyntaxError::MissingEnd => None,
        }
    }

    /// Kind of the offending token, if the error is tied to one.
    pub fn found(&self) -> Option<TokenKind> {
        match self {
            SyntaxError::Mismatch { found, .. }
            | SyntaxError::ExpectedPrimary { found, .. }
            | SyntaxError::TrailingInput { found, .. } => Some(*found),
            SyntaxError::MissingEnd => None,
        }
    }
}

// ============================================================================
// Combined
// ============================================================================

/// Failure of either stage when checking one line.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum CheckError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] SyntaxError),
}

impl CheckError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CheckError::Lex(_) => ErrorKind::Lexical,
            CheckError::Syntax(_) => ErrorKind::Syntax,
        }
    }
}

/// Render a diagnostic against the line it was raised on, without colors.
///
/// The output names the stage, the message, and points at the offending span of `source`.
pub fn render<D>(source: &str, error: &D) -> String
where
    D: Diagnostic + Clone + Send + Sync + 'static,
{
    let report = miette::Report::new(error.clone()).with_source_code(source.to_string());
    let mut out = String::new();
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
    if handler.render_report(&mut out, &*report).is_err() {
        // Fall back to the bare message; a rendering failure must not hide the diagnostic.
        return error.to_string();
    }
    out
}
