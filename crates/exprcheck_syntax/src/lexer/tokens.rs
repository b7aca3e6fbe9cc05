//! Token types for the scanner.
//!
//! Fixed tokens carry **registry-backed IDs** (`Operator(OperatorId)`,
//! `Punctuation(PunctuationId)`, `Keyword(KeywordId)`); variable tokens carry their text in the
//! token's lexeme.
//!
//! ## Notes
//! - `Display` for [`TokenKind`] prints the label used in traces and diagnostics (`MAS`, `ID`,
//!   `PARENTESIS_CERRAR`, `END`, ...).
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use std::fmt;

use crate::span::Span;
use exprcheck_core::lang::keywords::{self, KeywordId};
use exprcheck_core::lang::operators::{self, OperatorId};
use exprcheck_core::lang::punctuation::{self, PunctuationId};
use exprcheck_core::lang::{Symbol, labels};

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Operator / punctuation / reserved word (ID-based) ==========
    Operator(OperatorId),
    Punctuation(PunctuationId),
    Keyword(KeywordId),

    // ========== Identifiers and Literals ==========
    Ident,
    Number,
    String,

    // ========== Special ==========
    /// Synthetic end-of-input marker; always the last token of a scanned sequence.
    End,
}

impl TokenKind {
    /// The `null` literal.
    pub const NULL: TokenKind = TokenKind::Keyword(KeywordId::Null);

    /// Label printed for this kind in traces and diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            TokenKind::Operator(id) => operators::label(*id),
            TokenKind::Punctuation(id) => punctuation::label(*id),
            TokenKind::Keyword(id) => keywords::label(*id),
            TokenKind::Ident => labels::IDENT,
            TokenKind::Number => labels::NUMBER,
            TokenKind::String => labels::STRING,
            TokenKind::End => labels::END,
        }
    }
}

impl From<Symbol> for TokenKind {
    fn from(symbol: Symbol) -> Self {
        match symbol {
            Symbol::Operator(id) => TokenKind::Operator(id),
            Symbol::Punctuation(id) => TokenKind::Punctuation(id),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A token with its kind, source text and source span.
///
/// ## Notes
/// - For `String` tokens the lexeme excludes the quotes while the span covers them.
/// - The `End` token has an empty lexeme and an empty span at the end of the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// Construct the end-of-input marker for a source of `source_len` bytes.
    pub fn end(source_len: usize) -> Self {
        Self::new(TokenKind::End, "", Span::point(source_len))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({}, '{}')", self.kind, self.lexeme)
    }
}

/// Resolve an identifier spelling to a reserved word id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
