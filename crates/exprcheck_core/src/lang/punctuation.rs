//! Punctuation vocabulary.
//!
//! Grouping delimiters and separators: `(`, `)`, `,` and `;`.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and exact.
//! - This module is vocabulary only (spellings + labels). It does not tokenize source text.
//!
//! ## Examples
//! ```rust
//! use exprcheck_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str(")"), Some(PunctuationId::RParen));
//! assert_eq!(punctuation::label(PunctuationId::RParen), "PARENTESIS_CERRAR");
//! ```

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    LParen,
    RParen,
    Comma,
    Semicolon,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    /// Token kind label used in diagnostics.
    pub label: &'static str,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    // Delimiters
    info(PunctuationId::LParen, "(", "PARENTESIS_ABRIR"),
    info(PunctuationId::RParen, ")", "PARENTESIS_CERRAR"),
    // Separator and terminator
    info(PunctuationId::Comma, ",", "COMA"),
    info(PunctuationId::Semicolon, ";", "PUNTO_COMA"),
];

/// Return the canonical spelling for a punctuation token.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Return the diagnostic label for a punctuation token.
pub fn label(id: PunctuationId) -> &'static str {
    info_for(id).label
}

/// Return the full metadata entry for a punctuation token.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .expect("INVARIANT: punctuation info missing")
}

/// Resolve a punctuation spelling to its identifier.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}

const fn info(id: PunctuationId, canonical: &'static str, label: &'static str) -> PunctuationInfo {
    PunctuationInfo { id, canonical, label }
}
