//! Reserved word vocabulary.
//!
//! The language reserves a single word, `null`. It is still modelled as a registry so the
//! scanner resolves spellings the same way it does for operators and punctuation.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**: `Null` and `NULL` are identifiers.
//!
//! ## Examples
//! ```rust
//! use exprcheck_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("null"), Some(KeywordId::Null));
//! assert_eq!(keywords::from_str("nulls"), None);
//! ```

/// Stable identifier for every reserved word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    Null,
}

/// Metadata for a reserved word.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    /// Token kind label used in diagnostics.
    pub label: &'static str,
}

/// Registry of all reserved words.
pub const KEYWORDS: &[KeywordInfo] = &[KeywordInfo {
    id: KeywordId::Null,
    canonical: "null",
    label: "NULL",
}];

/// Return the canonical spelling for a reserved word.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Return the diagnostic label for a reserved word.
pub fn label(id: KeywordId) -> &'static str {
    info_for(id).label
}

/// Return the full metadata entry for a reserved word.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS
        .iter()
        .find(|k| k.id == id)
        .expect("INVARIANT: keyword info missing")
}

/// Resolve an identifier spelling to a reserved word, if it is one.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}
