//! Vocabulary registries.
//!
//! Callers work with **stable IDs** (`OperatorId`, `PunctuationId`, `KeywordId`) and look up
//! spellings and labels via the registry tables, instead of comparing strings at every call site.
//!
//! ## Examples
//! ```rust
//! use exprcheck_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("+"), Some(OperatorId::Plus));
//! assert_eq!(operators::label(OperatorId::Plus), "MAS");
//! ```

pub mod keywords;
pub mod labels;
pub mod operators;
pub mod punctuation;

/// A fixed token resolved from a single source character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Operator(operators::OperatorId),
    Punctuation(punctuation::PunctuationId),
}

/// Resolve a single character to an operator or punctuation symbol.
///
/// Every fixed symbol in this language is exactly one character long, so the scanner never
/// needs to look further ahead than the current character.
pub fn symbol_for_char(c: char) -> Option<Symbol> {
    let mut buf = [0u8; 4];
    let spelling = c.encode_utf8(&mut buf);
    if let Some(id) = operators::from_str(spelling) {
        return Some(Symbol::Operator(id));
    }
    punctuation::from_str(spelling).map(Symbol::Punctuation)
}
