//! Operator vocabulary.
//!
//! This module defines the operator set (`+ - * / % =`) with its diagnostic labels.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and exact; there are no multi-character
//!   operators.
//! - Binding strength is not recorded here. It lives in the recognizer's production ladder
//!   (`ASSIGNMENT` → `TERM` → `FACTOR` → `UNARY`).
//!
//! ## Examples
//! ```rust
//! use exprcheck_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("%"), Some(OperatorId::Percent));
//! assert_eq!(operators::label(OperatorId::Star), "MULT");
//! ```

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    // Assignment
    Eq,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    /// Token kind label used in diagnostics.
    pub label: &'static str,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Arithmetic
    op(OperatorId::Plus, "+", "MAS"),
    op(OperatorId::Minus, "-", "MENOS"),
    op(OperatorId::Star, "*", "MULT"),
    op(OperatorId::Slash, "/", "DIV"),
    op(OperatorId::Percent, "%", "MOD"),
    // Assignment
    op(OperatorId::Eq, "=", "IGUAL"),
];

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS
        .iter()
        .find(|o| o.id == id)
        .expect("INVARIANT: operator info missing")
}

/// Return the source spelling for an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Return the diagnostic label for an operator.
pub fn label(id: OperatorId) -> &'static str {
    info_for(id).label
}

/// Resolve an operator spelling to its identifier.
///
/// ## Returns
/// - `Some(OperatorId)` if the spelling exists in [`OPERATORS`].
/// - `None` otherwise.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

// --- helpers -----------------------------------------------------------------

const fn op(id: OperatorId, spelling: &'static str, label: &'static str) -> OperatorInfo {
    OperatorInfo { id, spelling, label }
}
