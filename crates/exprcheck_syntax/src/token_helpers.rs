//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy
//! to work with ID-based tokens.

use crate::lexer::{Token, TokenKind};
use exprcheck_core::lang::keywords::KeywordId;
use exprcheck_core::lang::operators::OperatorId;
use exprcheck_core::lang::punctuation::PunctuationId;

impl TokenKind {
    /// Return `true` if this is the given reserved word.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return the operator id, if this is an operator token.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    /// Return `true` if this is the end-of-input marker.
    pub fn is_end(&self) -> bool {
        matches!(self, TokenKind::End)
    }

    /// Return `true` if this token can stand alone as a `PRIMARY` value.
    pub fn is_literal_or_ident(&self) -> bool {
        matches!(
            self,
            TokenKind::Keyword(KeywordId::Null) | TokenKind::Number | TokenKind::String | TokenKind::Ident
        )
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.operator_id()`.
    pub fn operator_id(&self) -> Option<OperatorId> {
        self.kind.operator_id()
    }

    /// Convenience wrapper for `self.kind.is_end()`.
    pub fn is_end(&self) -> bool {
        self.kind.is_end()
    }
}
