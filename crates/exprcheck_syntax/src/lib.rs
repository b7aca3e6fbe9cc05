//! Syntax front end for exprcheck: scanner, recognizer, diagnostics.
//!
//! A line of text is checked in two stages that only share the token sequence:
//! [`lexer::scan`] turns the text into tokens terminated by a single `END` marker, and
//! [`parser::parse`] walks those tokens against the fixed expression grammar with one token of
//! lookahead. The answer is either acceptance or the first defect found.
//!
//! ## Notes
//! - This crate is recognition-only: no syntax tree is built and nothing is evaluated.
//! - Vocabulary identity (operators/punctuation/reserved words) comes from `exprcheck_core::lang`.
//!
//! ## Examples
//! ```rust
//! use exprcheck_syntax::{lexer, parser};
//!
//! let tokens = lexer::scan("f(1, x = 2);").unwrap();
//! assert!(parser::parse(&tokens).is_ok());
//! ```

pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod span;
mod stack;
pub mod token_helpers;

pub use diagnostics::{CheckError, ErrorKind, LexError, SyntaxError};
pub use lexer::{Token, TokenKind};
pub use span::Span;

/// Scan and recognize one line of text.
///
/// Returns the scanned token sequence when the line is accepted. A lexical failure
/// short-circuits: the recognizer never sees a partial token sequence.
///
/// ## Errors
/// - [`CheckError::Lex`] when scanning fails.
/// - [`CheckError::Syntax`] when the tokens do not form a `STATEMENT`.
pub fn check(source: &str) -> Result<Vec<Token>, CheckError> {
    let tokens = lexer::scan(source)?;
    parser::parse(&tokens)?;
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_accepts_and_returns_tokens() {
        let tokens = check("3 + 4 * 2;").unwrap();
        assert_eq!(tokens.len(), 7);
        assert!(tokens.last().unwrap().kind.is_end());
    }

    #[test]
    fn test_check_lexical_error_short_circuits() {
        let err = check("1 + $").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Lexical);
        assert!(matches!(err, CheckError::Lex(LexError::UnexpectedChar { ch: '$', .. })));
    }

    #[test]
    fn test_check_syntax_error() {
        let err = check("1 2").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax);
        assert!(err.to_string().contains("input not fully consumed"));
    }
}
