//! Scanner for the expression language.
//!
//! Handles tokenization of:
//! - Single-character operators and punctuation (`+ - * / % = ( ) , ;`)
//! - Integer literals (ASCII digits only; no sign, point or exponent)
//! - Identifiers and the reserved word `null`
//! - Double-quoted strings (no escape sequences)
//!
//! Whitespace separates tokens and is never emitted. The first unexpected character or an
//! unterminated string stops scanning; no partial token sequence is ever returned.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)

pub mod tokens;

pub use tokens::{Token, TokenKind, keyword_id};

use crate::diagnostics::LexError;
use crate::span::Span;
use exprcheck_core::lang;

/// Scanner for one line of source text.
///
/// The cursor (`current_pos`) is a byte offset that only moves forward and never exceeds the
/// source length. A scanner is consumed by [`Scanner::scan`].
pub struct Scanner<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source.
    ///
    /// On success the token sequence ends with exactly one `End` token.
    ///
    /// ## Errors
    /// Returns the first [`LexError`] encountered.
    pub fn scan(mut self) -> Result<Vec<Token>, LexError> {
        while !self.is_at_end() {
            self.scan_token()?;
        }

        self.tokens.push(Token::end(self.current_pos));
        Ok(self.tokens)
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    /// Consume characters while `pred` holds.
    fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.advance();
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) -> Result<(), LexError> {
        let start = self.current_pos;

        let Some(c) = self.advance() else {
            return Err(LexError::internal(format!(
                "cursor ran past the end of input at byte {start} of {}",
                self.source.len()
            )));
        };

        if c.is_whitespace() {
            return Ok(());
        }

        if let Some(symbol) = lang::symbol_for_char(c) {
            self.add_token(symbol.into(), start);
            return Ok(());
        }

        match c {
            '0'..='9' => self.scan_number(start),
            '"' => self.scan_string(start)?,
            _ if is_ident_start(c) => self.scan_identifier(start),
            _ => {
                return Err(LexError::UnexpectedChar {
                    ch: c,
                    span: Span::new(start, self.current_pos).into(),
                });
            }
        }
        Ok(())
    }

    fn add_token(&mut self, kind: TokenKind, start: usize) {
        let lexeme = &self.source[start..self.current_pos];
        self.tokens
            .push(Token::new(kind, lexeme, Span::new(start, self.current_pos)));
    }

    // ========================================================================
    // Literal and identifier scanning
    // ========================================================================

    fn scan_number(&mut self, start: usize) {
        self.advance_while(|c| c.is_ascii_digit());
        self.add_token(TokenKind::Number, start);
    }

    /// Scan a string body after its opening quote. The lexeme excludes both quotes.
    fn scan_string(&mut self, start: usize) -> Result<(), LexError> {
        let body_start = self.current_pos;
        self.advance_while(|c| c != '"');

        if self.is_at_end() {
            return Err(LexError::UnterminatedString {
                span: Span::new(start, self.current_pos).into(),
            });
        }

        let body_end = self.current_pos;
        self.advance(); // closing quote
        self.tokens.push(Token::new(
            TokenKind::String,
            &self.source[body_start..body_end],
            Span::new(start, self.current_pos),
        ));
        Ok(())
    }

    fn scan_identifier(&mut self, start: usize) {
        self.advance_while(is_ident_continue);

        let spelling = &self.source[start..self.current_pos];
        if let Some(id) = keyword_id(spelling) {
            self.add_token(TokenKind::Keyword(id), start);
        } else {
            self.add_token(TokenKind::Ident, start);
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier.
fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier.
fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Convenience function to scan a source string.
///
/// This is a shorthand for `Scanner::new(source).scan()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn scan(source: &str) -> Result<Vec<Token>, LexError> {
    let result = Scanner::new(source).scan();
    match &result {
        Ok(tokens) => tracing::debug!(token_count = tokens.len(), "scanned"),
        Err(err) => tracing::debug!(%err, "scan failed"),
    }
    result
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use exprcheck_core::lang::keywords::KeywordId;
    use exprcheck_core::lang::operators::OperatorId;
    use exprcheck_core::lang::punctuation::PunctuationId;

    fn kinds(source: &str) -> Vec<TokenKind> {
        scan(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_operator_registry_parity() {
        use exprcheck_core::lang::operators;

        for o in operators::OPERATORS {
            let tokens = scan(o.spelling).unwrap_or_else(|err| panic!("scan({:?}) failed: {err}", o.spelling));
            assert_eq!(tokens.len(), 2, "expected token + END for {:?}, got {tokens:?}", o.spelling);
            assert!(tokens[0].kind.is_operator(o.id));
            assert_eq!(tokens[0].lexeme, o.spelling);
            assert!(tokens[1].is_end());
        }
    }

    #[test]
    fn test_punctuation_registry_parity() {
        use exprcheck_core::lang::punctuation;

        for p in punctuation::PUNCTUATION {
            let tokens = scan(p.canonical).unwrap_or_else(|err| panic!("scan({:?}) failed: {err}", p.canonical));
            assert_eq!(tokens.len(), 2, "expected token + END for {:?}, got {tokens:?}", p.canonical);
            assert!(tokens[0].kind.is_punctuation(p.id));
            assert!(tokens[1].is_end());
        }
    }

    #[test]
    fn test_operators_and_punctuation() {
        assert_eq!(
            kinds("+-*/%=(),;"),
            vec![
                TokenKind::Operator(OperatorId::Plus),
                TokenKind::Operator(OperatorId::Minus),
                TokenKind::Operator(OperatorId::Star),
                TokenKind::Operator(OperatorId::Slash),
                TokenKind::Operator(OperatorId::Percent),
                TokenKind::Operator(OperatorId::Eq),
                TokenKind::Punctuation(PunctuationId::LParen),
                TokenKind::Punctuation(PunctuationId::RParen),
                TokenKind::Punctuation(PunctuationId::Comma),
                TokenKind::Punctuation(PunctuationId::Semicolon),
                TokenKind::End,
            ]
        );
    }

    #[test]
    fn test_whitespace_only() {
        for source in ["", " ", "\t\t", "  \n  ", "\u{3000}"] {
            let tokens = scan(source).unwrap();
            assert_eq!(tokens.len(), 1, "{source:?}");
            assert!(tokens[0].is_end());
            assert_eq!(tokens[0].lexeme, "");
            assert_eq!(tokens[0].span, Span::point(source.len()));
        }
    }

    #[test]
    fn test_null_keyword() {
        let tokens = scan("null").unwrap();
        assert!(tokens[0].kind.is_keyword(KeywordId::Null));
        assert_eq!(tokens[0].kind, TokenKind::NULL);
        assert_eq!(tokens[0].lexeme, "null");
    }

    #[test]
    fn test_null_prefix_is_identifier() {
        for source in ["nulls", "null1", "Null", "NULL", "_null"] {
            let tokens = scan(source).unwrap();
            assert_eq!(tokens.len(), 2, "{source:?}");
            assert_eq!(tokens[0].kind, TokenKind::Ident, "{source:?}");
            assert_eq!(tokens[0].lexeme, source);
        }
    }

    #[test]
    fn test_numbers() {
        let tokens = scan("42 007 1").unwrap();
        let lexemes: Vec<_> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
        assert_eq!(lexemes, vec!["42", "007", "1", ""]);
        assert!(tokens[..3].iter().all(|t| t.kind == TokenKind::Number));
    }

    #[test]
    fn test_number_then_identifier_do_not_merge() {
        let tokens = scan("1a").unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!((tokens[0].kind, tokens[0].lexeme.as_str()), (TokenKind::Number, "1"));
        assert_eq!((tokens[1].kind, tokens[1].lexeme.as_str()), (TokenKind::Ident, "a"));
    }

    #[test]
    fn test_no_decimal_point() {
        let err = scan("3.14").unwrap_err();
        assert!(matches!(err, LexError::UnexpectedChar { ch: '.', .. }));
    }

    #[test]
    fn test_identifiers() {
        let tokens = scan("_x foo_bar9 año").unwrap();
        let lexemes: Vec<_> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
        assert_eq!(lexemes, vec!["_x", "foo_bar9", "año", ""]);
        assert!(tokens[..3].iter().all(|t| t.kind == TokenKind::Ident));
    }

    #[test]
    fn test_strings() {
        let tokens = scan(r#""abc""#).unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].lexeme, "abc");
        assert_eq!(tokens[0].span, Span::new(0, 5));
    }

    #[test]
    fn test_string_keeps_spaces_and_backslashes() {
        let tokens = scan(r#""a \n b" "" "#).unwrap();
        assert_eq!(tokens[0].lexeme, r"a \n b");
        assert_eq!(tokens[1].kind, TokenKind::String);
        assert_eq!(tokens[1].lexeme, "");
    }

    #[test]
    fn test_unterminated_string() {
        let err = scan("x = \"abc").unwrap_err();
        assert_eq!(
            err,
            LexError::UnterminatedString {
                span: Span::new(4, 8).into()
            }
        );
    }

    #[test]
    fn test_unexpected_character() {
        let err = scan("a + é$").unwrap_err();
        // `é` is alphabetic, so `$` is the first offending character.
        assert_eq!(
            err,
            LexError::UnexpectedChar {
                ch: '$',
                span: Span::new(6, 7).into()
            }
        );
    }

    #[test]
    fn test_first_error_wins() {
        let err = scan("# \"open").unwrap_err();
        assert!(matches!(err, LexError::UnexpectedChar { ch: '#', .. }));
    }

    #[test]
    fn test_spans_and_end_marker() {
        let tokens = scan("ab + 12").unwrap();
        assert_eq!(tokens[0].span, Span::new(0, 2));
        assert_eq!(tokens[1].span, Span::new(3, 4));
        assert_eq!(tokens[2].span, Span::new(5, 7));
        assert_eq!(tokens[3], Token::end(7));
        assert_eq!(tokens.iter().filter(|t| t.is_end()).count(), 1);
    }

    #[test]
    fn test_token_display() {
        let tokens = scan("x = \"hi\"").unwrap();
        let rendered: Vec<String> = tokens.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec!["Token(ID, 'x')", "Token(IGUAL, '=')", "Token(STRING, 'hi')", "Token(END, '')"]
        );
    }
}
