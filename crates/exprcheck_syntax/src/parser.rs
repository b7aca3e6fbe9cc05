//! Predictive recognizer for the expression grammar.
//!
//! Walks a scanned token sequence against the grammar below with one token of lookahead.
//! Each left-hand side is one production method; `'` marks the right-recursive continuation.
//!
//! ```text
//! STATEMENT      -> EXPRESSION SEMICOLON_OPC
//! SEMICOLON_OPC  -> ';' | ε
//! EXPRESSION     -> ASSIGNMENT
//! ASSIGNMENT     -> TERM ASSIGNMENT_OPC
//! ASSIGNMENT_OPC -> '=' EXPRESSION | ε
//! TERM           -> FACTOR TERM'
//! TERM'          -> ('+' | '-') TERM | ε
//! FACTOR         -> UNARY FACTOR'
//! FACTOR'        -> ('/' | '*' | '%') FACTOR | ε
//! UNARY          -> '-' UNARY | CALL
//! CALL           -> PRIMARY CALL'
//! CALL'          -> '(' ARGUMENTS ')' | ε
//! PRIMARY        -> NULL | NUMBER | STRING | ID | '(' EXPRESSION ')'
//! ARGUMENTS      -> EXPRESSION ARGUMENTS' | ε
//! ARGUMENTS'     -> ',' EXPRESSION ARGUMENTS' | ε
//! ```
//!
//! `TERM'` and `FACTOR'` recurse into their own level, so `+ - * / %` chain to the right.
//!
//! ## Examples
//!
//! ```rust
//! use exprcheck_syntax::{lexer, parser};
//!
//! let tokens = lexer::scan("x = -f(1, \"a\") * 2").unwrap();
//! assert!(parser::parse(&tokens).is_ok());
//!
//! let tokens = lexer::scan("1 2").unwrap();
//! assert!(parser::parse(&tokens).is_err());
//! ```

use std::fmt;

use crate::diagnostics::SyntaxError;
use crate::lexer::{Token, TokenKind};
use exprcheck_core::lang::operators::OperatorId;
use exprcheck_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while keeping the
// grammar productions apart from the cursor plumbing.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/grammar.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
