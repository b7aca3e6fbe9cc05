/// Token-cursor helpers and tracing.
///
/// This chunk contains the low-level primitives used by the productions:
/// - Peeking/consuming tokens (`peek`, `advance`)
/// - Checking / expecting operators and punctuation
/// - Entering and leaving productions (`production`), which also drives the trace
impl<'a> Parser<'a> {
    // ========================================================================
    // Cursor
    // ========================================================================

    /// Return `true` if the current token is [`TokenKind::End`].
    fn is_at_end(&self) -> bool {
        self.peek().is_end()
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &'a Token {
        &self.tokens[self.pos]
    }

    /// Consume the current token. The cursor never moves past `END`.
    fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    /// Return `true` if the current token is the given operator.
    fn check_op(&self, id: OperatorId) -> bool {
        self.peek().kind.is_operator(id)
    }

    /// Return `true` if the current token is the given punctuation.
    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().kind.is_punctuation(id)
    }

    /// Consume the current token if it has kind `expected`, otherwise fail.
    ///
    /// This is the grammar's terminal match: a successful match is traced, a failed one names
    /// the expected and the actual kind.
    fn expect(&mut self, expected: TokenKind) -> Result<&'a Token, SyntaxError> {
        let current = self.peek();
        if current.kind != expected {
            return Err(SyntaxError::mismatch(expected, current, self.pos, self.innermost()));
        }
        self.advance();
        self.emit(format!("match {} '{}'", current.kind, current.lexeme));
        Ok(current)
    }

    fn expect_op(&mut self, id: OperatorId) -> Result<&'a Token, SyntaxError> {
        self.expect(TokenKind::Operator(id))
    }

    fn expect_punct(&mut self, id: PunctuationId) -> Result<&'a Token, SyntaxError> {
        self.expect(TokenKind::Punctuation(id))
    }

    // ========================================================================
    // Productions and trace
    // ========================================================================

    /// Run `body` as production `which`, tracing entry and (successful) exit.
    ///
    /// Nesting is unbounded; the stack grows as needed.
    fn production(&mut self, which: Production, body: impl FnOnce(&mut Self) -> ParseResult) -> ParseResult {
        crate::stack::ensure_sufficient_stack(move || {
            self.emit(format!("> {which}"));
            self.active.push(which);
            body(self)?;
            self.active.pop();
            self.emit(format!("< {which}"));
            Ok(())
        })
    }

    /// The production currently being recognized.
    fn innermost(&self) -> Production {
        self.active.last().copied().unwrap_or(Production::Statement)
    }

    fn emit(&mut self, line: String) {
        let line = format!("{}{line}", TRACE_INDENT.repeat(self.active.len()));
        tracing::trace!(target: "exprcheck_syntax::parser", "{line}");
        if let Some(lines) = self.trace.as_mut() {
            lines.push(line);
        }
    }
}
