/// Grammar productions.
///
/// One method per left-hand side, in grammar order. Each method chooses its branch from the
/// current token alone and never backtracks; `ε` branches simply return without consuming.
impl<'a> Parser<'a> {
    // STATEMENT -> EXPRESSION SEMICOLON_OPC
    fn statement(&mut self) -> ParseResult {
        self.production(Production::Statement, |p| {
            p.expression()?;
            p.semicolon_opc()
        })
    }

    // SEMICOLON_OPC -> ';' | ε
    fn semicolon_opc(&mut self) -> ParseResult {
        self.production(Production::SemicolonOpc, |p| {
            if p.check_punct(PunctuationId::Semicolon) {
                p.expect_punct(PunctuationId::Semicolon)?;
            }
            Ok(())
        })
    }

    // EXPRESSION -> ASSIGNMENT
    fn expression(&mut self) -> ParseResult {
        self.production(Production::Expression, |p| p.assignment())
    }

    // ASSIGNMENT -> TERM ASSIGNMENT_OPC
    fn assignment(&mut self) -> ParseResult {
        self.production(Production::Assignment, |p| {
            p.term()?;
            p.assignment_opc()
        })
    }

    // ASSIGNMENT_OPC -> '=' EXPRESSION | ε
    fn assignment_opc(&mut self) -> ParseResult {
        self.production(Production::AssignmentOpc, |p| {
            if p.check_op(OperatorId::Eq) {
                p.expect_op(OperatorId::Eq)?;
                p.expression()?;
            }
            Ok(())
        })
    }

    // TERM -> FACTOR TERM'
    fn term(&mut self) -> ParseResult {
        self.production(Production::Term, |p| {
            p.factor()?;
            p.term_prime()
        })
    }

    // TERM' -> ('+' | '-') TERM | ε
    fn term_prime(&mut self) -> ParseResult {
        self.production(Production::TermPrime, |p| {
            if let Some(id @ (OperatorId::Plus | OperatorId::Minus)) = p.peek().operator_id() {
                p.expect_op(id)?;
                p.term()?;
            }
            Ok(())
        })
    }

    // FACTOR -> UNARY FACTOR'
    fn factor(&mut self) -> ParseResult {
        self.production(Production::Factor, |p| {
            p.unary()?;
            p.factor_prime()
        })
    }

    // FACTOR' -> ('/' | '*' | '%') FACTOR | ε
    fn factor_prime(&mut self) -> ParseResult {
        self.production(Production::FactorPrime, |p| {
            if let Some(id @ (OperatorId::Slash | OperatorId::Star | OperatorId::Percent)) = p.peek().operator_id() {
                p.expect_op(id)?;
                p.factor()?;
            }
            Ok(())
        })
    }

    // UNARY -> '-' UNARY | CALL
    fn unary(&mut self) -> ParseResult {
        self.production(Production::Unary, |p| {
            if p.check_op(OperatorId::Minus) {
                p.expect_op(OperatorId::Minus)?;
                p.unary()
            } else {
                p.call()
            }
        })
    }

    // CALL -> PRIMARY CALL'
    fn call(&mut self) -> ParseResult {
        self.production(Production::Call, |p| {
            p.primary()?;
            p.call_prime()
        })
    }

    // CALL' -> '(' ARGUMENTS ')' | ε
    fn call_prime(&mut self) -> ParseResult {
        self.production(Production::CallPrime, |p| {
            if p.check_punct(PunctuationId::LParen) {
                p.expect_punct(PunctuationId::LParen)?;
                p.arguments()?;
                p.expect_punct(PunctuationId::RParen)?;
            }
            Ok(())
        })
    }

    // PRIMARY -> NULL | NUMBER | STRING | ID | '(' EXPRESSION ')'
    fn primary(&mut self) -> ParseResult {
        self.production(Production::Primary, |p| {
            let kind = p.peek().kind;
            if kind.is_literal_or_ident() {
                p.expect(kind)?;
            } else if kind.is_punctuation(PunctuationId::LParen) {
                p.expect_punct(PunctuationId::LParen)?;
                p.expression()?;
                p.expect_punct(PunctuationId::RParen)?;
            } else {
                return Err(SyntaxError::expected_primary(p.peek(), p.pos, Production::Primary));
            }
            Ok(())
        })
    }

    // ARGUMENTS -> EXPRESSION ARGUMENTS' | ε
    fn arguments(&mut self) -> ParseResult {
        self.production(Production::Arguments, |p| {
            // An immediate `)` is the empty argument list.
            if !p.check_punct(PunctuationId::RParen) {
                p.expression()?;
                p.arguments_prime()?;
            }
            Ok(())
        })
    }

    // ARGUMENTS' -> ',' EXPRESSION ARGUMENTS' | ε
    fn arguments_prime(&mut self) -> ParseResult {
        self.production(Production::ArgumentsPrime, |p| {
            if p.check_punct(PunctuationId::Comma) {
                p.expect_punct(PunctuationId::Comma)?;
                p.expression()?;
                p.arguments_prime()?;
            }
            Ok(())
        })
    }
}
