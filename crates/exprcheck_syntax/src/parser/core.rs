/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type, the [`Production`] names used in traces and
/// diagnostics, and the top-level `parse()` entrypoints.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser`.
type ParseResult = Result<(), SyntaxError>;

/// Indentation added per production nesting level in trace lines.
pub const TRACE_INDENT: &str = "  ";

/// One grammar production (left-hand side).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Production {
    Statement,
    SemicolonOpc,
    Expression,
    Assignment,
    AssignmentOpc,
    Term,
    TermPrime,
    Factor,
    FactorPrime,
    Unary,
    Call,
    CallPrime,
    Primary,
    Arguments,
    ArgumentsPrime,
}

impl Production {
    /// Grammar name of the production.
    pub fn as_str(&self) -> &'static str {
        match self {
            Production::Statement => "STATEMENT",
            Production::SemicolonOpc => "SEMICOLON_OPC",
            Production::Expression => "EXPRESSION",
            Production::Assignment => "ASSIGNMENT",
            Production::AssignmentOpc => "ASSIGNMENT_OPC",
            Production::Term => "TERM",
            Production::TermPrime => "TERM'",
            Production::Factor => "FACTOR",
            Production::FactorPrime => "FACTOR'",
            Production::Unary => "UNARY",
            Production::Call => "CALL",
            Production::CallPrime => "CALL'",
            Production::Primary => "PRIMARY",
            Production::Arguments => "ARGUMENTS",
            Production::ArgumentsPrime => "ARGUMENTS'",
        }
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recognizer state.
///
/// ## Notes
/// - The cursor (`pos`) only moves forward; a consumed token is never re-examined.
/// - `active` is the chain of productions currently being recognized; its length is the trace
///   nesting depth.
/// - A parser is single-use: `parse` consumes it.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    active: Vec<Production>,
    trace: Option<Vec<String>>,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token sequence.
    ///
    /// ## Parameters
    /// - `tokens`: Token sequence produced by `exprcheck_syntax::lexer`.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            active: Vec::new(),
            trace: None,
        }
    }

    /// Collect trace lines in addition to emitting them as `tracing` events.
    pub fn with_trace(mut self) -> Self {
        self.trace = Some(Vec::new());
        self
    }

    /// Recognize the token sequence as a single `STATEMENT` followed by `END`.
    ///
    /// ## Errors
    /// Returns the first [`SyntaxError`] encountered; there is no recovery.
    pub fn parse(mut self) -> ParseResult {
        self.run()
    }

    /// Like [`Parser::parse`], also returning the trace lines collected so far.
    ///
    /// Lines are only collected when the parser was built [`with_trace`](Parser::with_trace).
    pub fn parse_traced(mut self) -> (ParseResult, Vec<String>) {
        let result = self.run();
        (result, self.trace.take().unwrap_or_default())
    }

    fn run(&mut self) -> ParseResult {
        self.check_end_marker()?;
        self.statement()?;

        if !self.is_at_end() {
            return Err(SyntaxError::trailing_input(self.peek(), self.pos));
        }
        Ok(())
    }

    /// The sequence must end with its only `END` token, so lookahead never runs past it.
    fn check_end_marker(&self) -> ParseResult {
        match self.tokens.split_last() {
            Some((last, rest)) if last.is_end() && !rest.iter().any(Token::is_end) => Ok(()),
            _ => Err(SyntaxError::MissingEnd),
        }
    }
}
