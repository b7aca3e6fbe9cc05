/// Recognize a token sequence as one `STATEMENT` followed by `END`.
///
/// This is the main public entrypoint for recognition.
///
/// ## Parameters
/// - `tokens`: Token sequence produced by `exprcheck_syntax::lexer`.
///
/// ## Errors
/// Returns the first [`SyntaxError`] encountered.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<(), SyntaxError> {
    let result = Parser::new(tokens).parse();
    if let Err(err) = &result {
        tracing::debug!(%err, "recognition failed");
    }
    result
}

/// Recognize a token sequence and return the outcome with its production trace.
///
/// The trace holds one line per production entry (`> NAME`), successful exit (`< NAME`) and
/// terminal match (`match KIND 'lexeme'`), indented by nesting depth.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse_traced(tokens: &[Token]) -> (Result<(), SyntaxError>, Vec<String>) {
    Parser::new(tokens).with_trace().parse_traced()
}
