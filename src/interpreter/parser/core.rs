use crate::{
    ast::Expr,
    error::SyntaxError,
    interpreter::{lexer::Token, parser::binary::parse_comparison},
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Parses a complete expression from a statement's token span.
///
/// This is the entry point for expression parsing. The span holds exactly
/// the tokens between the statement's punctuation — everything must be
/// consumed, so `print 1 2;` or a chained comparison like `1 < 2 < 3` fails
/// with a trailing-token error rather than silently ignoring the rest.
///
/// Grammar: `expression := comparison`
///
/// # Parameters
/// - `span`: The `(Token, line)` pairs making up the expression.
/// - `line`: The statement's line, used when the span itself carries no
///   position (empty span, end of span).
///
/// # Returns
/// The parsed expression tree.
///
/// # Errors
/// - `MissingExpression` if the span is empty.
/// - `UnexpectedTrailingTokens` if tokens remain after a full expression.
/// - Propagates any errors from the precedence levels below.
///
/// # Example
/// ```
/// use skit::interpreter::{lexer::lex_line, parser::core::parse_expression};
///
/// let tokens = lex_line("1 + 2 * 3", 1).unwrap();
/// let expr = parse_expression(&tokens, 1).unwrap();
///
/// assert_eq!(expr.line_number(), 1);
/// ```
pub fn parse_expression(span: &[(Token, usize)], line: usize) -> ParseResult<Expr> {
    if span.is_empty() {
        return Err(SyntaxError::MissingExpression { line });
    }

    let mut tokens = span.iter().peekable();
    let expr = parse_comparison(&mut tokens, line)?;

    if let Some((token, line)) = tokens.peek() {
        return Err(SyntaxError::UnexpectedTrailingTokens { token: format!("{token:?}"),
                                                           line:  *line, });
    }

    Ok(expr)
}
