use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::SyntaxError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_comparison, core::ParseResult},
        statement::is_reserved_identifier,
        value::Value,
    },
};

/// Parses a unary expression.
///
/// The only prefix operator is `-` (numeric negation). It is
/// right-associative, so `--x` parses as `-(-x)`. If no operator is
/// present, the function delegates to [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `line`: Fallback line for end-of-input errors.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Op('-'), line)) = tokens.peek() {
        let line = *line;
        tokens.next();
        let expr = parse_unary(tokens, line)?;
        return Ok(Expr::UnaryOp { op:   UnaryOperator::Negate,
                                  expr: Box::new(expr),
                                  line, });
    }

    parse_primary(tokens, line)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - numeric and string literals
/// - variable references
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | STRING
///              | identifier
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
/// - `line`: Fallback line for end-of-input errors.
///
/// # Returns
/// The parsed primary [`Expr`] or a `SyntaxError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(SyntaxError::UnexpectedEndOfInput { line })?;

    match peeked {
        (Token::Number(..) | Token::Str(..), _) => parse_literal(tokens, line),
        (Token::Ident(_), _) => parse_variable(tokens, line),
        (Token::Op('('), _) => parse_grouping(tokens, line),
        (token, line) => Err(SyntaxError::UnexpectedToken { token: format!("{token:?}"),
                                                            line:  *line, }),
    }
}

fn parse_literal<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(n), line)) => Ok(Expr::Literal { value: Value::Number(*n),
                                                             line:  *line, }),

        Some((Token::Str(s), line)) => Ok(Expr::Literal { value: Value::Str(s.clone()),
                                                          line:  *line, }),

        Some((token, line)) => Err(SyntaxError::UnexpectedToken { token: format!("{token:?}"),
                                                                  line:  *line, }),

        None => Err(SyntaxError::UnexpectedEndOfInput { line }),
    }
}

/// Reserved identifiers never reach the environment, so a keyword in
/// expression position fails here rather than as an unknown variable later.
fn parse_variable<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Ident(name), line)) => {
            if is_reserved_identifier(name) {
                return Err(SyntaxError::IdentifierReserved { name: name.clone(),
                                                             line: *line, });
            }
            Ok(Expr::Variable { name: name.clone(),
                                line: *line, })
        },

        Some((token, line)) => Err(SyntaxError::UnexpectedToken { token: format!("{token:?}"),
                                                                  line:  *line, }),

        None => Err(SyntaxError::UnexpectedEndOfInput { line }),
    }
}

fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = match tokens.next() {
        Some((_, l)) => *l,
        None => line,
    };

    let expr = parse_comparison(tokens, line)?;

    match tokens.next() {
        Some((Token::Op(')'), _)) => Ok(expr),
        Some((_, l)) => Err(SyntaxError::ExpectedClosingParen { line: *l }),
        None => Err(SyntaxError::ExpectedClosingParen { line }),
    }
}
