use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses a comparison expression.
///
/// Handles `<`, `>`, `<=`, `>=`, `==` and `!=`. At most one comparison may
/// appear per expression — the operator does not associate, so a chain like
/// `1 < 2 < 3` leaves its tail unconsumed and the entry point reports it as
/// trailing tokens.
///
/// The rule is: `comparison := additive (cmp_op additive)?`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `line`: Fallback line for end-of-input errors.
///
/// # Returns
/// An `Expr::BinaryOp` comparison node, or the bare additive expression.
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let left = parse_additive(tokens, line)?;

    if let Some((op, op_line)) = comparison_operator(tokens) {
        let right = parse_additive(tokens, op_line)?;
        return Ok(Expr::BinaryOp { left: Box::new(left),
                                   op,
                                   right: Box::new(right),
                                   line: op_line, });
    }

    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `line`: Fallback line for end-of-input errors.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_multiplicative(tokens, line)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let line = *line;
            tokens.next();
            let right = parse_multiplicative(tokens, line)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line, };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*` and `/`.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `line`: Fallback line for end-of-input errors.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_unary(tokens, line)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            let line = *line;
            tokens.next();
            let right = parse_unary(tokens, line)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line, };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its corresponding arithmetic binary operator.
///
/// Returns `Some(BinaryOperator)` for the single-character operators
/// `+ - * /` and `None` for all other tokens. Comparison operators are not
/// single tokens in this language; they are recognized separately by
/// [`comparison_operator`].
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token corresponds to an arithmetic
/// operator, otherwise `None`.
///
/// # Example
/// ```
/// use skit::{ast::BinaryOperator, interpreter::lexer::Token};
/// use skit::interpreter::parser::binary::token_to_binary_operator;
///
/// assert_eq!(token_to_binary_operator(&Token::Op('+')),
///            Some(BinaryOperator::Add));
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Op('+') => Some(BinaryOperator::Add),
        Token::Op('-') => Some(BinaryOperator::Sub),
        Token::Op('*') => Some(BinaryOperator::Mul),
        Token::Op('/') => Some(BinaryOperator::Div),
        _ => None,
    }
}

/// Recognizes and consumes a comparison operator at the cursor.
///
/// The lexer emits only single-character tokens, so the two-character
/// operators arrive as adjacent pairs: `<` `=`, `>` `=`, `=` `=` and `!` `=`.
/// This function merges such a pair into one operator, consuming one or two
/// tokens as needed. A token that opens no comparison — including a lone `=`
/// or `!` — consumes nothing and yields `None`.
///
/// # Returns
/// The operator and the line of its first token, or `None`.
///
/// # Example
/// ```
/// use skit::{ast::BinaryOperator, interpreter::lexer::lex_line};
/// use skit::interpreter::parser::binary::comparison_operator;
///
/// let tokens = lex_line("== 4", 1).unwrap();
/// let mut iter = tokens.iter().peekable();
///
/// assert_eq!(comparison_operator(&mut iter),
///            Some((BinaryOperator::Equal, 1)));
/// ```
pub fn comparison_operator<'a, I>(tokens: &mut Peekable<I>) -> Option<(BinaryOperator, usize)>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();
    let (first, line) = lookahead.next()?;
    let assign_follows = matches!(lookahead.peek(), Some((Token::Assign, _)));

    let (op, width) = match first {
        Token::Op('<') if assign_follows => (BinaryOperator::LessEqual, 2),
        Token::Op('<') => (BinaryOperator::Less, 1),
        Token::Op('>') if assign_follows => (BinaryOperator::GreaterEqual, 2),
        Token::Op('>') => (BinaryOperator::Greater, 1),
        Token::Assign if assign_follows => (BinaryOperator::Equal, 2),
        Token::Op('!') if assign_follows => (BinaryOperator::NotEqual, 2),
        _ => return None,
    };

    for _ in 0..width {
        tokens.next();
    }
    Some((op, *line))
}
