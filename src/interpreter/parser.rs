/// Expression parsing entry point.
///
/// Contains the span-level `parse_expression` function used by both surface
/// syntaxes, along with the shared `ParseResult` alias.
pub mod core;

/// Unary and primary expression parsing.
///
/// Handles numeric negation and the atomic expressions: literals, variable
/// references, and parenthesized groups.
pub mod unary;

/// Binary expression parsing.
///
/// Implements the precedence levels for arithmetic and comparison operators,
/// including the merging of adjacent single-character tokens into the
/// two-character comparison operators.
pub mod binary;
