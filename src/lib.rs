//! # skit
//!
//! skit is a pocket-size imperative scripting language written in Rust.
//! One semantic core runs scripts in either of two surface syntaxes: a
//! braced syntax with `;`-terminated statements, and an indented syntax
//! where each line is a statement and blocks are deeper-indented runs.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::unused_self)]

use crate::{
    error::RunResult,
    interpreter::{io::Io, line, stream},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types that
/// represent the syntactic structure of expressions as a tree. The AST is
/// built by the parser and traversed by the evaluator. Statements never
/// appear in it: their shapes are fixed and the surface-syntax executors
/// handle them directly.
///
/// # Responsibilities
/// - Defines expression and operator types for all expression constructs.
/// - Attaches source line numbers to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing, and execution.
///
/// This module defines all errors that can be raised while running a
/// script, split into the syntax class and the runtime class. It
/// standardizes error reporting and carries source line numbers for user
/// feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, executor).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of script execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, error handling, and all supporting infrastructure to
/// provide a complete runtime for both surface syntaxes. It exposes the
/// executors the crate-level entry points dispatch to.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and I/O.
/// - Provides one executor per surface syntax over the shared core.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Selects which surface syntax a source text is written in.
///
/// The two syntaxes share the lexer, the expression grammar, and every
/// statement's semantics; they differ only in how statements end and how
/// blocks are delimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    /// Braced syntax: statements end with `;`, blocks are `{` ... `}`.
    Stream,
    /// Indented syntax: one statement per line, blocks are indented runs.
    Line,
}

/// Runs a script against standard input and standard output.
///
/// This function lexes and executes all statements in the provided source
/// string under the chosen surface syntax. Execution stops at the first
/// error.
///
/// # Errors
/// Returns an error if lexing, parsing, or any statement fails, with the
/// source line it failed on.
///
/// # Examples
/// ```
/// use skit::{Syntax, run};
///
/// // Assignment and arithmetic succeed quietly.
/// let res = run("x = 1 + 2;", Syntax::Stream);
/// assert!(res.is_ok());
///
/// // Example with an intentional error (unknown variable).
/// let res = run("print missing;", Syntax::Stream);
/// assert!(res.is_err());
/// ```
pub fn run(source: &str, syntax: Syntax) -> RunResult<()> {
    let mut io = Io::stdio();
    run_with_io(source, syntax, &mut io)
}

/// Runs a script with every effect routed through `io`.
///
/// Embedders and tests use this entry point with [`Io::buffer`] to supply
/// input lines and capture printed output.
///
/// # Errors
/// Returns an error if lexing, parsing, or any statement fails, with the
/// source line it failed on.
///
/// # Examples
/// ```
/// use skit::{Syntax, interpreter::io::Io, run_with_io};
///
/// let mut io = Io::buffer_with_input(["world"]);
/// run_with_io("input who; print \"hello \" + who;", Syntax::Stream, &mut io).unwrap();
///
/// assert_eq!(io.output(), "hello world\n");
/// ```
pub fn run_with_io(source: &str, syntax: Syntax, io: &mut Io) -> RunResult<()> {
    match syntax {
        Syntax::Stream => stream::run(source, io),
        Syntax::Line => line::run(source, io),
    }
}
