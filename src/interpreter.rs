/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// identifiers, operators, and delimiters. Both surface syntaxes share it:
/// one lexes whole scripts, the other lexes one physical line at a time.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source location.
/// - Handles numeric and string literals, identifiers, and operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value types a running script can hold, numbers
/// and text, together with their rendering, truthiness, and numeric coercion
/// rules.
///
/// # Responsibilities
/// - Defines the `Value` enum and its two variants.
/// - Implements rendering and coercion used by printing and comparisons.
pub mod value;
/// The environment module stores variable bindings.
///
/// A single flat map from names to values backs every script run. There is
/// no scoping or shadowing: blocks read and write the same environment as
/// the statements around them.
///
/// # Responsibilities
/// - Binds names to values, replacing previous bindings of any type.
/// - Resolves names for the evaluator.
pub mod env;
/// The statement module classifies statement keywords and shapes.
///
/// Statement keywords arrive from the lexer as plain identifiers. This
/// module turns them into a closed enum for exhaustive dispatch, guards the
/// reserved names, and splits the two-part file statements at their `to`
/// separator.
///
/// # Responsibilities
/// - Maps leading identifiers to the closed set of statement keywords.
/// - Rejects reserved names at binding sites.
/// - Splits `file_read` and `file_write` spans into their operand parts.
pub mod statement;
/// The parser module builds expression trees from tokens.
///
/// The parser processes token spans cut out of a statement and constructs an
/// AST that represents the syntactic structure of one expression. Statements
/// themselves have fixed shapes and are handled by the surface-syntax
/// executors; only expressions need a grammar.
///
/// # Responsibilities
/// - Converts token spans into structured AST nodes.
/// - Validates expression grammar, reporting errors with location info.
/// - Supports arithmetic, comparisons, grouping, and negation.
pub mod parser;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses expression trees and produces values, and its
/// execution context applies statement effects: assignment, printing,
/// console input, and file access. Expression evaluation itself can reach
/// nothing but the environment.
///
/// # Responsibilities
/// - Evaluates expression nodes, performing all supported operations.
/// - Applies statement effects through the I/O adapter.
/// - Reports runtime errors such as division by zero or unknown variables.
pub mod evaluator;
/// The stream module executes the braced surface syntax.
///
/// Statements end with `;` and blocks are `{` ... `}`. The executor walks a
/// flat token sequence with a cursor, re-entering block bodies by cursor
/// position rather than by materializing a statement tree.
///
/// # Responsibilities
/// - Dispatches statements off the token cursor.
/// - Runs, repeats, and structurally skips brace blocks.
pub mod stream;
/// The line module executes the indented surface syntax.
///
/// Each physical line is one statement and blocks are runs of deeper
/// indented lines. The executor walks line records by index and resolves
/// block extents by comparing indentation widths.
///
/// # Responsibilities
/// - Dispatches statements off line records.
/// - Resolves block extents and `else` pairing by indentation width.
pub mod line;
/// The io module funnels script effects to their destinations.
///
/// Printing and console input go through an adapter that either touches the
/// real standard streams or captures everything in memory for tests and
/// embedders. File statements always reach the filesystem.
///
/// # Responsibilities
/// - Prints lines and reads input lines from the selected destination.
/// - Reads and writes files for the file statements.
pub mod io;
