/// Core evaluation logic and context management.
///
/// Contains the expression evaluator, the runtime execution context, and the
/// statement effects that read and write the environment.
pub mod core;

/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions: arithmetic,
/// text concatenation, and comparisons.
pub mod binary;
