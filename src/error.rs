/// Syntax errors.
///
/// Defines all error types that can occur while lexing source text or
/// validating the shape of statements and expressions. Syntax errors include
/// unrecognized characters, unexpected tokens, unmatched blocks, and malformed
/// statements — anything detected before an operation takes effect.
pub mod syntax_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while a program is running.
/// Runtime errors include undefined variables, type mismatches, division by
/// zero, and console or filesystem failures.
pub mod runtime_error;

pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;

/// Result type used by the surface-syntax executors.
///
/// Executing a statement can fail on its shape or on its effect, so executor
/// functions return either a value of type `T` or a [`ScriptError`] covering
/// both classes.
pub type RunResult<T> = Result<T, ScriptError>;

#[derive(Debug)]
/// A script failure, tagged with the class it belongs to.
///
/// Every failure an interpreted program can produce is either a
/// [`SyntaxError`] or a [`RuntimeError`]; both are unrecoverable within a
/// single run. The wrapper lets callers distinguish the two classes while
/// handlers inside the engine convert freely with `?`.
pub enum ScriptError {
    /// A grammar or structure violation.
    Syntax(SyntaxError),
    /// A failure while executing an otherwise well-formed program.
    Runtime(RuntimeError),
}

impl std::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ScriptError {}

impl From<SyntaxError> for ScriptError {
    fn from(e: SyntaxError) -> Self {
        Self::Syntax(e)
    }
}

impl From<RuntimeError> for ScriptError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
