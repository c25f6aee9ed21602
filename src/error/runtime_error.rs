#[derive(Debug)]
/// Represents all errors that can be raised while a program is running.
pub enum RuntimeError {
    /// Tried to read an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value had an unexpected or incompatible type for an operation.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A comparison needed a number but the value could not be read as one.
    ExpectedNumber {
        /// The text that failed to convert.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Standard input ended while an `input` statement was waiting for a
    /// line.
    EndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Reading from standard input failed.
    InputFailed {
        /// The underlying cause.
        message: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A file could not be opened or read.
    FileRead {
        /// The path that was being read.
        path:    String,
        /// The underlying cause.
        message: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A file could not be created or written.
    FileWrite {
        /// The path that was being written.
        path:    String,
        /// The underlying cause.
        message: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Runtime error on line {line}: Unknown variable '{name}'.")
            },

            Self::TypeError { details, line } => {
                write!(f, "Runtime error on line {line}: Type error: {details}.")
            },

            Self::ExpectedNumber { found, line } => write!(f,
                                                           "Runtime error on line {line}: Expected a number, found '{found}'."),

            Self::DivisionByZero { line } => {
                write!(f, "Runtime error on line {line}: Division by zero.")
            },

            Self::EndOfInput { line } => {
                write!(f, "Runtime error on line {line}: End of standard input.")
            },

            Self::InputFailed { message, line } => write!(f,
                                                          "Runtime error on line {line}: Could not read from standard input: {message}."),

            Self::FileRead { path, message, line } => {
                write!(f, "Runtime error on line {line}: Cannot read '{path}': {message}.")
            },

            Self::FileWrite { path, message, line } => {
                write!(f, "Runtime error on line {line}: Cannot write '{path}': {message}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
