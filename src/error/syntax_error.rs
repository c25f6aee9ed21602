#[derive(Debug)]
/// Represents all errors that can occur while lexing source text or checking
/// the shape of statements, conditions and expressions.
pub enum SyntaxError {
    /// The lexer hit a character that matches no token pattern.
    UnrecognizedCharacter {
        /// The offending character sequence, exactly as it appeared.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found an unexpected token where a statement or expression element was
    /// expected.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A block was opened with `{` but the source ended before the matching
    /// `}` was found.
    UnmatchedBlock {
        /// The source line of the statement that opened the block.
        line: usize,
    },
    /// An `else` appeared with no `if` in a position to claim it.
    ElseWithoutIf {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A statement began with an identifier that is neither a keyword nor
    /// the target of an assignment.
    UnknownStatement {
        /// The identifier that opened the statement.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An expression was required but no tokens were given for it.
    MissingExpression {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A file statement is missing its `to` separator.
    MissingSeparator {
        /// The statement keyword, `file_read` or `file_write`.
        statement: String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A variable name was expected but something else was found.
    ExpectedIdentifier {
        /// The token encountered instead.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Tried to use a reserved identifier name as a binding target.
    IdentifierReserved {
        /// The reserved identifier name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found extra tokens after parsing should have completed.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `{` was expected to open a branch or loop body.
    ExpectedBlockStart {
        /// The token encountered instead.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A `;` was expected to terminate the statement.
    ExpectedTerminator {
        /// The token encountered instead.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter { text, line } => {
                write!(f, "Syntax error on line {line}: Unrecognized character '{text}'.")
            },

            Self::UnexpectedToken { token, line } => {
                write!(f, "Syntax error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Syntax error on line {line}: Unexpected end of input.")
            },

            Self::UnmatchedBlock { line } => write!(f,
                                                    "Syntax error on line {line}: Unmatched block: missing '}}'."),

            Self::ElseWithoutIf { line } => {
                write!(f, "Syntax error on line {line}: 'else' without a matching 'if'.")
            },

            Self::UnknownStatement { name, line } => {
                write!(f, "Syntax error on line {line}: Unknown statement '{name}'.")
            },

            Self::MissingExpression { line } => {
                write!(f, "Syntax error on line {line}: Expected an expression.")
            },

            Self::MissingSeparator { statement, line } => write!(f,
                                                                 "Syntax error on line {line}: Expected 'to' in the {statement} statement."),

            Self::ExpectedIdentifier { token, line } => write!(f,
                                                               "Syntax error on line {line}: Expected a variable name, found {token}."),

            Self::IdentifierReserved { name, line } => {
                write!(f, "Syntax error on line {line}: Identifier '{name}' is reserved.")
            },

            Self::UnexpectedTrailingTokens { token, line } => write!(f,
                                                                     "Syntax error on line {line}: Extra tokens after expression. Check your input: {token}"),

            Self::ExpectedClosingParen { line } => write!(f,
                                                          "Syntax error on line {line}: Expected closing parenthesis ')' but none found."),

            Self::ExpectedBlockStart { token, line } => write!(f,
                                                               "Syntax error on line {line}: Expected '{{' to open a block, found {token}."),

            Self::ExpectedTerminator { token, line } => write!(f,
                                                               "Syntax error on line {line}: Expected ';' after the statement, found {token}."),
        }
    }
}

impl std::error::Error for SyntaxError {}
