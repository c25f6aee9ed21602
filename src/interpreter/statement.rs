use crate::{error::SyntaxError, interpreter::lexer::Token};

/// The identifier that separates the two halves of a file statement.
pub const SEPARATOR: &str = "to";

/// The closed set of statement keywords.
///
/// Keywords reach the dispatcher as ordinary identifier tokens; each
/// statement's leading identifier is classified through
/// [`Keyword::from_ident`] exactly once and then matched exhaustively, so
/// every keyword's handling is statically checked. An identifier that maps
/// to `None` can only open an assignment.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Keyword {
    /// `if`
    If,
    /// `else`
    Else,
    /// `while`
    While,
    /// `print`
    Print,
    /// `input`
    Input,
    /// `file_read`
    FileRead,
    /// `file_write`
    FileWrite,
}

impl Keyword {
    /// Classifies an identifier as a statement keyword.
    ///
    /// # Example
    /// ```
    /// use skit::interpreter::statement::Keyword;
    ///
    /// assert_eq!(Keyword::from_ident("while"), Some(Keyword::While));
    /// assert_eq!(Keyword::from_ident("total"), None);
    /// ```
    #[must_use]
    pub fn from_ident(name: &str) -> Option<Self> {
        match name {
            "if" => Some(Self::If),
            "else" => Some(Self::Else),
            "while" => Some(Self::While),
            "print" => Some(Self::Print),
            "input" => Some(Self::Input),
            "file_read" => Some(Self::FileRead),
            "file_write" => Some(Self::FileWrite),
            _ => None,
        }
    }
}

/// Reports whether an identifier is reserved by the language.
///
/// Reserved identifiers are the statement keywords and the `to` separator.
/// They cannot name variables.
///
/// # Example
/// ```
/// use skit::interpreter::statement::is_reserved_identifier;
///
/// assert!(is_reserved_identifier("print"));
/// assert!(is_reserved_identifier("to"));
/// assert!(!is_reserved_identifier("total"));
/// ```
#[must_use]
pub fn is_reserved_identifier(name: &str) -> bool {
    Keyword::from_ident(name).is_some() || name == SEPARATOR
}

/// Checks that `name` may be used as a binding target.
///
/// Applied wherever a statement binds a variable: assignment, `input` and
/// the `file_read` target.
///
/// # Errors
/// `SyntaxError::IdentifierReserved` if the name is reserved.
pub fn ensure_bindable(name: &str, line: usize) -> Result<(), SyntaxError> {
    if is_reserved_identifier(name) {
        return Err(SyntaxError::IdentifierReserved { name: name.to_string(),
                                                     line });
    }
    Ok(())
}

/// Splits a `file_read` statement span into its filename expression and
/// target name.
///
/// The span holds everything between the `file_read` keyword and the end of
/// the statement, and must read `<filename-expr> to <name>`: the final token
/// is the target name and the token before it is the `to` separator.
///
/// # Parameters
/// - `span`: The statement's tokens, keyword excluded.
/// - `line`: The statement's line, for errors when the span is too short.
///
/// # Returns
/// The filename expression span, the target name, and the name's line.
///
/// # Errors
/// - `MissingSeparator` if the span is too short or `to` is absent.
/// - `ExpectedIdentifier` if the final token is not a name.
/// - `IdentifierReserved` if the target name is reserved.
/// - `MissingExpression` if no filename tokens precede the separator.
pub fn split_file_read(span: &[(Token, usize)],
                       line: usize)
                       -> Result<(&[(Token, usize)], &str, usize), SyntaxError> {
    let (name, name_line) = match span.last() {
        Some((Token::Ident(name), l)) => (name.as_str(), *l),
        Some((token, l)) => {
            return Err(SyntaxError::ExpectedIdentifier { token: format!("{token:?}"),
                                                         line:  *l, });
        },
        None => return Err(SyntaxError::MissingExpression { line }),
    };

    match span.len().checked_sub(2).map(|i| &span[i]) {
        Some((Token::Ident(sep), _)) if sep == SEPARATOR => {},
        _ => {
            return Err(SyntaxError::MissingSeparator { statement: "file_read".to_string(),
                                                       line });
        },
    }

    let filename = &span[..span.len() - 2];
    if filename.is_empty() {
        return Err(SyntaxError::MissingExpression { line });
    }

    ensure_bindable(name, name_line)?;
    Ok((filename, name, name_line))
}

/// Splits a `file_write` statement span into its content and filename
/// expressions.
///
/// The span must read `<content-expr> to <filename-expr>`. The split happens
/// at the *last* `to` in the span, so the content expression may mention
/// identifiers freely.
///
/// # Errors
/// - `MissingSeparator` if no `to` is present.
/// - `MissingExpression` if either side of the separator is empty.
pub fn split_file_write(span: &[(Token, usize)],
                        line: usize)
                        -> Result<(&[(Token, usize)], &[(Token, usize)]), SyntaxError> {
    let Some(split) = span.iter()
                          .rposition(|(token, _)| {
                              matches!(token, Token::Ident(name) if name == SEPARATOR)
                          })
    else {
        return Err(SyntaxError::MissingSeparator { statement: "file_write".to_string(),
                                                   line });
    };

    let content = &span[..split];
    let filename = &span[split + 1..];
    if content.is_empty() || filename.is_empty() {
        return Err(SyntaxError::MissingExpression { line });
    }

    Ok((content, filename))
}
