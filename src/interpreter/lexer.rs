use logos::Logos;

use crate::error::SyntaxError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Keywords such as `if` or `print` are not tokens of their own; they reach
/// the dispatcher as ordinary [`Token::Ident`] values and are classified
/// there. Likewise every operator and punctuation character other than `=`
/// and `;` is carried as a single [`Token::Op`] character.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`. No sign, no exponent.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    Number(f64),
    /// Identifier tokens; variable names and statement keywords such as `x`
    /// or `while`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Ident(String),
    /// String literal tokens. The payload is the text between the quotes,
    /// kept verbatim: no escape processing of any kind.
    #[regex(r#""[^"]*""#, unquote_string)]
    Str(String),
    /// `=`
    #[token("=")]
    Assign,
    /// `;` — the statement terminator of the stream syntax.
    #[token(";")]
    End,
    /// Any single operator or punctuation character: `+ - * / ( ) { } < > !`.
    #[regex(r"[+\-*/(){}<>!]", |lex| lex.slice().chars().next())]
    Op(char),

    /// `# Comments.`
    #[regex(r"#[^\n]*", logos::skip)]
    Comment,
    /// Line breaks; skipped, with the line counter kept in step.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    Newline,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
/// Strips the enclosing quotes from a string literal.
///
/// A literal may span several lines; any newline inside it is counted so
/// that later tokens keep accurate line numbers.
fn unquote_string(lex: &mut logos::Lexer<Token>) -> String {
    let quoted       = lex.slice();
    let newlines     = quoted.chars().filter(|&c| c == '\n').count();
    lex.extras.line += newlines;
    quoted[1..quoted.len() - 1].to_string()
}

/// Tokenizes a whole program source.
///
/// Whitespace and comments are dropped; every remaining token is paired with
/// the 1-based line it appeared on. Lexing stops at the first unrecognized
/// character.
///
/// # Parameters
/// - `source`: The full program text.
///
/// # Returns
/// The token sequence, or the syntax error for the first character that
/// matches no token pattern.
///
/// # Example
/// ```
/// use skit::interpreter::lexer::{Token, lex};
///
/// let tokens = lex("x = 5; # note\n").unwrap();
///
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[0], (Token::Ident("x".to_string()), 1));
/// ```
pub fn lex(source: &str) -> Result<Vec<(Token, usize)>, SyntaxError> {
    lex_from(source, 1)
}

/// Tokenizes a single line of source at a known line number.
///
/// Used by the line-oriented syntax, which strips and classifies each source
/// line before handing it to the lexer.
///
/// # Parameters
/// - `text`: One line of source, without its line break.
/// - `line`: The 1-based number of that line in the original source.
///
/// # Returns
/// The token sequence for the line, or a syntax error as in [`lex`].
pub fn lex_line(text: &str, line: usize) -> Result<Vec<(Token, usize)>, SyntaxError> {
    lex_from(text, line)
}

fn lex_from(source: &str, start_line: usize) -> Result<Vec<(Token, usize)>, SyntaxError> {
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: start_line });
    let mut tokens = vec![];

    while let Some(token) = lexer.next() {
        match token {
            Ok(token) => tokens.push((token, lexer.extras.line)),
            Err(()) => {
                return Err(SyntaxError::UnrecognizedCharacter { text: lexer.slice().to_string(),
                                                                line: lexer.extras.line, });
            },
        }
    }

    Ok(tokens)
}
