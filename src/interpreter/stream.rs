use crate::{
    ast::Expr,
    error::{RunResult, SyntaxError},
    interpreter::{
        evaluator::core::Context,
        io::Io,
        lexer::{Token, lex},
        parser::core::parse_expression,
        statement::{Keyword, ensure_bindable, split_file_read, split_file_write},
    },
};

/// Executes a script written in the braced surface syntax.
///
/// The whole source is lexed up front, so an unreadable character anywhere
/// fails the run before any statement takes effect. Statements end with `;`
/// and blocks are `{` ... `}`.
///
/// # Parameters
/// - `source`: Script text.
/// - `io`: Destination for every input and output effect.
///
/// # Errors
/// The first [`SyntaxError`] or [`RuntimeError`](crate::error::RuntimeError)
/// encountered; execution stops at that point.
///
/// # Example
/// ```
/// use skit::interpreter::{io::Io, stream};
///
/// let mut io = Io::buffer();
/// stream::run("x = 5; print x;", &mut io).unwrap();
///
/// assert_eq!(io.output(), "5.0\n");
/// ```
pub fn run(source: &str, io: &mut Io) -> RunResult<()> {
    let tokens = lex(source)?;
    let mut runner = StreamRunner { tokens,
                                    cursor: 0,
                                    ctx: Context::new(io), };
    runner.run_program()
}

/// Walks a flat token sequence one statement at a time.
///
/// The cursor always rests on the first token of the next statement. Block
/// handlers either execute a block and leave the cursor after its `}`, or
/// skip it structurally by brace counting without validating its interior.
struct StreamRunner<'io> {
    tokens: Vec<(Token, usize)>,
    cursor: usize,
    ctx:    Context<'io>,
}

impl StreamRunner<'_> {
    fn run_program(&mut self) -> RunResult<()> {
        while self.cursor < self.tokens.len() {
            self.exec_statement()?;
        }
        Ok(())
    }

    /// Dispatches on the statement's leading token.
    fn exec_statement(&mut self) -> RunResult<()> {
        let (token, line) = self.current_cloned()?;

        match token {
            Token::Ident(name) => match Keyword::from_ident(&name) {
                Some(Keyword::If) => self.exec_if(line),
                Some(Keyword::Else) => Err(SyntaxError::ElseWithoutIf { line }.into()),
                Some(Keyword::While) => self.exec_while(line),
                Some(Keyword::Print) => self.exec_print(line),
                Some(Keyword::Input) => self.exec_input(line),
                Some(Keyword::FileRead) => self.exec_file_read(line),
                Some(Keyword::FileWrite) => self.exec_file_write(line),
                None => self.exec_assignment(name, line),
            },
            token => Err(SyntaxError::UnexpectedToken { token: format!("{token:?}"),
                                                        line }.into()),
        }
    }

    /// Executes `<name> = <expr> ;`.
    ///
    /// A leading identifier that opens no assignment is an unknown statement,
    /// reported under the name the script used.
    fn exec_assignment(&mut self, name: String, line: usize) -> RunResult<()> {
        if !matches!(self.tokens.get(self.cursor + 1), Some((Token::Assign, _))) {
            return Err(SyntaxError::UnknownStatement { name, line }.into());
        }
        ensure_bindable(&name, line)?;
        self.cursor += 2;

        let expr = self.take_expression(line)?;
        self.expect_end()?;
        self.ctx.assign(name, &expr)?;
        Ok(())
    }

    /// Executes `print <expr> ;`.
    fn exec_print(&mut self, line: usize) -> RunResult<()> {
        self.cursor += 1;

        let expr = self.take_expression(line)?;
        self.expect_end()?;
        self.ctx.print_expr(&expr)?;
        Ok(())
    }

    /// Executes `input <name> ;`.
    fn exec_input(&mut self, line: usize) -> RunResult<()> {
        self.cursor += 1;

        let name = self.expect_identifier()?;
        self.expect_end()?;
        self.ctx.read_input(name, line)?;
        Ok(())
    }

    /// Executes `file_read <filename-expr> to <name> ;`.
    fn exec_file_read(&mut self, line: usize) -> RunResult<()> {
        self.cursor += 1;

        let start = self.skip_to_boundary();
        let (filename_span, name, _) = split_file_read(&self.tokens[start..self.cursor], line)?;
        let filename = parse_expression(filename_span, line)?;
        let name = name.to_string();

        self.expect_end()?;
        self.ctx.read_file(&filename, name, line)?;
        Ok(())
    }

    /// Executes `file_write <content-expr> to <filename-expr> ;`.
    fn exec_file_write(&mut self, line: usize) -> RunResult<()> {
        self.cursor += 1;

        let start = self.skip_to_boundary();
        let (content_span, filename_span) =
            split_file_write(&self.tokens[start..self.cursor], line)?;
        let content = parse_expression(content_span, line)?;
        let filename = parse_expression(filename_span, line)?;

        self.expect_end()?;
        self.ctx.write_file(&content, &filename, line)?;
        Ok(())
    }

    /// Executes `if <cond> { ... }` with an optional `else { ... }`.
    ///
    /// The condition is evaluated once. The untaken branch is skipped
    /// structurally, so its statements are never validated beyond lexing.
    fn exec_if(&mut self, line: usize) -> RunResult<()> {
        self.cursor += 1;

        let condition = self.take_expression(line)?;
        let opener = self.expect_open_brace()?;

        if self.ctx.condition_holds(&condition)? {
            self.run_block(opener)?;
            if let Some(else_opener) = self.take_else()? {
                self.skip_block(else_opener)?;
            }
        } else {
            self.skip_block(opener)?;
            if let Some(else_opener) = self.take_else()? {
                self.run_block(else_opener)?;
            }
        }
        Ok(())
    }

    /// Executes `while <cond> { ... }`.
    ///
    /// The condition expression is read once and re-evaluated before every
    /// pass. Each pass rewinds the cursor to the body start, so the loop
    /// leaves the cursor after the block exactly once, on the failing check.
    fn exec_while(&mut self, line: usize) -> RunResult<()> {
        self.cursor += 1;

        let condition = self.take_expression(line)?;
        let opener = self.expect_open_brace()?;
        let body = self.cursor;

        loop {
            self.cursor = body;
            if self.ctx.condition_holds(&condition)? {
                self.run_block(opener)?;
                continue;
            }
            self.skip_block(opener)?;
            return Ok(());
        }
    }

    /// Executes statements until this block's `}` and consumes it.
    fn run_block(&mut self, opener_line: usize) -> RunResult<()> {
        loop {
            match self.tokens.get(self.cursor) {
                Some((Token::Op('}'), _)) => {
                    self.cursor += 1;
                    return Ok(());
                },
                Some(_) => self.exec_statement()?,
                None => {
                    return Err(SyntaxError::UnmatchedBlock { line: opener_line }.into());
                },
            }
        }
    }

    /// Skips past this block's `}` by brace counting, with the cursor on the
    /// first token after the opener.
    ///
    /// Braces inside string literals are single tokens by this point and do
    /// not disturb the count.
    fn skip_block(&mut self, opener_line: usize) -> Result<(), SyntaxError> {
        let mut depth = 1_usize;
        loop {
            let Some((token, _)) = self.tokens.get(self.cursor) else {
                return Err(SyntaxError::UnmatchedBlock { line: opener_line });
            };
            self.cursor += 1;

            match token {
                Token::Op('{') => depth += 1,
                Token::Op('}') => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(());
                    }
                },
                _ => {},
            }
        }
    }

    /// Consumes an `else` keyword and its `{`, if present at the cursor.
    ///
    /// # Returns
    /// The opening brace's line when an `else` branch follows, `None`
    /// otherwise.
    fn take_else(&mut self) -> Result<Option<usize>, SyntaxError> {
        if let Some((Token::Ident(name), _)) = self.tokens.get(self.cursor)
           && Keyword::from_ident(name) == Some(Keyword::Else)
        {
            self.cursor += 1;
            let opener = self.expect_open_brace()?;
            return Ok(Some(opener));
        }
        Ok(None)
    }

    /// Advances the cursor to the next `;`, `{` or `}` and returns where the
    /// scan began. The boundary token itself is not consumed.
    fn skip_to_boundary(&mut self) -> usize {
        let start = self.cursor;
        loop {
            if let Some((token, _)) = self.tokens.get(self.cursor)
               && !matches!(token, Token::End | Token::Op('{') | Token::Op('}'))
            {
                self.cursor += 1;
                continue;
            }
            break;
        }
        start
    }

    /// Reads one expression span ending at a statement boundary and parses
    /// it.
    fn take_expression(&mut self, line: usize) -> Result<Expr, SyntaxError> {
        let start = self.skip_to_boundary();
        parse_expression(&self.tokens[start..self.cursor], line)
    }

    /// Consumes the `;` that closes a simple statement.
    fn expect_end(&mut self) -> Result<(), SyntaxError> {
        match self.tokens.get(self.cursor) {
            Some((Token::End, _)) => {
                self.cursor += 1;
                Ok(())
            },
            Some((token, line)) => {
                Err(SyntaxError::ExpectedTerminator { token: format!("{token:?}"),
                                                      line:  *line, })
            },
            None => Err(SyntaxError::UnexpectedEndOfInput { line: self.last_line() }),
        }
    }

    /// Consumes the `{` that opens a block and returns its line.
    fn expect_open_brace(&mut self) -> Result<usize, SyntaxError> {
        match self.tokens.get(self.cursor) {
            Some((Token::Op('{'), line)) => {
                let line = *line;
                self.cursor += 1;
                Ok(line)
            },
            Some((token, line)) => {
                Err(SyntaxError::ExpectedBlockStart { token: format!("{token:?}"),
                                                      line:  *line, })
            },
            None => Err(SyntaxError::UnexpectedEndOfInput { line: self.last_line() }),
        }
    }

    /// Consumes a bindable identifier and returns its name.
    fn expect_identifier(&mut self) -> Result<String, SyntaxError> {
        match self.tokens.get(self.cursor) {
            Some((Token::Ident(name), line)) => {
                ensure_bindable(name, *line)?;
                let name = name.clone();
                self.cursor += 1;
                Ok(name)
            },
            Some((token, line)) => {
                Err(SyntaxError::ExpectedIdentifier { token: format!("{token:?}"),
                                                      line:  *line, })
            },
            None => Err(SyntaxError::UnexpectedEndOfInput { line: self.last_line() }),
        }
    }

    fn current_cloned(&self) -> Result<(Token, usize), SyntaxError> {
        self.tokens
            .get(self.cursor)
            .cloned()
            .ok_or_else(|| SyntaxError::UnexpectedEndOfInput { line: self.last_line() })
    }

    fn last_line(&self) -> usize {
        self.tokens.last().map_or(1, |(_, line)| *line)
    }
}
