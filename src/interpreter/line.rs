use crate::{
    error::{RunResult, SyntaxError},
    interpreter::{
        evaluator::core::Context,
        io::Io,
        lexer::{Token, lex_line},
        parser::core::parse_expression,
        statement::{Keyword, ensure_bindable, split_file_read, split_file_write},
    },
};

/// Executes a script written in the indented surface syntax.
///
/// Each physical line is one statement. A block is the maximal run of
/// following lines indented deeper than its header; the end of the source
/// closes every open block, so a final block needs no explicit terminator.
/// Blank lines and comment-only lines are dropped before execution and never
/// affect block extents.
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
/// use skit::interpreter::{io::Io, line};
///
/// let mut io = Io::buffer();
/// line::run("x = 5\nprint x\n", &mut io).unwrap();
///
/// assert_eq!(io.output(), "5.0\n");
/// ```
pub fn run(source: &str, io: &mut Io) -> RunResult<()> {
    let program = parse_program(source)?;
    let end = program.len();
    let mut runner = LineRunner { program,
                                  ctx: Context::new(io), };
    runner.run_range(0, end)
}

/// One executable source line.
struct LineRecord {
    /// 1-based line number in the original source.
    line:   usize,
    /// Count of leading whitespace characters; a tab counts as one.
    indent: usize,
    /// The line's tokens. Never empty.
    tokens: Vec<(Token, usize)>,
}

/// Lexes a source into line records, dropping blank and comment-only lines.
fn parse_program(source: &str) -> Result<Vec<LineRecord>, SyntaxError> {
    let mut program = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let stripped = raw.trim_start();
        if stripped.is_empty() || stripped.starts_with('#') {
            continue;
        }

        let indent = raw.chars().take_while(|c| c.is_whitespace()).count();
        let tokens = lex_line(stripped, line)?;
        program.push(LineRecord { line,
                                  indent,
                                  tokens });
    }

    Ok(program)
}

/// Walks line records by index.
///
/// Statement handlers return the index of the next record to execute, so
/// block constructs consume their body records in one step.
struct LineRunner<'io> {
    program: Vec<LineRecord>,
    ctx:     Context<'io>,
}

impl LineRunner<'_> {
    /// Executes the records in `[start, end)` in order.
    fn run_range(&mut self, start: usize, end: usize) -> RunResult<()> {
        let mut pc = start;
        while pc < end {
            pc = self.exec_record(pc)?;
        }
        Ok(())
    }

    /// Dispatches on the record's leading token.
    ///
    /// # Returns
    /// The index of the record after this statement, including any block it
    /// owns.
    fn exec_record(&mut self, pc: usize) -> RunResult<usize> {
        let record = &self.program[pc];
        let line = record.line;
        let (first, first_line) = record.tokens[0].clone();

        match first {
            Token::Ident(name) => match Keyword::from_ident(&name) {
                Some(Keyword::If) => self.exec_if(pc),
                Some(Keyword::Else) => Err(SyntaxError::ElseWithoutIf { line }.into()),
                Some(Keyword::While) => self.exec_while(pc),
                Some(Keyword::Print) => self.exec_print(pc),
                Some(Keyword::Input) => self.exec_input(pc),
                Some(Keyword::FileRead) => self.exec_file_read(pc),
                Some(Keyword::FileWrite) => self.exec_file_write(pc),
                None => self.exec_assignment(pc, name),
            },
            token => Err(SyntaxError::UnexpectedToken { token: format!("{token:?}"),
                                                        line:  first_line, }.into()),
        }
    }

    /// Executes `<name> = <expr>`.
    fn exec_assignment(&mut self, pc: usize, name: String) -> RunResult<usize> {
        let record = &self.program[pc];
        let line = record.line;

        if !matches!(record.tokens.get(1), Some((Token::Assign, _))) {
            return Err(SyntaxError::UnknownStatement { name, line }.into());
        }
        ensure_bindable(&name, line)?;

        let expr = parse_expression(&record.tokens[2..], line)?;
        self.ctx.assign(name, &expr)?;
        Ok(pc + 1)
    }

    /// Executes `print <expr>`.
    fn exec_print(&mut self, pc: usize) -> RunResult<usize> {
        let record = &self.program[pc];
        let expr = parse_expression(&record.tokens[1..], record.line)?;

        self.ctx.print_expr(&expr)?;
        Ok(pc + 1)
    }

    /// Executes `input <name>`.
    fn exec_input(&mut self, pc: usize) -> RunResult<usize> {
        let record = &self.program[pc];
        let line = record.line;

        let name = match record.tokens.get(1) {
            Some((Token::Ident(name), name_line)) => {
                ensure_bindable(name, *name_line)?;
                name.clone()
            },
            Some((token, token_line)) => {
                return Err(SyntaxError::ExpectedIdentifier { token: format!("{token:?}"),
                                                             line:  *token_line, }.into());
            },
            None => {
                return Err(SyntaxError::ExpectedIdentifier { token: "end of line".to_string(),
                                                             line }.into());
            },
        };
        if let Some((token, token_line)) = record.tokens.get(2) {
            return Err(SyntaxError::UnexpectedTrailingTokens { token: format!("{token:?}"),
                                                               line:  *token_line, }.into());
        }

        self.ctx.read_input(name, line)?;
        Ok(pc + 1)
    }

    /// Executes `file_read <filename-expr> to <name>`.
    fn exec_file_read(&mut self, pc: usize) -> RunResult<usize> {
        let record = &self.program[pc];
        let line = record.line;

        let (filename_span, name, _) = split_file_read(&record.tokens[1..], line)?;
        let filename = parse_expression(filename_span, line)?;
        let name = name.to_string();

        self.ctx.read_file(&filename, name, line)?;
        Ok(pc + 1)
    }

    /// Executes `file_write <content-expr> to <filename-expr>`.
    fn exec_file_write(&mut self, pc: usize) -> RunResult<usize> {
        let record = &self.program[pc];
        let line = record.line;

        let (content_span, filename_span) = split_file_write(&record.tokens[1..], line)?;
        let content = parse_expression(content_span, line)?;
        let filename = parse_expression(filename_span, line)?;

        self.ctx.write_file(&content, &filename, line)?;
        Ok(pc + 1)
    }

    /// Executes `if <cond>` with an optional aligned `else`.
    ///
    /// The condition is evaluated once. The untaken branch's records are
    /// passed over without being looked at.
    fn exec_if(&mut self, pc: usize) -> RunResult<usize> {
        let record = &self.program[pc];
        let line = record.line;
        let indent = record.indent;
        let condition = parse_expression(&record.tokens[1..], line)?;

        let end = self.resolve_block(pc);
        let else_header = self.paired_else(end, indent)?;

        if self.ctx.condition_holds(&condition)? {
            self.run_range(pc + 1, end)?;
            if let Some(header) = else_header {
                return Ok(self.resolve_block(header));
            }
            Ok(end)
        } else if let Some(header) = else_header {
            let else_end = self.resolve_block(header);
            self.run_range(header + 1, else_end)?;
            Ok(else_end)
        } else {
            Ok(end)
        }
    }

    /// Executes `while <cond>`.
    ///
    /// The condition expression is read once and re-evaluated before every
    /// pass over the body records.
    fn exec_while(&mut self, pc: usize) -> RunResult<usize> {
        let record = &self.program[pc];
        let line = record.line;
        let condition = parse_expression(&record.tokens[1..], line)?;

        let end = self.resolve_block(pc);
        loop {
            if self.ctx.condition_holds(&condition)? {
                self.run_range(pc + 1, end)?;
                continue;
            }
            return Ok(end);
        }
    }

    /// Finds the first record index after `header` that does not belong to
    /// its block.
    ///
    /// A record belongs to the block while its indentation is strictly
    /// deeper than the header's. Running out of records closes the block.
    fn resolve_block(&self, header: usize) -> usize {
        let width = self.program[header].indent;
        let mut index = header + 1;
        loop {
            if let Some(record) = self.program.get(index)
               && record.indent > width
            {
                index += 1;
                continue;
            }
            break;
        }
        index
    }

    /// Checks whether the record at `index` is an `else` paired to an `if`
    /// of the given indentation.
    ///
    /// Pairing requires the exact indentation width of the `if` header; an
    /// `else` at any other width is left in place for the dispatcher, which
    /// rejects it as unpaired. A paired `else` carries nothing after the
    /// keyword.
    fn paired_else(&self, index: usize, indent: usize) -> Result<Option<usize>, SyntaxError> {
        let Some(record) = self.program.get(index) else {
            return Ok(None);
        };
        if record.indent != indent {
            return Ok(None);
        }

        let Some((Token::Ident(name), _)) = record.tokens.first() else {
            return Ok(None);
        };
        if Keyword::from_ident(name) != Some(Keyword::Else) {
            return Ok(None);
        }

        if let Some((token, token_line)) = record.tokens.get(1) {
            return Err(SyntaxError::UnexpectedTrailingTokens { token: format!("{token:?}"),
                                                               line:  *token_line, });
        }
        Ok(Some(index))
    }
}
