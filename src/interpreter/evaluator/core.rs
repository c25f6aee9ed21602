use crate::{
    ast::{Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        env::Environment,
        evaluator::binary::eval_binary,
        io::Io,
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression against an environment.
///
/// The function dispatches on the expression variant: literals evaluate to
/// themselves, variables are looked up in `env`, and operator nodes evaluate
/// their operands first. Reading `env` is the only way an expression can
/// observe the outside world; there is no callout into the host from here.
///
/// # Parameters
/// - `expr`: Expression to evaluate.
/// - `env`: Variable bindings to resolve variable references against.
///
/// # Returns
/// An `EvalResult<Value>` containing the computed value.
///
/// # Example
/// ```
/// use skit::interpreter::{
///     env::Environment,
///     evaluator::core::eval,
///     lexer::lex_line,
///     parser::core::parse_expression,
///     value::Value,
/// };
///
/// let tokens = lex_line("1 + 2 * 3", 1).unwrap();
/// let expr = parse_expression(&tokens, 1).unwrap();
///
/// let result = eval(&expr, &Environment::new()).unwrap();
/// assert_eq!(result, Value::Number(7.0));
/// ```
pub fn eval(expr: &Expr, env: &Environment) -> EvalResult<Value> {
    match expr {
        Expr::Literal { value, .. } => Ok(value.clone()),
        Expr::Variable { name, line } => {
            env.get(name)
               .cloned()
               .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone(),
                                                              line: *line, })
        },
        Expr::UnaryOp { op, expr, line } => {
            let value = eval(expr, env)?;
            match (op, value) {
                (UnaryOperator::Negate, Value::Number(n)) => Ok(Value::Number(-n)),
                (UnaryOperator::Negate, value) => {
                    Err(RuntimeError::TypeError { details: format!("Cannot negate {value}"),
                                                  line: *line, })
                },
            }
        },
        Expr::BinaryOp { left, op, right, line } => {
            let left = eval(left, env)?;
            let right = eval(right, env)?;
            eval_binary(*op, &left, &right, *line)
        },
    }
}

/// Stores the runtime execution context.
///
/// This struct holds the interpreter state shared by every statement of a
/// running script: the variable environment and the I/O adapter all effects
/// go through.
///
/// ## Usage
///
/// `Context` is created once per run and handed to the surface-syntax
/// executors. Statements mutate the environment and perform I/O exclusively
/// through the methods below; expression evaluation itself never touches
/// `io`.
pub struct Context<'io> {
    /// Variable bindings accumulated by executed statements.
    pub env: Environment,
    io:      &'io mut Io,
}

impl<'io> Context<'io> {
    /// Creates a new execution context with an empty environment, routing all
    /// input and output through `io`.
    #[must_use]
    pub fn new(io: &'io mut Io) -> Self {
        Self { env: Environment::new(),
               io }
    }

    /// Evaluates a condition and reports whether it holds.
    pub fn condition_holds(&self, condition: &Expr) -> EvalResult<bool> {
        Ok(eval(condition, &self.env)?.is_truthy())
    }

    /// Evaluates an expression and binds the result to `name`.
    pub fn assign(&mut self, name: String, expr: &Expr) -> EvalResult<()> {
        let value = eval(expr, &self.env)?;
        self.env.set(name, value);
        Ok(())
    }

    /// Evaluates an expression and prints its rendered form on a line of its
    /// own.
    pub fn print_expr(&mut self, expr: &Expr) -> EvalResult<()> {
        let value = eval(expr, &self.env)?;
        self.io.print_line(&value.to_string());
        Ok(())
    }

    /// Reads one line of input and binds it to `name` as text.
    ///
    /// The trailing newline is not part of the stored value. Reading past the
    /// end of input is a runtime error rather than an empty binding.
    pub fn read_input(&mut self, name: String, line: usize) -> EvalResult<()> {
        let text = match self.io.read_line() {
            Ok(Some(text)) => text,
            Ok(None) => return Err(RuntimeError::EndOfInput { line }),
            Err(e) => {
                return Err(RuntimeError::InputFailed { message: e.to_string(),
                                                       line })
            },
        };

        self.env.set(name, Value::Str(text));
        Ok(())
    }

    /// Reads the file named by `filename` and binds its contents to `name` as
    /// text.
    pub fn read_file(&mut self, filename: &Expr, name: String, line: usize) -> EvalResult<()> {
        let path = eval(filename, &self.env)?.to_string();
        let contents = self.io
                           .read_file(&path)
                           .map_err(|e| RuntimeError::FileRead { path,
                                                                 message: e.to_string(),
                                                                 line })?;

        self.env.set(name, Value::Str(contents));
        Ok(())
    }

    /// Evaluates `content` and writes its rendered form to the file named by
    /// `filename`, replacing whatever the file held before.
    pub fn write_file(&mut self, content: &Expr, filename: &Expr, line: usize) -> EvalResult<()> {
        let text = eval(content, &self.env)?.to_string();
        let path = eval(filename, &self.env)?.to_string();

        self.io
            .write_file(&path, &text)
            .map_err(|e| RuntimeError::FileWrite { path,
                                                   message: e.to_string(),
                                                   line })
    }
}
