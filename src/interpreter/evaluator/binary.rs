use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Evaluates a binary operation between two values.
///
/// Addition doubles as text concatenation: when either operand is text, both
/// operands are rendered and joined. The remaining arithmetic operators
/// require numeric operands. Ordering comparisons coerce both operands to
/// numbers, while `==` and `!=` compare values exactly as they are, so a
/// number and a text value are never equal. Every comparison yields `1.0`
/// when it holds and `0.0` when it does not.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing the evaluated result.
///
/// # Example
/// ```
/// use skit::{ast::BinaryOperator, interpreter::{evaluator::binary::eval_binary, value::Value}};
///
/// let left = Value::Str("count: ".to_string());
/// let right = Value::Number(3.0);
/// let line = 1;
///
/// let result = eval_binary(BinaryOperator::Add, &left, &right, line);
/// assert_eq!(result.unwrap(), Value::Str("count: 3.0".to_string()));
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: &Value,
                   right: &Value,
                   line: usize)
                   -> EvalResult<Value> {
    use BinaryOperator::{Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual,
                         Sub};

    match op {
        Add => match (left, right) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
            _ => Ok(Value::Str(format!("{left}{right}"))),
        },

        Sub | Mul | Div => eval_arithmetic(op, left, right, line),

        Less | Greater | LessEqual | GreaterEqual => eval_ordering(op, left, right, line),

        Equal => Ok(truth(left == right)),
        NotEqual => Ok(truth(left != right)),
    }
}

/// Evaluates a numeric arithmetic operation.
///
/// The operator must be one of `Sub`, `Mul` or `Div`; addition is handled
/// separately because of its concatenation overload. Division by zero is
/// checked explicitly.
fn eval_arithmetic(op: BinaryOperator,
                   left: &Value,
                   right: &Value,
                   line: usize)
                   -> EvalResult<Value> {
    let (Value::Number(a), Value::Number(b)) = (left, right) else {
        let details = format!("Cannot use {op} on {left} and {right}");
        return Err(RuntimeError::TypeError { details, line });
    };

    match op {
        BinaryOperator::Sub => Ok(Value::Number(a - b)),
        BinaryOperator::Mul => Ok(Value::Number(a * b)),
        BinaryOperator::Div => {
            if *b == 0.0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            Ok(Value::Number(a / b))
        },
        _ => unreachable!(),
    }
}

/// Evaluates an ordering comparison.
///
/// Both operands are coerced to numbers first, so `"5" < 6` holds while
/// comparing non-numeric text fails.
fn eval_ordering(op: BinaryOperator,
                 left: &Value,
                 right: &Value,
                 line: usize)
                 -> EvalResult<Value> {
    let left = left.as_number(line)?;
    let right = right.as_number(line)?;

    let holds = match op {
        BinaryOperator::Less => left < right,
        BinaryOperator::Greater => left > right,
        BinaryOperator::LessEqual => left <= right,
        BinaryOperator::GreaterEqual => left >= right,
        _ => unreachable!(),
    };

    Ok(truth(holds))
}

const fn truth(condition: bool) -> Value {
    if condition {
        Value::Number(1.0)
    } else {
        Value::Number(0.0)
    }
}
