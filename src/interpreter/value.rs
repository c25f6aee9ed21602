use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the interpreter.
///
/// The language has exactly two value types: double precision floating-point
/// numbers and text strings. Every variable binding, literal and expression
/// result is one of these.
///
/// The `Display` impl renders the text form used by `print`, string
/// concatenation and `file_write`: strings render as-is, and a finite number
/// with no fractional part keeps one trailing zero.
///
/// ```
/// use skit::interpreter::value::Value;
///
/// assert_eq!(Value::Number(5.0).to_string(), "5.0");
/// assert_eq!(Value::Number(2.5).to_string(), "2.5");
/// assert_eq!(Value::Str("hello".to_string()).to_string(), "hello");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A text string.
    Str(String),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl Value {
    /// Converts the value to an `f64`, or returns an error if it cannot be
    /// read as one.
    ///
    /// Numbers convert directly. Strings are parsed, ignoring surrounding
    /// whitespace, so the ordered comparisons can compare `"5"` with `6`.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: The numeric reading of the value.
    /// - `Err(RuntimeError::ExpectedNumber)`: If a string has no numeric
    ///   reading.
    ///
    /// # Example
    /// ```
    /// use skit::interpreter::value::Value;
    ///
    /// let x = Value::Str("4.5".to_string());
    ///
    /// assert_eq!(x.as_number(1).unwrap(), 4.5);
    /// ```
    pub fn as_number(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Str(s) => {
                s.trim()
                 .parse()
                 .map_err(|_| RuntimeError::ExpectedNumber { found: s.clone(),
                                                             line })
            },
        }
    }

    /// Reports whether the value counts as true in a condition.
    ///
    /// A number is truthy unless it is `0.0`; a string is truthy unless it
    /// is empty.
    ///
    /// # Example
    /// ```
    /// use skit::interpreter::value::Value;
    ///
    /// assert!(Value::Number(1.0).is_truthy());
    /// assert!(!Value::Number(0.0).is_truthy());
    /// assert!(!Value::Str(String::new()).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number(n) => *n != 0.0,
            Self::Str(s) => !s.is_empty(),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) if n.is_finite() && n.fract() == 0.0 => write!(f, "{n:.1}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}
