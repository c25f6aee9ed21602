use std::collections::HashMap;

use crate::interpreter::value::Value;

/// The variable environment of a running program.
///
/// A single flat mapping from variable name to [`Value`]; the language has no
/// functions and no block scoping, so there is exactly one environment per
/// run. It is created empty, mutated only by assignment, `input` and
/// `file_read`, and dropped with the execution context.
#[derive(Debug)]
pub struct Environment {
    bindings: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[allow(clippy::new_without_default)]
    #[must_use]
    pub fn new() -> Self {
        Self { bindings: HashMap::new() }
    }

    /// Binds `name` to `value`, fully replacing any prior binding.
    ///
    /// Replacement includes the type: a name bound to a number may be
    /// rebound to a string and vice versa.
    ///
    /// # Example
    /// ```
    /// use skit::interpreter::{env::Environment, value::Value};
    ///
    /// let mut env = Environment::new();
    /// env.set("x".to_string(), Value::Number(5.0));
    /// env.set("x".to_string(), Value::Str("five".to_string()));
    ///
    /// assert_eq!(env.get("x"), Some(&Value::Str("five".to_string())));
    /// ```
    pub fn set(&mut self, name: String, value: Value) {
        self.bindings.insert(name, value);
    }

    /// Looks up the value bound to `name`.
    ///
    /// Returns `None` for an unbound name; the evaluator turns that into the
    /// unknown-variable runtime error.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }
}
