use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{core::Value, function::Callable, method::lookup, string},
    },
    util::num::{f64_to_index, usize_to_f64},
};

impl Value {
    /// Reads `key` from the value.
    ///
    /// - Objects: the entry named by the key's printed form, falling back to
    ///   a builtin method of that name.
    /// - Arrays: the element at a numeric key, the `length` attribute, or a
    ///   builtin method.
    /// - Strings: the character at a numeric key, the `length` attribute, or
    ///   a builtin method.
    /// - Everything else: a builtin method.
    ///
    /// A builtin method is returned bound to this value, so calling it later
    /// uses this value as the receiver. Anything not found is `null`.
    ///
    /// # Example
    /// ```
    /// use meth::interpreter::value::core::Value;
    ///
    /// let array = Value::from(vec![Value::Number(7.0)]);
    ///
    /// assert_eq!(array.get(&Value::Number(0.0)), Value::Number(7.0));
    /// assert_eq!(array.get(&Value::from("length")), Value::Number(1.0));
    /// assert_eq!(array.get(&Value::Number(3.0)), Value::Null);
    /// assert!(matches!(array.get(&Value::from("push")), Value::Function(_)));
    /// assert_eq!(Value::Null.get(&Value::from("x")), Value::Null);
    /// ```
    #[must_use]
    pub fn get(&self, key: &Self) -> Self {
        let name = key.to_string();

        match self {
            Self::Null => Self::Null,
            Self::Object(entries) => {
                if let Some(value) = entries.borrow().get(&name) {
                    return value.clone();
                }
                self.bound_method(&name)
            },
            Self::Array(items) => {
                if name == "length" {
                    return Self::Number(usize_to_f64(items.borrow().len()));
                }
                match index_key(key) {
                    Some(index) => items.borrow().get(index).cloned().unwrap_or(Self::Null),
                    None => self.bound_method(&name),
                }
            },
            Self::String(text) => {
                if name == "length" {
                    return string::length(text);
                }
                match index_key(key) {
                    Some(index) => string::char_at(text, index),
                    None => self.bound_method(&name),
                }
            },
            _ => self.bound_method(&name),
        }
    }

    /// Writes `value` under `key`.
    ///
    /// Objects accept any key, by its printed form. Arrays accept an index
    /// up to and including their length; writing at the length appends.
    /// A container may be its own key (`o[o] = 1;`).
    ///
    /// # Errors
    /// Returns `RuntimeError::InvalidAssignment` for any other target.
    pub fn set_member(&self, key: &Self, value: Self, line: usize) -> EvalResult<()> {
        let written = match self {
            Self::Object(entries) => {
                let name = key.to_string();
                entries.borrow_mut().insert(name, value);
                true
            },
            Self::Array(items) => {
                let mut items = items.borrow_mut();
                match index_key(key) {
                    Some(index) if index < items.len() => {
                        items[index] = value;
                        true
                    },
                    Some(index) if index == items.len() => {
                        items.push(value);
                        true
                    },
                    _ => false,
                }
            },
            _ => false,
        };

        if written {
            return Ok(());
        }
        Err(RuntimeError::InvalidAssignment { key: key.to_string(),
                                              found: self.type_name(),
                                              line })
    }

    fn bound_method(&self, name: &str) -> Self {
        lookup(self, name).map_or(Self::Null, |def| {
                              Self::Function(Rc::new(Callable::Builtin { receiver: self.clone(),
                                                                         def }))
                          })
    }
}

/// Interprets a key as an element index.
///
/// Numbers must be exact non-negative integers; strings must be the
/// canonical decimal form of one, so `'1'` indexes but `'01'` does not.
fn index_key(key: &Value) -> Option<usize> {
    match key {
        Value::Number(n) => f64_to_index(*n),
        Value::String(s) => s.parse::<usize>().ok().filter(|index| index.to_string() == **s),
        _ => None,
    }
}
