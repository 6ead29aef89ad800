use std::{cell::RefCell, fmt, rc::Rc};

use indexmap::IndexMap;

use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::function::Callable},
    util::num::{MAX_SAFE_U64_INT, format_number},
};

/// Shared, mutable storage of an array value.
pub type Array = Rc<RefCell<Vec<Value>>>;

/// Shared, mutable, insertion-ordered storage of an object value.
///
/// Scopes store their variables in the same structure, which is what makes a
/// scope usable as an object (`parent`, loaded modules).
pub type Object = Rc<RefCell<IndexMap<String, Value>>>;

/// Represents a runtime value in the interpreter.
///
/// Scalars are stored inline. Arrays, objects and functions are reference
/// counted: cloning a `Value` of those kinds clones the handle, so every
/// clone observes the same mutations.
#[derive(Debug, Clone)]
pub enum Value {
    /// The absent value. Missing variables, missing keys and functions that
    /// return nothing all yield `Null`.
    Null,
    /// `t` or `f`.
    Boolean(bool),
    /// A double precision number.
    Number(f64),
    /// An immutable string.
    String(Rc<str>),
    /// An ordered, shared, mutable sequence of values.
    Array(Array),
    /// An insertion-ordered, shared, mutable map from names to values.
    Object(Object),
    /// A closure or a bound builtin method.
    Function(Rc<Callable>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v.into())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(RefCell::new(v)))
    }
}

impl From<IndexMap<String, Self>> for Value {
    fn from(v: IndexMap<String, Self>) -> Self {
        Self::Object(Rc::new(RefCell::new(v)))
    }
}

impl From<Callable> for Value {
    fn from(v: Callable) -> Self {
        Self::Function(Rc::new(v))
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Boolean(b) => Self::Boolean(*b),
            LiteralValue::Number(n) => Self::Number(*n),
            LiteralValue::String(s) => Self::String(Rc::clone(s)),
            LiteralValue::Null => Self::Null,
        }
    }
}

impl Value {
    /// Returns the name of the value's kind, as used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::Function(_) => "function",
        }
    }

    /// Converts the value to `f64`, or returns an error if it is not a
    /// number.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use meth::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Number(2.5).as_number(1).unwrap(), 2.5);
    /// assert!(Value::from("2.5").as_number(1).is_err());
    /// ```
    pub const fn as_number(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            _ => Err(RuntimeError::ExpectedNumber { found: self.type_name(),
                                                    line }),
        }
    }

    /// Returns the object storage, or an error if the value is not an
    /// object.
    pub const fn as_object(&self, line: usize) -> EvalResult<&Object> {
        match self {
            Self::Object(entries) => Ok(entries),
            _ => Err(RuntimeError::ExpectedObject { found: self.type_name(),
                                                    line }),
        }
    }

    /// Returns whether the value counts as true in a condition.
    ///
    /// Numbers are truthy when greater than zero, strings and arrays when
    /// non-empty, objects when they hold an entry. Functions are always
    /// truthy and `null` never is.
    ///
    /// # Example
    /// ```
    /// use meth::interpreter::value::core::Value;
    ///
    /// assert!(Value::Number(3.0).is_truthy());
    /// assert!(!Value::Number(-3.0).is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// assert!(!Value::from(Vec::new()).is_truthy());
    /// assert!(!Value::Null.is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Boolean(b) => *b,
            Self::Number(n) => *n > 0.0,
            Self::String(s) => !s.is_empty(),
            Self::Array(items) => !items.borrow().is_empty(),
            Self::Object(entries) => !entries.borrow().is_empty(),
            Self::Function(_) => true,
        }
    }

    /// Compares two values the way the `equals` method does.
    ///
    /// Booleans, numbers and strings compare by value. Arrays, objects and
    /// functions compare by identity. A number compared with any other
    /// non-null value compares printed forms, so `5` equals `'5'`.
    ///
    /// # Example
    /// ```
    /// use meth::interpreter::value::core::Value;
    ///
    /// assert!(Value::Number(5.0).loose_eq(&Value::from("5")));
    /// assert!(Value::from("5").loose_eq(&Value::Number(5.0)));
    ///
    /// let a = Value::from(vec![Value::Number(1.0)]);
    /// let b = Value::from(vec![Value::Number(1.0)]);
    /// assert!(a.loose_eq(&a.clone()));
    /// assert!(!a.loose_eq(&b));
    /// ```
    #[must_use]
    pub fn loose_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Null, _) | (_, Self::Null) => false,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Number(n), other) | (other, Self::Number(n)) => {
                format_number(*n) == other.to_string()
            },
            _ => self == other,
        }
    }

    /// Converts the value to JSON.
    ///
    /// Integral numbers become JSON integers, non-finite numbers become
    /// `null`, and functions become the string `"[Function]"`. Object key
    /// order is preserved.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Boolean(b) => serde_json::Value::Bool(*b),
            Self::Number(n) => number_to_json(*n),
            Self::String(s) => serde_json::Value::String(s.to_string()),
            Self::Array(items) => items.borrow().iter().map(Self::to_json).collect(),
            Self::Object(entries) => {
                serde_json::Value::Object(entries.borrow()
                                                 .iter()
                                                 .map(|(key, value)| (key.clone(), value.to_json()))
                                                 .collect())
            },
            Self::Function(_) => serde_json::Value::String(FUNCTION_TEXT.to_string()),
        }
    }

    /// Writes the value as it appears inside an array or object.
    ///
    /// Differs from [`Display`](fmt::Display) only for strings, which are
    /// JSON-quoted here.
    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Boolean(b) => f.write_str(if *b { "t" } else { "f" }),
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::String(s) => write!(f, "{}", serde_json::Value::from(&**s)),
            Self::Array(items) => {
                f.write_str("|")?;
                for (index, value) in items.borrow().iter().enumerate() {
                    if index > 0 {
                        f.write_str(",")?;
                    }
                    value.fmt_nested(f)?;
                }
                f.write_str("|")
            },
            Self::Object(entries) => {
                f.write_str("{")?;
                for (index, (key, value)) in entries.borrow().iter().enumerate() {
                    if index > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}:", serde_json::Value::from(key.as_str()))?;
                    value.fmt_nested(f)?;
                }
                f.write_str("}")
            },
            Self::Function(_) => f.write_str(FUNCTION_TEXT),
        }
    }
}

/// Printed form of every function value.
const FUNCTION_TEXT: &str = "[Function]";

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn number_to_json(n: f64) -> serde_json::Value {
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_U64_INT as f64 {
        serde_json::Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n).map_or(serde_json::Value::Null, serde_json::Value::Number)
    }
}

/// Identity equality.
///
/// Scalars compare by value; arrays, objects and functions are equal only
/// when they are the same shared value.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => Rc::ptr_eq(a, b),
            (Self::Object(a), Self::Object(b)) => Rc::ptr_eq(a, b),
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// The printed form, as produced by `_toString` and by the CLI.
///
/// Strings print raw at the top level and JSON-quoted when nested. Booleans
/// print as `t`/`f`, arrays as `|a,b|` and objects as `{"k":v}`.
///
/// # Example
/// ```
/// use meth::interpreter::value::core::Value;
///
/// let array = Value::from(vec![Value::Number(1.0), Value::from("a"), Value::Boolean(true)]);
///
/// assert_eq!(array.to_string(), r#"|1,"a",t|"#);
/// assert_eq!(Value::from("a").to_string(), "a");
/// ```
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            _ => self.fmt_nested(f),
        }
    }
}
