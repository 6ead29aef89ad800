use crate::interpreter::{
    evaluator::core::{Context, EvalResult},
    value::{
        array::ARRAY_METHODS,
        boolean::BOOLEAN_METHODS,
        core::Value,
        function::{Arity, BuiltinDef},
        number::NUMBER_METHODS,
        object::OBJECT_METHODS,
        string::STRING_METHODS,
    },
};

/// Defines a static table of builtin methods.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the method.
///
/// The macro produces a `static` slice of [`BuiltinDef`] under the given
/// name; [`lookup`] searches these tables by receiver kind.
macro_rules! method_table {
    (
        $table:ident {
            $(
                $name:literal => {
                    arity: $arity:expr,
                    func: $func:expr $(,)?
                }
            ),* $(,)?
        }
    ) => {
        pub static $table: &[$crate::interpreter::value::function::BuiltinDef] = &[
            $(
                $crate::interpreter::value::function::BuiltinDef {
                    name: $name,
                    arity: $arity,
                    func: $func,
                },
            )*
        ];
    };
}

pub(crate) use method_table;

method_table! {
    COMMON_METHODS {
        "equals"    => { arity: Arity::Exact(1), func: equals },
        "asBool"    => { arity: Arity::Exact(0), func: |_, receiver, _, _| Ok(receiver.is_truthy().into()) },
        "not"       => { arity: Arity::Exact(0), func: |_, receiver, _, _| Ok((!receiver.is_truthy()).into()) },
        "_toString" => { arity: Arity::Exact(0), func: |_, receiver, _, _| Ok(receiver.to_string().into()) },
        "_toJSON"   => { arity: Arity::Exact(0), func: to_json },
    }
}

/// Finds the builtin method `name` for a receiver.
///
/// The receiver's own kind is searched first, then the methods every value
/// carries. `null` has no methods.
///
/// # Example
/// ```
/// use meth::interpreter::value::{core::Value, method::lookup};
///
/// assert!(lookup(&Value::Number(1.0), "add").is_some());
/// assert!(lookup(&Value::from("a"), "equals").is_some());
/// assert!(lookup(&Value::from("a"), "gt").is_none());
/// assert!(lookup(&Value::Null, "equals").is_none());
/// ```
#[must_use]
pub fn lookup(receiver: &Value, name: &str) -> Option<&'static BuiltinDef> {
    let own: &'static [BuiltinDef] = match receiver {
        Value::Null => return None,
        Value::Number(_) => NUMBER_METHODS,
        Value::String(_) => STRING_METHODS,
        Value::Boolean(_) => BOOLEAN_METHODS,
        Value::Array(_) => ARRAY_METHODS,
        Value::Object(_) => OBJECT_METHODS,
        Value::Function(_) => &[],
    };

    own.iter()
       .chain(COMMON_METHODS.iter())
       .find(|def| def.name == name)
}

fn equals(_: &mut Context<'_>, receiver: &Value, args: &[Value], _: usize) -> EvalResult<Value> {
    Ok(receiver.loose_eq(&args[0]).into())
}

fn to_json(_: &mut Context<'_>, receiver: &Value, _: &[Value], _: usize) -> EvalResult<Value> {
    Ok(receiver.to_json().to_string().into())
}
