use crate::{
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{core::Value, function::Arity, method::method_table},
    },
    util::num::{parse_float_prefix, relative_offset, usize_to_f64},
};

method_table! {
    STRING_METHODS {
        "add"      => { arity: Arity::Exact(1), func: |_, receiver, args, _| Ok(format!("{receiver}{}", args[0]).into()) },
        "slice"    => { arity: Arity::OneOf(&[1, 2]), func: slice },
        "asNumber" => { arity: Arity::Exact(0), func: as_number },
    }
}

/// Returns the number of characters in a string.
#[must_use]
pub fn length(text: &str) -> Value {
    Value::Number(usize_to_f64(text.chars().count()))
}

/// Returns the character at `index` as a string, or `null` past the end.
#[must_use]
pub fn char_at(text: &str, index: usize) -> Value {
    text.chars()
        .nth(index)
        .map_or(Value::Null, |c| Value::from(c.to_string()))
}

/// Extracts a section of a string.
///
/// Offsets count characters. Negative offsets count back from the end, and
/// both offsets are clamped to the string. An end before the start yields
/// the empty string.
fn slice(_: &mut Context<'_>, receiver: &Value, args: &[Value], line: usize) -> EvalResult<Value> {
    let Value::String(text) = receiver else {
        return Ok(Value::Null);
    };
    let len = text.chars().count();

    let start = relative_offset(args[0].as_number(line)?, len);
    let end = match args.get(1) {
        Some(end) => relative_offset(end.as_number(line)?, len),
        None => len,
    };

    if start >= end {
        return Ok(Value::from(""));
    }
    Ok(text.chars()
           .skip(start)
           .take(end - start)
           .collect::<String>()
           .into())
}

/// Parses the longest numeric prefix of the string, or yields `null`.
fn as_number(_: &mut Context<'_>, receiver: &Value, _: &[Value], _: usize) -> EvalResult<Value> {
    let Value::String(text) = receiver else {
        return Ok(Value::Null);
    };
    Ok(parse_float_prefix(text).map_or(Value::Null, Value::Number))
}
