use crate::interpreter::{
    evaluator::core::{Context, EvalResult},
    value::{core::Value, function::Arity, method::method_table},
};

method_table! {
    OBJECT_METHODS {
        "get"     => { arity: Arity::Exact(1), func: get },
        "set"     => { arity: Arity::Exact(2), func: set },
        "entries" => { arity: Arity::Exact(0), func: entries },
        "each"    => { arity: Arity::Exact(1), func: |ctx, receiver, args, line| {
            for_each_entry(ctx, receiver, &args[0], line)?;
            Ok(Value::Null)
        } },
        "map"     => { arity: Arity::Exact(1), func: |ctx, receiver, args, line| {
            Ok(for_each_entry(ctx, receiver, &args[0], line)?.into())
        } },
        "extend"  => { arity: Arity::Exact(1), func: extend },
        "flush"   => { arity: Arity::Exact(1), func: flush },
    }
}

/// Reads an entry by key. Only the object's own entries are consulted.
fn get(_: &mut Context<'_>, receiver: &Value, args: &[Value], line: usize) -> EvalResult<Value> {
    let key = args[0].to_string();
    let entries = receiver.as_object(line)?.borrow();

    Ok(entries.get(&key).cloned().unwrap_or(Value::Null))
}

/// Writes an entry and returns the receiver.
fn set(_: &mut Context<'_>, receiver: &Value, args: &[Value], line: usize) -> EvalResult<Value> {
    let key = args[0].to_string();
    receiver.as_object(line)?
            .borrow_mut()
            .insert(key, args[1].clone());
    Ok(receiver.clone())
}

/// Lists the entries as `|key, value|` pairs in insertion order.
fn entries(_: &mut Context<'_>, receiver: &Value, _: &[Value], line: usize) -> EvalResult<Value> {
    let pairs = receiver.as_object(line)?
                        .borrow()
                        .iter()
                        .map(|(key, value)| Value::from(vec![Value::from(key.as_str()), value.clone()]))
                        .collect::<Vec<_>>();
    Ok(pairs.into())
}

/// Returns a new object holding the receiver's entries overlaid with the
/// argument's. Keys of the argument win.
fn extend(_: &mut Context<'_>, receiver: &Value, args: &[Value], line: usize) -> EvalResult<Value> {
    let mut merged = receiver.as_object(line)?.borrow().clone();
    let other = args[0].as_object(line)?.borrow();

    merged.extend(other.iter().map(|(key, value)| (key.clone(), value.clone())));
    Ok(merged.into())
}

/// Replaces the receiver's entries with the argument's, in place.
fn flush(_: &mut Context<'_>, receiver: &Value, args: &[Value], line: usize) -> EvalResult<Value> {
    let replacement = args[0].as_object(line)?.borrow().clone();

    *receiver.as_object(line)?.borrow_mut() = replacement;
    Ok(receiver.clone())
}

/// Calls `callback` with `(value, key)` for every entry.
///
/// The entries are read up front, so the callback may modify the object
/// without affecting the iteration.
fn for_each_entry(ctx: &mut Context<'_>,
                  receiver: &Value,
                  callback: &Value,
                  line: usize)
                  -> EvalResult<Vec<Value>> {
    let entries = receiver.as_object(line)?.borrow().clone();

    entries.into_iter()
           .map(|(key, value)| ctx.execute_function(callback, vec![value, Value::from(key)], line))
           .collect()
}
