use crate::{
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{core::Value, function::Arity, method::method_table},
    },
    util::num::usize_to_f64,
};

method_table! {
    ARRAY_METHODS {
        "push"   => { arity: Arity::Exact(1), func: push },
        "concat" => { arity: Arity::Exact(1), func: concat },
        "each"   => { arity: Arity::Exact(1), func: |ctx, receiver, args, line| {
            for_each_element(ctx, receiver, &args[0], line)?;
            Ok(Value::Null)
        } },
        "map"    => { arity: Arity::Exact(1), func: |ctx, receiver, args, line| {
            Ok(for_each_element(ctx, receiver, &args[0], line)?.into())
        } },
    }
}

/// Appends the argument and returns the receiver.
fn push(_: &mut Context<'_>, receiver: &Value, args: &[Value], _: usize) -> EvalResult<Value> {
    if let Value::Array(items) = receiver {
        items.borrow_mut().push(args[0].clone());
    }
    Ok(receiver.clone())
}

/// Joins two arrays into a new one.
///
/// Any other operand is pushed onto the receiver, which is then returned.
fn concat(_: &mut Context<'_>, receiver: &Value, args: &[Value], _: usize) -> EvalResult<Value> {
    let Value::Array(items) = receiver else {
        return Ok(Value::Null);
    };

    if let Value::Array(other) = &args[0] {
        let mut joined = items.borrow().clone();
        joined.extend(other.borrow().iter().cloned());
        return Ok(joined.into());
    }

    items.borrow_mut().push(args[0].clone());
    Ok(receiver.clone())
}

/// Calls `callback` with `(element, index)` for every element.
///
/// The elements are read up front, so the callback may modify the array
/// without affecting the iteration.
///
/// # Returns
/// The callback's results in order.
fn for_each_element(ctx: &mut Context<'_>,
                    receiver: &Value,
                    callback: &Value,
                    line: usize)
                    -> EvalResult<Vec<Value>> {
    let Value::Array(items) = receiver else {
        return Ok(Vec::new());
    };
    let elements = items.borrow().clone();

    elements.into_iter()
            .enumerate()
            .map(|(index, element)| {
                ctx.execute_function(callback, vec![element, Value::Number(usize_to_f64(index))], line)
            })
            .collect()
}
