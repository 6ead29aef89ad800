use crate::interpreter::{
    evaluator::core::{Context, EvalResult},
    value::{core::Value, function::Arity, method::method_table},
};

/// Applies a binary operator to a number receiver and a number operand.
///
/// The generated methods accept exactly one argument, which must be a
/// number. Arithmetic follows `f64` semantics, so dividing by zero yields an
/// infinity or `NaN` rather than an error.
///
/// # Parameters
/// - `receiver`: The number the method was read from.
/// - `args`: Slice containing one argument.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing the computed value.
///
/// # Example
/// ```
/// use meth::run;
///
/// let result = run("return 10.divide(4);", Vec::new(), None, &mut std::io::sink()).unwrap();
///
/// assert_eq!(result.unwrap().to_string(), "2.5");
/// ```
macro_rules! number_operator {
    ($fname:ident, |$a:ident, $b:ident| $body:expr) => {
        fn $fname(_: &mut Context<'_>,
                  receiver: &Value,
                  args: &[Value],
                  line: usize)
                  -> EvalResult<Value> {
            let $a = receiver.as_number(line)?;
            let $b = args[0].as_number(line)?;

            Ok(Value::from($body))
        }
    };
}

number_operator!(add, |a, b| a + b);
number_operator!(minus, |a, b| a - b);
number_operator!(times, |a, b| a * b);
number_operator!(divide, |a, b| a / b);
number_operator!(gt, |a, b| a > b);
number_operator!(gte, |a, b| a >= b);
number_operator!(lt, |a, b| a < b);
number_operator!(lte, |a, b| a <= b);

method_table! {
    NUMBER_METHODS {
        "add"      => { arity: Arity::Exact(1), func: add },
        "plus"     => { arity: Arity::Exact(1), func: add },
        "minus"    => { arity: Arity::Exact(1), func: minus },
        "times"    => { arity: Arity::Exact(1), func: times },
        "multiply" => { arity: Arity::Exact(1), func: times },
        "divide"   => { arity: Arity::Exact(1), func: divide },
        "gt"       => { arity: Arity::Exact(1), func: gt },
        "gte"      => { arity: Arity::Exact(1), func: gte },
        "lt"       => { arity: Arity::Exact(1), func: lt },
        "lte"      => { arity: Arity::Exact(1), func: lte },
    }
}
