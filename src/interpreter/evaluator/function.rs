use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{core::Value, function::Callable},
    },
};

impl Context<'_> {
    /// Invokes a callable value.
    ///
    /// A bound builtin has its arity checked and is called with its
    /// receiver. A closure runs its body in a new scope whose parent is the
    /// scope the closure was defined in; a closure that returns nothing
    /// yields `null`.
    ///
    /// # Parameters
    /// - `callee`: The value being called.
    /// - `args`: Evaluated argument values.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// - `RuntimeError::UnrecognisedCallable` if `callee` is not a function.
    /// - `RuntimeError::ArgumentCountMismatch` if a builtin's arity is not
    ///   satisfied.
    /// - Any error raised while running the function.
    pub fn execute_function(&mut self,
                            callee: &Value,
                            args: Vec<Value>,
                            line: usize)
                            -> EvalResult<Value> {
        let Value::Function(callable) = callee else {
            return Err(RuntimeError::UnrecognisedCallable { found: callee.type_name(),
                                                            line });
        };

        match callable.as_ref() {
            Callable::Builtin { receiver, def } => {
                tracing::trace!(name = def.name, args = args.len(), line, "calling builtin");

                if !def.arity.check(args.len()) {
                    return Err(RuntimeError::ArgumentCountMismatch { name: def.name,
                                                                     found: args.len(),
                                                                     line });
                }
                (def.func)(self, receiver, &args, line)
            },
            Callable::Closure { body, scope } => {
                tracing::trace!(args = args.len(), line, "calling function");

                let (result, _) = self.run_lines(body, args, Some(scope.clone()), None)?;
                Ok(result.unwrap_or(Value::Null))
            },
        }
    }
}
