use indexmap::IndexMap;

use crate::{
    ast::{Accessor, Expr, ExprKind, Placeholder},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        scope::Scope,
        value::{core::Value, function::Callable},
    },
};

impl Context<'_> {
    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The base
    /// value is produced according to the expression kind and the
    /// expression's path is then applied to it.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `scope`: The active scope.
    pub fn resolve_value(&mut self, expr: &Expr, scope: &Scope) -> EvalResult<Value> {
        let base = match &expr.kind {
            ExprKind::Literal(literal) => Value::from(literal),
            ExprKind::Array(elements) => {
                let values = elements.iter()
                                     .map(|element| self.resolve_value(element, scope))
                                     .collect::<EvalResult<Vec<_>>>()?;
                values.into()
            },
            ExprKind::Object(entries) => {
                let mut object = IndexMap::with_capacity(entries.len());
                for (key, value) in entries {
                    object.insert(key.clone(), self.resolve_value(value, scope)?);
                }
                object.into()
            },
            ExprKind::Function(body) => Callable::Closure { body:  body.clone(),
                                                            scope: scope.clone(), }.into(),
            ExprKind::Variable(accessor) => self.resolve_variable(accessor, scope)?,
            ExprKind::Parent => scope.parent().map_or(Value::Null, Scope::as_value),
            ExprKind::Argument(placeholder) => self.resolve_argument(placeholder, scope)?,
            ExprKind::Load(name) => {
                let name = self.resolve_value(name, scope)?;
                self.load_module(&name.to_string(), expr.line, scope)?
            },
            ExprKind::Returning(value) => {
                let value = self.resolve_value(value, scope)?;
                scope.set_return_value(value.clone());
                value
            },
            ExprKind::FunctionExecution { subject, args } => {
                let (callee, rest) = match args.split_first() {
                    Some((callee, rest)) => (self.resolve_value(callee, scope)?, rest),
                    None => (Value::Null, &[][..]),
                };

                let mut values = Vec::with_capacity(args.len());
                values.push(self.resolve_value(subject, scope)?);
                for arg in rest {
                    values.push(self.resolve_value(arg, scope)?);
                }

                self.execute_function(&callee, values, expr.line)?
            },
            ExprKind::MethodExecution { subject, args } => {
                let callee = self.resolve_value(subject, scope)?;
                let values = args.iter()
                                 .map(|arg| self.resolve_value(arg, scope))
                                 .collect::<EvalResult<Vec<_>>>()?;

                self.execute_function(&callee, values, expr.line)?
            },
        };

        self.apply_path(base, &expr.path, scope)
    }

    /// Applies accessors to a value, in order.
    ///
    /// Reads are soft: a missing key yields `null`, and reading from `null`
    /// yields `null` again.
    pub fn apply_path(&mut self,
                      mut value: Value,
                      path: &[Accessor],
                      scope: &Scope)
                      -> EvalResult<Value> {
        for accessor in path {
            let key = self.resolve_key(accessor, scope)?;
            value = value.get(&key);
        }
        Ok(value)
    }

    /// Produces the key an accessor denotes.
    ///
    /// `.name` is the string `name`; `[expr]` is the value of `expr`.
    pub fn resolve_key(&mut self, accessor: &Accessor, scope: &Scope) -> EvalResult<Value> {
        match accessor {
            Accessor::Name(name) => Ok(Value::from(name.as_str())),
            Accessor::Index(expr) => self.resolve_value(expr, scope),
        }
    }

    /// Reads a variable of the active scope.
    ///
    /// Only the scope's own variables are consulted; a missing variable is
    /// `null`.
    pub fn resolve_variable(&mut self, accessor: &Accessor, scope: &Scope) -> EvalResult<Value> {
        let key = self.resolve_key(accessor, scope)?;
        Ok(scope.lookup(&key.to_string()))
    }

    /// Resolves an argument placeholder.
    ///
    /// A placeholder that was already resolved in this activation yields the
    /// same value again without consuming another argument. Otherwise the
    /// explicit slot, or the next positional slot, is read; an absent slot
    /// falls back to the default expression or `null`.
    fn resolve_argument(&mut self, placeholder: &Placeholder, scope: &Scope) -> EvalResult<Value> {
        if let Some(value) = scope.resolved_argument(placeholder.id) {
            return Ok(value);
        }

        let value = match (scope.take_argument(placeholder.index), &placeholder.default) {
            (Some(value), _) => value,
            (None, Some(default)) => self.resolve_value(default, scope)?,
            (None, None) => Value::Null,
        };

        scope.cache_argument(placeholder.id, value.clone());
        Ok(value)
    }
}
