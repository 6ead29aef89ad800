use crate::{
    ast::{Accessor, AssignTarget, Expr, Statement},
    interpreter::{
        evaluator::core::{Context, EvalResult, Flow},
        scope::Scope,
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a single statement.
    ///
    /// Handles assignments, `return`, conditionals, loops and plain
    /// expression statements. Statements may modify the scope or stop the
    /// enclosing activation.
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    /// - `scope`: The active scope.
    ///
    /// # Returns
    /// `Flow::Returned` when the statement (or a nested body) ran `return`.
    pub fn eval_statement(&mut self, statement: &Statement, scope: &Scope) -> EvalResult<Flow> {
        match statement {
            Statement::Expression { expr, .. } => {
                self.resolve_value(expr, scope)?;
                Ok(Flow::Completed)
            },
            Statement::Assignment { target,
                                    path,
                                    value,
                                    line, } => {
                self.eval_assignment(target, path, value, *line, scope)?;
                Ok(Flow::Completed)
            },
            Statement::Return { value, .. } => {
                let value = self.resolve_value(value, scope)?;
                scope.set_return_value(value.clone());
                Ok(Flow::Returned(value))
            },
            Statement::If { condition, body, .. } => {
                if self.resolve_value(condition, scope)?.is_truthy() {
                    return self.run_block(body, scope);
                }
                Ok(Flow::Completed)
            },
            Statement::While { condition, body, .. } => {
                while self.resolve_value(condition, scope)?.is_truthy() {
                    if let Flow::Returned(value) = self.run_block(body, scope)? {
                        return Ok(Flow::Returned(value));
                    }
                }
                Ok(Flow::Completed)
            },
        }
    }

    /// Performs an assignment.
    ///
    /// - `= value;` replaces the scope's variables with the object's entries.
    /// - `name = value;` sets a variable of the active scope.
    /// - With a path, the container is found by walking all accessors but
    ///   the last from the variable (or from `parent`), and the last key is
    ///   set on it.
    ///
    /// The container and key are resolved before the value, so placeholders
    /// on the left consume arguments first.
    fn eval_assignment(&mut self,
                       target: &AssignTarget,
                       path: &[Accessor],
                       value: &Expr,
                       line: usize,
                       scope: &Scope)
                       -> EvalResult<()> {
        let (container, key) = match (target, path.split_last()) {
            (AssignTarget::Scope, _) => {
                let value = self.resolve_value(value, scope)?;
                let entries = value.as_object(line)?.borrow().clone();
                scope.replace_entries(entries);
                return Ok(());
            },
            (AssignTarget::Variable(accessor), None) => {
                let key = self.resolve_key(accessor, scope)?;
                let value = self.resolve_value(value, scope)?;
                scope.set(key.to_string(), value);
                return Ok(());
            },
            (AssignTarget::Variable(accessor), Some((last, walk))) => {
                let start = self.resolve_variable(accessor, scope)?;
                (self.apply_path(start, walk, scope)?, last)
            },
            (AssignTarget::Parent, Some((last, walk))) => {
                let start = scope.parent().map_or(Value::Null, Scope::as_value);
                (self.apply_path(start, walk, scope)?, last)
            },
            (AssignTarget::Parent, None) => return Ok(()),
        };

        let key = self.resolve_key(key, scope)?;
        let value = self.resolve_value(value, scope)?;
        container.set_member(&key, value, line)
    }
}
