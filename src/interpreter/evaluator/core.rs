use std::{io::Write, path::Path, rc::Rc};

use crate::{
    ast::Statement,
    error::RuntimeError,
    interpreter::{scope::Scope, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How a statement list finished.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Every statement ran.
    Completed,
    /// A `return` statement stopped execution with this value.
    Returned(Value),
}

/// Stores the runtime evaluation context.
///
/// Program state lives in scopes and values; the context only carries the
/// sink that `log` writes to.
///
/// ## Usage
///
/// A `Context` is created once per run and passed to every evaluation
/// routine, including builtin methods that call back into scripts.
pub struct Context<'out> {
    output: &'out mut dyn Write,
}

impl<'out> Context<'out> {
    /// Creates a context writing program output to `output`.
    #[must_use]
    pub fn new(output: &'out mut dyn Write) -> Self {
        Self { output }
    }

    /// Writes one line of program output.
    ///
    /// # Errors
    /// Returns `RuntimeError::Output` if the sink fails.
    pub fn write_line(&mut self, text: &str, line: usize) -> EvalResult<()> {
        writeln!(self.output, "{text}").map_err(|source| RuntimeError::Output { line, source })
    }

    /// Runs statements in a new scope.
    ///
    /// This is the entry point for modules and function calls. The scope is
    /// created with the given parent, positional arguments and origin.
    ///
    /// # Parameters
    /// - `lines`: Statements to execute.
    /// - `args`: Positional arguments for placeholders.
    /// - `parent`: The lexically enclosing scope, if any.
    /// - `origin`: The source file being run; inherited from `parent` when
    ///   `None`.
    ///
    /// # Returns
    /// The value of a terminating `return`, else the last value stored by
    /// `returning`, else `None`; together with the scope that was used.
    pub fn run_lines(&mut self,
                     lines: &[Statement],
                     args: Vec<Value>,
                     parent: Option<Scope>,
                     origin: Option<Rc<Path>>)
                     -> EvalResult<(Option<Value>, Scope)> {
        let scope = Scope::new(parent, args, origin);

        let result = match self.run_block(lines, &scope)? {
            Flow::Returned(value) => Some(value),
            Flow::Completed => scope.return_value(),
        };

        Ok((result, scope))
    }

    /// Runs statements against an existing scope.
    ///
    /// Conditional and loop bodies run this way, so their assignments are
    /// visible in the enclosing code.
    ///
    /// # Returns
    /// `Flow::Returned` as soon as a `return` runs, otherwise
    /// `Flow::Completed`.
    pub fn run_block(&mut self, lines: &[Statement], scope: &Scope) -> EvalResult<Flow> {
        for statement in lines {
            if let Flow::Returned(value) = self.eval_statement(statement, scope)? {
                return Ok(Flow::Returned(value));
            }
        }
        Ok(Flow::Completed)
    }
}
