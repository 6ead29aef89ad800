use std::fmt;

use crate::{
    ast::Block,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        scope::Scope,
        value::core::Value,
    },
};

/// Type alias for builtin method handlers.
///
/// A builtin receives the evaluation context, its bound receiver, the
/// evaluated arguments and the line number of the call.
pub type BuiltinFn = fn(&mut Context<'_>, &Value, &[Value], usize) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `OneOf(slice)` means the builtin accepts any arity listed in `slice`.
/// - `Any` accepts every argument count.
#[derive(Debug, Clone, Copy)]
pub enum Arity {
    Exact(usize),
    OneOf(&'static [usize]),
    Any,
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// Returns `true` if the count is permitted, `false` otherwise.
    #[must_use]
    pub fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::OneOf(arr) => arr.contains(&n),
            Self::Any => true,
        }
    }
}

/// Static description of a builtin method.
pub struct BuiltinDef {
    /// Name the method is reached by.
    pub name:  &'static str,
    /// Accepted argument counts.
    pub arity: Arity,
    /// Implementation.
    pub func:  BuiltinFn,
}

impl fmt::Debug for BuiltinDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuiltinDef")
         .field("name", &self.name)
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}

/// A callable value.
pub enum Callable {
    /// A function literal together with the scope it was defined in.
    ///
    /// Each call runs the body in a new scope whose parent is `scope`.
    Closure {
        /// The function literal's statements.
        body:  Block,
        /// The defining scope.
        scope: Scope,
    },
    /// A builtin method bound to the value it was read from.
    Builtin {
        /// The value the method was looked up on.
        receiver: Value,
        /// The method itself.
        def:      &'static BuiltinDef,
    },
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closure { body, .. } => {
                f.debug_struct("Closure")
                 .field("statements", &body.len())
                 .finish_non_exhaustive()
            },
            Self::Builtin { def, .. } => {
                f.debug_struct("Builtin")
                 .field("name", &def.name)
                 .finish_non_exhaustive()
            },
        }
    }
}
