/// Core evaluation logic and context management.
///
/// Contains the runtime context, the `Flow` signal and the execution of
/// statement lists against a scope.
pub mod core;

/// Statement evaluation.
///
/// Implements assignments, `return`, conditionals and loops.
pub mod statement;

/// Expression resolution.
///
/// Produces the value of an expression: literals, variables, placeholders,
/// calls and path application.
pub mod resolve;

/// Function invocation.
///
/// Runs closures in fresh scopes and dispatches bound builtin methods after
/// checking their arity.
pub mod function;

/// Module loading.
///
/// Resolves `load` expressions to the builtin `utils` module or to a source
/// file run as an independent program.
pub mod module;
