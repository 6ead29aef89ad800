use thiserror::Error;

use crate::error::ParseError;

/// Represents all errors that can occur during evaluation and runtime.
///
/// Every runtime error is fatal. Side effects performed before the error
/// (such as `log` output) stay visible.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Tried to invoke something that is neither a builtin nor a function.
    #[error("Error on line {line}: Unrecognised function type: {found}.")]
    UnrecognisedCallable {
        /// Kind of the value that was called.
        found: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Neither the exact path nor the path with the source extension could
    /// be read.
    #[error("Error on line {line}: Couldn't find module under {name}.")]
    ModuleNotFound {
        /// The requested module name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A loaded module failed to parse.
    #[error("Error on line {line}: Module {name} failed to parse.")]
    InvalidModule {
        /// The requested module name.
        name:   String,
        /// The source line of the `load` expression.
        line:   usize,
        /// The parse failure inside the module.
        #[source]
        source: ParseError,
    },
    /// A numeric value was expected, but not found.
    #[error("Error on line {line}: Expected number, found {found}.")]
    ExpectedNumber {
        /// Kind of the value that was found.
        found: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An object value was expected, but not found.
    #[error("Error on line {line}: Expected object, found {found}.")]
    ExpectedObject {
        /// Kind of the value that was found.
        found: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The wrong number of arguments was supplied to a builtin.
    #[error("Error on line {line}: Argument count mismatch for '{name}': got {found}.")]
    ArgumentCountMismatch {
        /// The builtin's name.
        name:  &'static str,
        /// The number of arguments supplied.
        found: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An assignment path ended at a value that cannot hold the key.
    #[error("Error on line {line}: Cannot assign key {key} on {found}.")]
    InvalidAssignment {
        /// The key that was being set.
        key:   String,
        /// Kind of the value that was found.
        found: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Writing program output failed.
    #[error("Error on line {line}: Failed to write output.")]
    Output {
        /// The source line where the error occurred.
        line:   usize,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}
