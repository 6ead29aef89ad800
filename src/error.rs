use std::path::PathBuf;

use thiserror::Error;

/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include unexpected tokens, unterminated literals and
/// unbalanced delimiters, all detected before evaluation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and execution:
/// calling a value that is not a function, failing to find a module, and
/// operand kind mismatches in builtin methods.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of a complete run, from reading the entry file to evaluation.
#[derive(Debug, Error)]
pub enum Error {
    /// The program did not parse.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The program failed while running.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    /// The entry source file could not be read.
    #[error("Failed to read the input file '{}'. Perhaps this file does not exist?", .path.display())]
    Read {
        /// The file that was requested.
        path:   PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}
