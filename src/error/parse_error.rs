use thiserror::Error;

/// Represents all errors that can occur during lexing or parsing.
///
/// A parse error aborts the whole run: no partial AST is ever produced.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Found an unexpected token while parsing.
    #[error("Error on line {line}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// Description of what was found and what was expected.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    #[error("Error on line {line}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The lexer met text that starts no token, such as an unterminated
    /// string.
    #[error("Error on line {line}: Invalid character sequence: {slice}")]
    InvalidCharacter {
        /// The offending source text.
        slice: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A function-style call `x@()` was written without a callee.
    #[error("Error on line {line}: Function-style call needs a callee. Example: x@(f)")]
    MissingCallee {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The left-hand side of `=` cannot be written to.
    #[error("Error on line {line}: Invalid assignment target. Assign to a key of parent instead, e.g. parent.x = 1;")]
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A placeholder index is not a non-negative integer.
    #[error("Error on line {line}: Placeholder index {index} is not a non-negative integer.")]
    InvalidArgumentIndex {
        /// The written index.
        index: f64,
        /// The source line where the error occurred.
        line:  usize,
    },
}
