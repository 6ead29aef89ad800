/// Core value parsing.
///
/// Provides the `ParseResult` alias, module parsing and the value grammar:
/// base values followed by accessors and call links.
pub mod core;

/// Literal and base value parsing.
///
/// Handles everything a value can start with, including array, object and
/// function literals, variables and argument placeholders.
pub mod literal;

/// Line parsing.
///
/// Implements conditionals, loops, `return` statements, assignments and
/// value statements.
pub mod statement;

/// Line sequence parsing.
///
/// Parses the lines of a module or of a function literal body.
pub mod block;

/// Shared parsing helpers.
///
/// Comma-separated lists, expected tokens and key names.
pub mod utils;
