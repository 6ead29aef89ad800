//! # meth
//!
//! meth is a small, dynamically typed scripting language written in Rust.
//! Everything is done through methods: `5.add(2)`, `list.push(x)`,
//! `'abc'.slice(1)`. Programs are parsed into statement lists and run by a
//! tree-walking evaluator over shared, mutable values.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::{fs, io::Write, path::Path, rc::Rc};

use crate::{
    ast::Block,
    error::{Error, ParseError},
    interpreter::{evaluator::core::Context, parser::core::parse_module, value::core::Value},
};

/// Defines the structure of parsed code.
///
/// This module declares the statement and expression types that represent
/// the syntactic structure of source code as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
/// - Gives placeholders a stable identity for argument memoization.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including error kinds, descriptions, and
/// source locations for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, scopes and value
/// representations to provide a complete runtime for source code
/// evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for numeric conversion and formatting.
///
/// This module provides helpers used throughout the interpreter: safe
/// conversions between `f64` and indices, relative offsets, and the printed
/// form of numbers.
pub mod util;

/// Parses a program without running it.
///
/// # Example
/// ```
/// let program = meth::parse("x = 5; return x;").unwrap();
/// assert_eq!(program.len(), 2);
/// ```
pub fn parse(source: &str) -> Result<Block, ParseError> {
    parse_module(source)
}

/// Runs a program and returns its result.
///
/// The program runs in a fresh top-level scope with `args` as its
/// positional arguments. `origin` names the file the source came from; it is
/// the base for relative `load` paths, which otherwise resolve against the
/// working directory. Output of `log` is written to `out`.
///
/// # Returns
/// The value of a top-level `return`, else the last value stored with
/// `returning`, else `None`.
///
/// # Errors
/// Returns an error if parsing fails or a runtime error occurs. Output
/// written before the error stays in `out`.
///
/// # Examples
/// ```
/// use meth::{interpreter::value::core::Value, run};
///
/// let mut out = Vec::new();
/// let source = "log = (load 'utils').log; log('hi'); return _,0_.add(1);";
/// let result = run(source, vec![Value::Number(41.0)], None, &mut out).unwrap();
///
/// assert_eq!(result.unwrap().to_string(), "42");
/// assert_eq!(String::from_utf8(out).unwrap(), "hi\n");
///
/// // Calling something that is not a function is a runtime error.
/// assert!(run("x = 5; x();", Vec::new(), None, &mut std::io::sink()).is_err());
/// ```
pub fn run(source: &str,
           args: Vec<Value>,
           origin: Option<&Path>,
           out: &mut dyn Write)
           -> Result<Option<Value>, Error> {
    let lines = parse_module(source)?;
    let mut context = Context::new(out);

    let (result, _) = context.run_lines(&lines, args, None, origin.map(Rc::from))?;
    Ok(result)
}

/// Reads a program from a file and runs it with the file as its origin.
///
/// # Errors
/// Returns `Error::Read` if the file cannot be read, and any error `run`
/// returns.
pub fn run_file(path: &Path, args: Vec<Value>, out: &mut dyn Write) -> Result<Option<Value>, Error> {
    let source = fs::read_to_string(path).map_err(|source| Error::Read { path: path.to_path_buf(),
                                                                         source })?;
    tracing::debug!(path = %path.display(), "running file");

    run(&source, args, Some(path), out)
}
