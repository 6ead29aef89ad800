/// The evaluator module executes statements and produces values.
///
/// The evaluator walks the statement lists produced by the parser against a
/// scope, resolves expressions, calls functions and loads modules. It is the
/// core execution engine of the interpreter.
///
/// # Responsibilities
/// - Executes assignments, conditionals, loops and `return`.
/// - Resolves expressions, placeholders and access paths.
/// - Reports runtime errors such as calling a value that is not a function.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// strings, identifiers, keywords and punctuation. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with their source line.
/// - Skips whitespace and comments.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// the statement lists that the evaluator runs.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (statements, expressions).
/// - Validates correct grammar and syntax, reporting errors with location info.
pub mod parser;
/// Activation environments.
///
/// A scope holds the variables of one module run or function call, its
/// positional arguments and its return value.
pub mod scope;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the values scripts work with: null, booleans,
/// numbers, strings, arrays, objects and functions. It also provides
/// truthiness, equality, the printed and JSON forms, path access and the
/// builtin methods of every kind.
pub mod value;
