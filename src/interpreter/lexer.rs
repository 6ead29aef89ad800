use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Number literal tokens, such as `5`, `-2` or `0.25`.
    #[regex(r"-?[0-9]+(\.[0-9]+)?", parse_number)]
    Number(f64),
    /// Single-quoted string literal tokens. The quotes are stripped.
    #[regex(r"'[^']*'", parse_string, allow_greedy = true)]
    Str(String),
    /// Boolean literal tokens: `t` or `f`.
    #[token("t", parse_bool, priority = 3)]
    #[token("f", parse_bool, priority = 3)]
    Bool(bool),
    /// `null`
    #[token("null")]
    Null,
    /// `parent`
    #[token("parent")]
    Parent,
    /// `load`
    #[token("load")]
    Load,
    /// `return`
    #[token("return")]
    Return,
    /// `returning`
    #[token("returning")]
    Returning,
    /// `if`
    #[token("if")]
    If,
    /// `while`
    #[token("while")]
    While,
    /// Identifier tokens; variable or key names such as `x` or `push`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// ```text
    /// /* Multi line comments. */
    /// ```
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/", |lex| {
        let comment      = lex.slice();
        let newlines     = comment.chars().filter(|&c| c == '\n').count();
        lex.extras.line += newlines;
        logos::Skip
    })]
    MultiLineComment,
    /// `.`
    #[token(".")]
    Dot,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `=`
    #[token("=")]
    Equals,
    /// `@`
    #[token("@")]
    At,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `|`
    #[token("|")]
    Pipe,
    /// `_`
    #[token("_")]
    Underscore,

    /// Line breaks only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns the text of a token that can serve as a key name.
    ///
    /// Identifiers and keywords are both valid after `.` and as object
    /// literal keys, so `{if: 1}.if` works.
    #[must_use]
    pub fn key_name(&self) -> Option<String> {
        let name = match self {
            Self::Identifier(name) => return Some(name.clone()),
            Self::Bool(true) => "t",
            Self::Bool(false) => "f",
            Self::Null => "null",
            Self::Parent => "parent",
            Self::Load => "load",
            Self::Return => "return",
            Self::Returning => "returning",
            Self::If => "if",
            Self::While => "while",
            _ => return None,
        };
        Some(name.to_string())
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Automatically resets or increments as newlines are processed.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Splits source text into `(token, line)` pairs.
///
/// # Errors
/// Returns `ParseError::InvalidCharacter` for text that starts no token,
/// including an unterminated string literal.
///
/// # Example
/// ```
/// use meth::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x = 'hi'; // done").unwrap();
/// let kinds = tokens.into_iter().map(|(token, _)| token).collect::<Vec<_>>();
///
/// assert_eq!(kinds,
///            vec![Token::Identifier("x".into()),
///                 Token::Equals,
///                 Token::Str("hi".into()),
///                 Token::Semicolon]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            return Err(ParseError::InvalidCharacter { slice: lexer.slice().to_string(),
                                                      line:  lexer.extras.line, });
        }
    }

    Ok(tokens)
}

/// Parses a number literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
/// Strips the quotes from a string literal and counts the lines it spans.
fn parse_string(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    lex.extras.line += slice.chars().filter(|&c| c == '\n').count();
    slice[1..slice.len() - 1].to_string()
}
/// Parses a boolean literal from the current token slice (`t` or `f`).
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(true)` if the slice is `"t"`.
/// - `Some(false)` if the slice is `"f"`.
/// - `None` otherwise.
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "t" => Some(true),
        "f" => Some(false),
        _ => None,
    }
}
