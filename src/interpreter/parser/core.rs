use std::iter::Peekable;

use crate::{
    ast::{Accessor, Block, Expr, ExprKind},
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::{
            block::parse_lines,
            literal::parse_base_value,
            utils::{expect, parse_comma_separated, parse_key_name},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete module from source text.
///
/// The source is tokenized and parsed as a sequence of lines until the end
/// of input. Any failure aborts the whole parse: no partial module is
/// returned.
///
/// # Parameters
/// - `source`: The program text.
///
/// # Returns
/// The module's statements.
///
/// # Example
/// ```
/// use meth::interpreter::parser::core::parse_module;
///
/// let module = parse_module("x = 5; return x;").unwrap();
/// assert_eq!(module.len(), 2);
///
/// assert!(parse_module("x = ;").is_err());
/// ```
pub fn parse_module(source: &str) -> ParseResult<Block> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();

    Ok(parse_lines(&mut iter, None)?.into())
}

/// Parses a full value.
///
/// A value is a base value followed by accessors and then any number of
/// call links. Each link is either method-style `(args)`, invoking the value
/// built so far, or function-style `@(callee, args)`, invoking the first
/// argument with the value built so far prepended. Every link may be
/// followed by further accessors.
///
/// Grammar: `value := base accessor* ("@"? "(" list ")" accessor*)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// Returns `ParseError::MissingCallee` for `x@()` and propagates any error
/// from the base value, accessors or arguments.
pub fn parse_value<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut expr = parse_base_value(tokens)?;
    expr.path.extend(parse_accessors(tokens)?);

    loop {
        let (function_style, line) = match tokens.peek() {
            Some((Token::At, line)) => (true, *line),
            Some((Token::LParen, line)) => (false, *line),
            _ => break,
        };
        if function_style {
            tokens.next();
        }
        expect(tokens, &Token::LParen)?;

        let args = parse_comma_separated(tokens, parse_value, &Token::RParen)?;
        let kind = if function_style {
            if args.is_empty() {
                return Err(ParseError::MissingCallee { line });
            }
            ExprKind::FunctionExecution { subject: Box::new(expr),
                                          args }
        } else {
            ExprKind::MethodExecution { subject: Box::new(expr),
                                        args }
        };

        expr = Expr { kind,
                      path: parse_accessors(tokens)?,
                      line };
    }

    Ok(expr)
}

/// Parses zero or more accessors.
///
/// Grammar: `accessors := ("." name | "[" value "]")*`
pub fn parse_accessors<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Accessor>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut path = Vec::new();
    while let Some(accessor) = parse_accessor(tokens)? {
        path.push(accessor);
    }
    Ok(path)
}

/// Parses one accessor if the next token starts one.
///
/// Returns `Ok(None)` without consuming input otherwise.
pub fn parse_accessor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Accessor>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Dot, _)) => {
            tokens.next();
            Ok(Some(Accessor::Name(parse_key_name(tokens)?)))
        },
        Some((Token::LBracket, _)) => {
            tokens.next();
            let index = parse_value(tokens)?;
            expect(tokens, &Token::RBracket)?;
            Ok(Some(Accessor::Index(Box::new(index))))
        },
        _ => Ok(None),
    }
}
