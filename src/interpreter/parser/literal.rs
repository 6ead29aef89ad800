use std::iter::Peekable;

use crate::{
    ast::{Accessor, Expr, ExprKind, LiteralValue, Placeholder, PlaceholderId},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ParseResult, parse_value},
            utils::{expect, finish_list_item, parse_comma_separated, parse_key_name},
        },
    },
    util::num::f64_to_index,
};

/// Parses a base value: everything a value can start with.
///
/// Base values are literals, array and object literals, function literals,
/// variables, argument placeholders, `parent`, `load`, `returning` and
/// parenthesised values.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a value.
///
/// # Returns
/// The parsed expression with an empty access path, except for a
/// parenthesised value which keeps its own path.
///
/// # Errors
/// Returns a `ParseError` if no value starts here.
pub fn parse_base_value<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((token, line)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { line: 0 });
    };
    let line = *line;

    let kind = match token {
        Token::LParen => {
            let inner = parse_value(tokens)?;
            expect(tokens, &Token::RParen)?;
            return Ok(inner);
        },
        Token::Number(n) => ExprKind::Literal(LiteralValue::Number(*n)),
        Token::Str(s) => ExprKind::Literal(LiteralValue::from(s.as_str())),
        Token::Bool(b) => ExprKind::Literal(LiteralValue::Boolean(*b)),
        Token::Null => ExprKind::Literal(LiteralValue::Null),
        Token::Parent => ExprKind::Parent,
        Token::Load => ExprKind::Load(Box::new(parse_value(tokens)?)),
        Token::Returning => ExprKind::Returning(Box::new(parse_value(tokens)?)),
        Token::Underscore => ExprKind::Argument(parse_placeholder(tokens)?),
        Token::Pipe => ExprKind::Array(parse_array(tokens)?),
        Token::LBrace => ExprKind::Object(parse_object(tokens)?),
        Token::Less => ExprKind::Function(parse_block(tokens)?),
        Token::Identifier(name) => ExprKind::Variable(Accessor::Name(name.clone())),
        Token::Dot => ExprKind::Variable(Accessor::Name(parse_key_name(tokens)?)),
        Token::LBracket => {
            let key = parse_value(tokens)?;
            expect(tokens, &Token::RBracket)?;
            ExprKind::Variable(Accessor::Index(Box::new(key)))
        },
        Token::Return => {
            return Err(ParseError::UnexpectedToken { token: "'return' outside statement position".to_string(),
                                                     line });
        },
        other => {
            return Err(ParseError::UnexpectedToken { token: format!("Expected value, found {other:?}"),
                                                     line });
        },
    };

    Ok(Expr::new(kind, line))
}

/// Parses the elements of an array literal after its opening `|`.
///
/// A `|` right after the opening one either closes an empty array or opens a
/// nested array as the first element; the nested reading is tried first.
///
/// Grammar: `array := "|" (value ("," value)*)? "|"`
fn parse_array<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Pipe, _)) = tokens.peek() {
        let mut lookahead = tokens.clone();
        let Ok(first) = parse_value(&mut lookahead) else {
            tokens.next();
            return Ok(Vec::new());
        };
        *tokens = lookahead;

        let mut elements = vec![first];
        if !finish_list_item(tokens, &Token::Pipe)? {
            elements.extend(parse_comma_separated(tokens, parse_value, &Token::Pipe)?);
        }
        return Ok(elements);
    }

    parse_comma_separated(tokens, parse_value, &Token::Pipe)
}

/// Parses the entries of an object literal after its opening `{`.
///
/// Keys are names (identifiers or keywords). A trailing comma is allowed.
///
/// Grammar: `object := "{" (name ":" value ("," name ":" value)* ","?)? "}"`
fn parse_object<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<(String, Expr)>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut entries = Vec::new();

    loop {
        if let Some((Token::RBrace, _)) = tokens.peek() {
            tokens.next();
            break;
        }

        let key = parse_key_name(tokens)?;
        expect(tokens, &Token::Colon)?;
        entries.push((key, parse_value(tokens)?));

        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((Token::RBrace, _)) => break,
            Some((tok, line)) => {
                return Err(ParseError::UnexpectedToken { token: format!("Expected ',' or '}}', found {tok:?}"),
                                                         line:  *line, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
        }
    }

    Ok(entries)
}

/// Parses an argument placeholder after its opening `_`.
///
/// An optional number picks an explicit argument index; an optional value
/// (after an optional `,`) is the default used when the argument is absent.
///
/// Grammar: `placeholder := "_" number? ","? value? "_"`
///
/// # Errors
/// Returns `ParseError::InvalidArgumentIndex` if the index is not a
/// non-negative integer.
fn parse_placeholder<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Placeholder>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let index = if let Some((Token::Number(n), line)) = tokens.peek() {
        let (n, line) = (*n, *line);
        tokens.next();
        Some(f64_to_index(n).ok_or(ParseError::InvalidArgumentIndex { index: n, line })?)
    } else {
        None
    };

    if let Some((Token::Comma, _)) = tokens.peek() {
        tokens.next();
    }

    let default = match tokens.peek() {
        Some((Token::Underscore, _)) => None,
        _ => Some(Box::new(parse_value(tokens)?)),
    };
    expect(tokens, &Token::Underscore)?;

    Ok(Placeholder { id: PlaceholderId::fresh(),
                     index,
                     default })
}

