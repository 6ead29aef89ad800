use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by call argument lists and the tail of array
/// literals. It repeatedly calls `parse_item` to parse one element,
/// expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (e.g., `)` or `|`).
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> Result<Vec<T>, ParseError>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        if finish_list_item(tokens, closing)? {
            break;
        }
    }
    Ok(items)
}

/// Consumes the separator after a list item.
///
/// Returns `true` when the closing token ended the list and `false` when a
/// comma announced another item.
pub(in crate::interpreter::parser) fn finish_list_item<'a, I>(tokens: &mut Peekable<I>,
                                                              closing: &Token)
                                                              -> ParseResult<bool>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Comma, _)) => Ok(false),
        Some((tok, _)) if tok == closing => Ok(true),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected ',' or {closing:?}, found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Consumes the next token, which must equal `expected`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the expected token.
/// - `expected`: The required token.
///
/// # Returns
/// The line of the consumed token.
///
/// # Errors
/// Returns a `ParseError` if the next token differs or the input ends.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token)
                                                    -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, line)) if tok == expected => Ok(*line),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected {expected:?}, found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses a key name and returns it.
///
/// The next token must be an identifier or a keyword; keywords are plain
/// names in key position, so `obj.if` and `{while: 1}` are valid. Leading
/// underscores lex as separate tokens and are joined back onto the name, as
/// in `x._toJSON`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a key name.
///
/// # Returns
/// A `String` containing the name.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token cannot name a key,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_key_name<'a, I>(tokens: &mut Peekable<I>)
                                                            -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Underscore, _)) => Ok(format!("_{}", parse_key_name(tokens)?)),
        Some((tok, line)) => {
            tok.key_name()
               .ok_or_else(|| ParseError::UnexpectedToken { token: format!("Expected name, found {tok:?}"),
                                                            line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}
