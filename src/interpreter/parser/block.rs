use std::iter::Peekable;

use crate::{
    ast::{Block, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, statement::parse_line},
    },
};

/// Parses a sequence of lines.
///
/// With `closing` set, lines are read until that token is consumed; running
/// out of input first is an error. Without it, lines are read until the end
/// of input. Stray `;` between lines are skipped.
///
/// Grammar: `lines := (";" | line)*`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the first line.
/// - `closing`: The token ending the sequence, if any.
///
/// # Returns
/// The parsed statements in source order.
pub fn parse_lines<'a, I>(tokens: &mut Peekable<I>,
                          closing: Option<&Token>)
                          -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();

    loop {
        while let Some((Token::Semicolon, _)) = tokens.peek() {
            tokens.next();
        }

        match (tokens.peek(), closing) {
            (None, None) => break,
            (None, Some(_)) => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
            (Some((tok, _)), Some(closing)) if tok == closing => {
                tokens.next();
                break;
            },
            _ => statements.push(parse_line(tokens)?),
        }
    }

    Ok(statements)
}

/// Parses the body of a function literal.
///
/// The opening `<` has already been consumed; parsing ends at the matching
/// `>`.
///
/// Grammar: `function := "<" lines ">"`
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Block>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    Ok(parse_lines(tokens, Some(&Token::Greater))?.into())
}
