use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{Accessor, AssignTarget, Block, Expr, ExprKind, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_accessor, parse_accessors, parse_value},
            utils::expect,
        },
    },
};

/// Parses a single line.
///
/// A line may be one of:
/// - a conditional (`if`) or a loop (`while`),
/// - a `return` statement,
/// - an assignment,
/// - a value used as a statement.
///
/// Parsing is attempted in that order. Every form except conditionals and
/// loops ends with `;`.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_line<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = match tokens.peek() {
        Some((Token::If, line)) => {
            let line = *line;
            tokens.next();
            let (condition, body) = parse_conditional(tokens)?;
            return Ok(Statement::If { condition,
                                      body,
                                      line });
        },
        Some((Token::While, line)) => {
            let line = *line;
            tokens.next();
            let (condition, body) = parse_conditional(tokens)?;
            return Ok(Statement::While { condition,
                                         body,
                                         line });
        },
        Some((Token::Return, line)) => {
            let line = *line;
            tokens.next();
            let value = parse_value(tokens)?;
            expect(tokens, &Token::Semicolon)?;
            return Ok(Statement::Return { value, line });
        },
        Some((_, line)) => *line,
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    };

    if let Some(statement) = parse_assignment(tokens)? {
        return Ok(statement);
    }

    let expr = parse_value(tokens)?;
    expect(tokens, &Token::Semicolon)?;

    Ok(Statement::Expression { expr, line })
}

/// Parses the condition and body shared by `if` and `while`.
///
/// Grammar: `conditional := value ":"? body`
fn parse_conditional<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<(Expr, Block)>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let condition = parse_value(tokens)?;
    if let Some((Token::Colon, _)) = tokens.peek() {
        tokens.next();
    }
    Ok((condition, parse_body(tokens)?))
}

/// Parses the body of a conditional or loop.
///
/// A bare function literal `<...>` groups several lines; its statements run
/// directly in the enclosing scope and a `;` after it is optional. Any other
/// body is a single line.
fn parse_body<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Block>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Less, _)) = tokens.peek() {
        let mut lookahead = tokens.clone();
        if let Expr { kind: ExprKind::Function(body),
                      path, .. } = parse_value(&mut lookahead)?
           && path.is_empty()
        {
            *tokens = lookahead;
            if let Some((Token::Semicolon, _)) = tokens.peek() {
                tokens.next();
            }
            return Ok(body);
        }
    }

    Ok(Rc::from(vec![parse_line(tokens)?]))
}

/// Parses an assignment statement if one starts here.
///
/// The assignment target is parsed on a lookahead copy of the iterator; the
/// input is only consumed when the target is followed by `=`. Otherwise
/// `Ok(None)` is returned and the caller parses a value instead.
///
/// Supported forms:
/// - `= value;` flushes the value's entries into the active scope,
/// - `name = value;`, `.name = value;`, `[key] = value;`,
/// - any of the above or `parent` followed by accessors, e.g.
///   `parent.x = value;` or `obj[0].y = value;`.
///
/// # Errors
/// Returns `ParseError::InvalidAssignmentTarget` for a bare `parent = ...`.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = match tokens.peek() {
        Some((Token::Equals, line)) => {
            let line = *line;
            tokens.next();
            let value = parse_value(tokens)?;
            expect(tokens, &Token::Semicolon)?;
            return Ok(Some(Statement::Assignment { target: AssignTarget::Scope,
                                                   path: Vec::new(),
                                                   value,
                                                   line }));
        },
        Some((_, line)) => *line,
        None => return Ok(None),
    };

    let mut lookahead = tokens.clone();
    let Some((target, path)) = parse_assignment_target(&mut lookahead)? else {
        return Ok(None);
    };
    if !matches!(lookahead.peek(), Some((Token::Equals, _))) {
        return Ok(None);
    }
    if matches!(target, AssignTarget::Parent) && path.is_empty() {
        return Err(ParseError::InvalidAssignmentTarget { line });
    }

    *tokens = lookahead;
    tokens.next();

    let value = parse_value(tokens)?;
    expect(tokens, &Token::Semicolon)?;

    Ok(Some(Statement::Assignment { target,
                                    path,
                                    value,
                                    line }))
}

/// Parses the left-hand side of an assignment.
///
/// Returns `Ok(None)` if the next tokens cannot start a target.
fn parse_assignment_target<'a, I>(tokens: &mut Peekable<I>)
                                  -> ParseResult<Option<(AssignTarget, Vec<Accessor>)>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let target = match tokens.peek() {
        Some((Token::Identifier(name), _)) => {
            let name = name.clone();
            tokens.next();
            AssignTarget::Variable(Accessor::Name(name))
        },
        Some((Token::Parent, _)) => {
            tokens.next();
            AssignTarget::Parent
        },
        Some((Token::Dot | Token::LBracket, _)) => match parse_accessor(tokens)? {
            Some(accessor) => AssignTarget::Variable(accessor),
            None => return Ok(None),
        },
        _ => return Ok(None),
    };

    Ok(Some((target, parse_accessors(tokens)?)))
}
