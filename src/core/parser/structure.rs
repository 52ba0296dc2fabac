//! Brace and environment balance
//!
//! The tree parser recovers from unbalanced input instead of rejecting it,
//! so balance is checked on the raw fragment before parsing. Escaped
//! characters (`\{`, `\}`, `\%`) and `%` comments do not count.

use std::iter::Peekable;
use std::str::CharIndices;

use super::MAX_DEPTH;
use crate::utils::error::{ParseError, ParseErrorKind};

/// Something opened and not yet closed
#[derive(Debug)]
enum Open {
    Group,
    Environment(String),
}

/// Check that braces and environments balance
pub fn check_balance(input: &str) -> Result<(), ParseError> {
    let mut stack: Vec<(Open, usize)> = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        match c {
            '\\' => {
                let Some((_, next)) = chars.next() else {
                    return Err(ParseError::new(ParseErrorKind::TrailingEscape, offset));
                };
                if !next.is_ascii_alphabetic() {
                    continue;
                }

                let start = offset + 1;
                let mut end = start + 1;
                while let Some(&(i, c)) = chars.peek() {
                    if !c.is_ascii_alphabetic() {
                        break;
                    }
                    chars.next();
                    end = i + 1;
                }

                match &input[start..end] {
                    "begin" => {
                        let name = read_environment_name(&mut chars, offset)?;
                        push(&mut stack, Open::Environment(name), offset)?;
                    }
                    "end" => {
                        let found = read_environment_name(&mut chars, offset)?;
                        close_environment(&mut stack, found, offset)?;
                    }
                    _ => {}
                }
            }
            '%' => {
                while let Some(&(_, c)) = chars.peek() {
                    if c == '\n' {
                        break;
                    }
                    chars.next();
                }
            }
            '{' => push(&mut stack, Open::Group, offset)?,
            '}' => match stack.pop() {
                Some((Open::Group, _)) => {}
                Some((Open::Environment(name), open)) => {
                    return Err(ParseError::new(
                        ParseErrorKind::UnclosedEnvironment { name },
                        open,
                    ));
                }
                None => {
                    return Err(ParseError::new(
                        ParseErrorKind::UnmatchedCloseBrace,
                        offset,
                    ))
                }
            },
            _ => {}
        }
    }

    match stack.pop() {
        Some((Open::Group, open)) => Err(ParseError::new(ParseErrorKind::UnclosedGroup, open)),
        Some((Open::Environment(name), open)) => Err(ParseError::new(
            ParseErrorKind::UnclosedEnvironment { name },
            open,
        )),
        None => Ok(()),
    }
}

fn push(stack: &mut Vec<(Open, usize)>, open: Open, offset: usize) -> Result<(), ParseError> {
    if stack.len() >= MAX_DEPTH {
        return Err(ParseError::new(
            ParseErrorKind::NestingTooDeep { limit: MAX_DEPTH },
            offset,
        ));
    }
    stack.push((open, offset));
    Ok(())
}

fn close_environment(
    stack: &mut Vec<(Open, usize)>,
    found: String,
    offset: usize,
) -> Result<(), ParseError> {
    match stack.pop() {
        Some((Open::Environment(expected), _)) if expected == found => Ok(()),
        Some((Open::Environment(expected), _)) => Err(ParseError::new(
            ParseErrorKind::MismatchedEnvironment { expected, found },
            offset,
        )),
        Some((Open::Group, open)) => Err(ParseError::new(ParseErrorKind::UnclosedGroup, open)),
        None => Err(ParseError::new(
            ParseErrorKind::UnmatchedEnd { name: found },
            offset,
        )),
    }
}

/// Read `{name}` after `\begin` or `\end`
fn read_environment_name(
    chars: &mut Peekable<CharIndices<'_>>,
    at: usize,
) -> Result<String, ParseError> {
    let missing = || ParseError::new(ParseErrorKind::MissingEnvironmentName, at);

    while let Some(&(_, c)) = chars.peek() {
        if !c.is_whitespace() {
            break;
        }
        chars.next();
    }
    if !matches!(chars.next(), Some((_, '{'))) {
        return Err(missing());
    }

    let mut name = String::new();
    loop {
        match chars.next() {
            Some((_, '}')) => break,
            Some((_, '\\' | '{' | '%')) | None => return Err(missing()),
            Some((_, c)) if c.is_whitespace() => {}
            Some((_, c)) => name.push(c),
        }
    }

    if name.is_empty() {
        return Err(missing());
    }
    Ok(name)
}
