//! Slicing control constructs out of a statement.
//!
//! Every extractor returns `Ok(None)` when a delimiter is missing or out of
//! order; the dispatcher treats that as a no-op. A slice whose offsets do not
//! fit the statement is a [`Fault`].

use tracing::debug;

use super::error::Fault;
use crate::lexer::{find_at_depth, matching_end, scan_words, Word};
use crate::token::Keyword;

/// One `<condition> then <block>` arm of an `if`/`elif` chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arm<'a> {
    pub condition: &'a str,
    pub block: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conditional<'a> {
    pub arms: Vec<Arm<'a>>,
    pub otherwise: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Loop<'a> {
    pub condition: &'a str,
    pub body: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guarded<'a> {
    pub body: &'a str,
    pub handler: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDef<'a> {
    pub name: &'a str,
    pub params: Vec<&'a str>,
    pub body: &'a str,
}

/// Byte offset just past the first `count` characters of `statement`.
pub fn skip_chars(statement: &str, count: usize) -> Result<usize, Fault> {
    let mut chars = statement.char_indices().map(|(offset, _)| offset);
    match chars.nth(count) {
        Some(offset) => Ok(offset),
        None if statement.chars().count() == count => Ok(statement.len()),
        None => Err(Fault::slice_out_of_range(
            statement,
            count,
            statement.chars().count(),
        )),
    }
}

/// `statement[start..end]`, faulting instead of panicking.
pub fn slice(statement: &str, start: usize, end: usize) -> Result<&str, Fault> {
    if start > end {
        return Err(Fault::slice_out_of_range(statement, start, end));
    }
    statement
        .get(start..end)
        .ok_or_else(|| Fault::slice_out_of_range(statement, start, end))
}

fn note_trailing(statement: &str, end: &Word<'_>) {
    let tail = statement[end.span.end..].trim();
    if !tail.is_empty() {
        debug!(tail, "ignoring text after `end`");
    }
}

/// `if <cond> then <block> [elif <cond> then <block>]* [else <block>] end`.
///
/// `keyword` is `If` or `Elif`; a standalone `elif` line behaves exactly like
/// an `if`, with the condition starting one keyword later.
pub fn extract_conditional(statement: &str, keyword: Keyword) -> Result<Option<Conditional<'_>>, Fault> {
    let opener = keyword.as_str().len();
    let words = scan_words(statement, opener);

    let Some(then_at) = find_at_depth(&words, 0, &[Keyword::Then]) else {
        return Ok(None);
    };

    let condition_start = skip_chars(statement, opener + 1)?;
    let mut condition = slice(statement, condition_start, words[then_at].span.start)?;
    let mut block_start = words[then_at].span.end;
    let mut cursor = then_at + 1;
    let mut arms = Vec::new();

    loop {
        let Some(next) = find_at_depth(&words, cursor, &[Keyword::Elif, Keyword::Else, Keyword::End]) else {
            return Ok(None);
        };
        let delimiter = &words[next];
        arms.push(Arm {
            condition,
            block: slice(statement, block_start, delimiter.span.start)?,
        });

        match delimiter.keyword() {
            Some(Keyword::Elif) => {
                let Some(then_at) = find_at_depth(&words, next + 1, &[Keyword::Then]) else {
                    return Ok(None);
                };
                condition = slice(statement, delimiter.span.end, words[then_at].span.start)?;
                block_start = words[then_at].span.end;
                cursor = then_at + 1;
            }
            Some(Keyword::Else) => {
                let Some(end_at) = matching_end(&words, next + 1) else {
                    return Ok(None);
                };
                let otherwise = slice(statement, delimiter.span.end, words[end_at].span.start)?;
                note_trailing(statement, &words[end_at]);
                return Ok(Some(Conditional {
                    arms,
                    otherwise: Some(otherwise),
                }));
            }
            _ => {
                note_trailing(statement, delimiter);
                return Ok(Some(Conditional { arms, otherwise: None }));
            }
        }
    }
}

/// A standalone `else <block> end`.
pub fn extract_else(statement: &str) -> Result<Option<&str>, Fault> {
    let opener = Keyword::Else.as_str().len();
    let words = scan_words(statement, opener);

    let Some(end_at) = matching_end(&words, 0) else {
        return Ok(None);
    };

    let start = skip_chars(statement, opener)?;
    note_trailing(statement, &words[end_at]);
    slice(statement, start, words[end_at].span.start).map(Some)
}

/// `try <block> catch <block> end`.
pub fn extract_try(statement: &str) -> Result<Option<Guarded<'_>>, Fault> {
    let opener = Keyword::Try.as_str().len();
    let words = scan_words(statement, opener);

    let Some(catch_at) = find_at_depth(&words, 0, &[Keyword::Catch]) else {
        return Ok(None);
    };
    let Some(end_at) = matching_end(&words, catch_at + 1) else {
        return Ok(None);
    };

    let start = skip_chars(statement, opener)?;
    let body = slice(statement, start, words[catch_at].span.start)?;
    let handler = slice(statement, words[catch_at].span.end, words[end_at].span.start)?;
    note_trailing(statement, &words[end_at]);

    Ok(Some(Guarded { body, handler }))
}

/// `while <cond> do <block> end`.
pub fn extract_while(statement: &str) -> Result<Option<Loop<'_>>, Fault> {
    let opener = Keyword::While.as_str().len();
    let words = scan_words(statement, opener);

    let Some(do_at) = find_at_depth(&words, 0, &[Keyword::Do]) else {
        return Ok(None);
    };
    let Some(end_at) = matching_end(&words, do_at + 1) else {
        return Ok(None);
    };

    let start = skip_chars(statement, opener + 1)?;
    let condition = slice(statement, start, words[do_at].span.start)?;
    let body = slice(statement, words[do_at].span.end, words[end_at].span.start)?;
    note_trailing(statement, &words[end_at]);

    Ok(Some(Loop { condition, body }))
}

/// `def <name>(<params>) <body> end`.
///
/// The header is read unconditionally, so a bare `def` faults. A body with
/// no closing `end` is stored as empty text.
pub fn extract_def(statement: &str) -> Result<Option<FunctionDef<'_>>, Fault> {
    let header_start = skip_chars(statement, Keyword::Def.as_str().len() + 1)?;
    let header = &statement[header_start..];

    let (Some(open), Some(close)) = (header.find('('), header.find(')')) else {
        return Ok(None);
    };
    if close < open {
        return Ok(None);
    }

    let params = header[open + 1..close]
        .split(',')
        .map(str::trim)
        .filter(|param| !param.is_empty())
        .collect();

    let body_start = header_start + close + 1;
    let words = scan_words(statement, body_start);
    let body = match matching_end(&words, 0) {
        Some(end_at) => {
            note_trailing(statement, &words[end_at]);
            slice(statement, body_start, words[end_at].span.start)?
        }
        None => "",
    };

    Ok(Some(FunctionDef {
        name: header[..open].trim(),
        params,
        body: body.trim(),
    }))
}

/// Break a block's text into the statements it holds.
///
/// A statement opened by a construct keyword runs to its matching `end`.
/// Anything else runs until the next word that begins a statement.
pub fn split_statements(block: &str) -> Vec<&str> {
    let words = scan_words(block, 0);
    let mut statements = Vec::new();
    let mut index = 0;

    while index < words.len() {
        let first = words[index];
        let last = match first.keyword() {
            Some(keyword) if keyword.needs_end() => {
                matching_end(&words, index + 1).unwrap_or(words.len() - 1)
            }
            opener => (index + 1..words.len())
                .find(|&next| {
                    // the first operand word of `print` is never an assignment
                    let operand = opener == Some(Keyword::Print) && next == index + 1;
                    starts_statement(&words, next, operand)
                })
                .map_or(words.len() - 1, |next| next - 1),
        };

        statements.push(&block[first.span.start..words[last].span.end]);
        index = last + 1;
    }

    statements
}

fn starts_statement(words: &[Word<'_>], index: usize, print_operand: bool) -> bool {
    let word = &words[index];
    if word.keyword().is_some_and(Keyword::starts_statement) {
        return true;
    }
    if print_operand {
        return false;
    }

    match word.text.find('=') {
        Some(0) => false,
        Some(at) => is_name(&word.text[..at]),
        None => {
            is_name(word.text)
                && words
                    .get(index + 1)
                    .is_some_and(|next| next.text.starts_with('='))
        }
    }
}

fn is_name(text: &str) -> bool {
    !text.is_empty() && !text.starts_with(['\'', '"'])
}
