use crate::token::Keyword;

/// A byte range in a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// A whitespace-delimited word and where it sits in its statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word<'a> {
    pub text: &'a str,
    pub span: Span,
}

impl Word<'_> {
    /// The keyword this word spells, if it spells one exactly.
    pub fn keyword(&self) -> Option<Keyword> {
        Keyword::from_word(self.text)
    }
}

/// Split `source[from..]` into words. Spans are relative to `source`.
///
/// A word that opens with `"` runs to the closing `"` even across
/// whitespace, so a double-quoted `print` operand never leaks keywords.
pub fn scan_words(source: &str, from: usize) -> Vec<Word<'_>> {
    let mut words = Vec::new();
    let mut position = from.min(source.len());

    while position < source.len() {
        let Some(skip) = source[position..].find(|ch: char| !ch.is_whitespace()) else {
            break;
        };
        let start = position + skip;

        let mut cursor = start;
        if source[start..].starts_with('"') {
            if let Some(close) = source[start + 1..].find('"') {
                cursor = start + 1 + close + 1;
            }
        }

        let end = source[cursor..]
            .find(char::is_whitespace)
            .map_or(source.len(), |offset| cursor + offset);

        words.push(Word {
            text: &source[start..end],
            span: Span::new(start, end),
        });
        position = end;
    }

    words
}

/// Find the first word at or after `from` that is one of `targets` and sits
/// at nesting depth zero.
///
/// `if`, `while`, `try` and `def` open a level and `end` closes one. An `end`
/// that would close the enclosing construct stops the search unless `end`
/// itself is a target.
pub fn find_at_depth(words: &[Word<'_>], from: usize, targets: &[Keyword]) -> Option<usize> {
    let mut depth = 0usize;

    for (index, word) in words.iter().enumerate().skip(from) {
        match word.keyword() {
            Some(keyword) if depth == 0 && targets.contains(&keyword) => return Some(index),
            Some(Keyword::End) if depth == 0 => return None,
            Some(Keyword::End) => depth -= 1,
            Some(keyword) if keyword.opens_block() => depth += 1,
            _ => {}
        }
    }

    None
}

/// Index of the `end` closing a construct whose body starts at `from`.
pub fn matching_end(words: &[Word<'_>], from: usize) -> Option<usize> {
    find_at_depth(words, from, &[Keyword::End])
}
