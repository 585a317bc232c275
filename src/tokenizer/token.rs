use std::ops::Range;

use serde::Serialize;

use crate::engine::EngineMatch;
use crate::registry::PatternEntry;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token<'s, K> {
    pub kind: K,
    /// The matched text, borrowed from the source
    pub lexeme: &'s str,
    /// Byte span within the source (start inclusive, end exclusive, 0-based)
    pub span: Range<usize>,
    /// 0-based line the lexeme starts on
    pub first_line: usize,
    /// How many newlines the lexeme contains, 0 for a single line token
    pub num_lines: usize,
}

impl<K> Token<'_, K> {
    /// 0-based line the lexeme ends on
    #[inline]
    pub fn last_line(&self) -> usize {
        self.first_line + self.num_lines
    }
}

#[inline]
pub(crate) fn count_newlines(text: &str) -> usize {
    memchr::memchr_iter(b'\n', text.as_bytes()).count()
}

/// A token found by a search step, before filtering.
#[derive(Debug)]
pub(crate) struct Extracted<'s, K> {
    pub token: Token<'s, K>,
    pub filtered: bool,
}

/// Maps an engine match back to a token.
///
/// `origin` is where the search started and `line` the line at `origin`: newlines in the
/// skipped gap between `origin` and the lexeme count towards `first_line`.
/// Returns `None` when the engine found nothing, which ends lexing.
pub(crate) fn extract<'s, K: Copy>(
    entries: &[PatternEntry<K>],
    found: Option<EngineMatch>,
    source: &'s str,
    origin: usize,
    line: usize,
) -> Option<Extracted<'s, K>> {
    let EngineMatch { group, start, end } = found?;
    // Group 0 is the whole match and never maps to a kind
    let entry = entries.get(group.checked_sub(1)?)?;
    let lexeme = &source[start..end];

    Some(Extracted {
        token: Token {
            kind: entry.kind,
            lexeme,
            span: start..end,
            first_line: line + count_newlines(&source[origin..start]),
            num_lines: count_newlines(lexeme),
        },
        filtered: entry.filtered,
    })
}
