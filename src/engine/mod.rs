//! The matching engine used by the lexer.
//!
//! Both engines are built on Oniguruma and follow the same contract: a search starts at a byte
//! offset of the full text and returns the leftmost position where any pattern matches. When
//! several patterns match at that position, the first one in declaration order wins even if a
//! later one would match more text.

use std::fmt::Debug;

use onig::SearchOptions;

use crate::error::{Error, ReglexResult};
use crate::registry::PatternEntry;

mod alternation;
mod regset;

pub use alternation::AlternationEngine;
pub use regset::RegSetEngine;

/// Where a search matched.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EngineMatch {
    /// 1-based: pattern `i` of the engine is reported as group `i + 1`.
    /// Group 0 is the whole match and never reported here.
    pub group: usize,
    /// Absolute byte offset in the searched text
    pub start: usize,
    /// Absolute byte offset in the searched text, exclusive
    pub end: usize,
}

pub trait Engine: Sized {
    /// Compiles the patterns, in priority order.
    fn new(patterns: &[&str]) -> ReglexResult<Self>;

    /// Leftmost search in `text[start..]`.
    ///
    /// The whole text is given to the engine so look-behind assertions can see what comes
    /// before `start`. Positions in the result are absolute.
    fn search(&self, text: &str, start: usize) -> Option<EngineMatch>;

    /// Compiles a single pattern the way the engine embeds it.
    fn compile_single(pattern: &str) -> Result<onig::Regex, onig::Error> {
        onig::Regex::new(pattern)
    }
}

/// Compiles every pattern on its own so that we can report which kind is broken, and rejects
/// the ones matching an empty string since they would never advance the lexer.
pub(crate) fn validate_entries<K: Debug, E: Engine>(
    entries: &[PatternEntry<K>],
) -> ReglexResult<()> {
    for entry in entries {
        let regex = E::compile_single(&entry.pattern).map_err(|e| Error::InvalidPattern {
            kind: format!("{:?}", entry.kind),
            message: e.to_string(),
        })?;

        if regex
            .search_with_options("", 0, 0, SearchOptions::SEARCH_OPTION_NONE, None)
            .is_some()
        {
            return Err(Error::DegeneratePattern {
                kind: format!("{:?}", entry.kind),
                offset: None,
            });
        }
    }
    Ok(())
}
