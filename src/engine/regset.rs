use std::fmt::{Debug, Formatter};

use onig::{RegSet, RegSetLead, RegexOptions, SearchOptions};

use crate::engine::{Engine, EngineMatch};
use crate::error::{Error, ReglexResult};

/// Patterns kept separate in an Oniguruma `RegSet` searched with position lead:
/// the regset scans for the leftmost position and tries every regex in order there.
///
/// Unlike `AlternationEngine` this allows groups of any kind inside the patterns, at the cost
/// of not being shareable between threads.
pub struct RegSetEngine {
    len: usize,
    regset: RegSet,
}

impl Engine for RegSetEngine {
    fn new(patterns: &[&str]) -> ReglexResult<Self> {
        if patterns.is_empty() {
            return Err(Error::EmptyRegistry);
        }

        let regset = RegSet::with_options(patterns, RegexOptions::REGEX_OPTION_NONE).map_err(|e| {
            Error::CombinedPattern(format!(
                "Failed to compile pattern set with {} patterns: {:?}",
                patterns.len(),
                e
            ))
        })?;

        Ok(Self {
            len: patterns.len(),
            regset,
        })
    }

    fn search(&self, text: &str, start: usize) -> Option<EngineMatch> {
        // We need to give the full text because some regex might do lookbehind
        let (pattern_index, captures) = self.regset.captures_with_options(
            text,
            start,
            text.len(),
            RegSetLead::Position,
            SearchOptions::SEARCH_OPTION_NONE,
        )?;
        let (start, end) = captures.pos(0)?;

        Some(EngineMatch {
            group: pattern_index + 1,
            start,
            end,
        })
    }
}

impl Debug for RegSetEngine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RegSetEngine({} patterns)", self.len)
    }
}
