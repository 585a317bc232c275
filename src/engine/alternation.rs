use std::fmt;

use onig::{Regex, RegexOptions, Region, SearchOptions, Syntax};

use crate::engine::{Engine, EngineMatch};
use crate::error::{Error, ReglexResult};

/// All the patterns fused into a single alternation, one named group per pattern:
/// `(?<k0>p1)|(?<k1>p2)|...`.
///
/// The regex is compiled with `DONT_CAPTURE_GROUP` so groups written inside the patterns
/// themselves don't capture and group `i` is always pattern `i - 1`.
pub struct AlternationEngine {
    pattern: String,
    regex: Regex,
}

impl AlternationEngine {
    /// The combined pattern given to Oniguruma
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Number of groups including the whole match, always `patterns + 1`
    pub fn group_count(&self) -> usize {
        self.regex.captures_len() + 1
    }
}

fn group(i: usize, pattern: &str) -> String {
    format!("(?<k{i}>{pattern})")
}

fn combine(patterns: &[&str]) -> String {
    let mut out = String::with_capacity(patterns.iter().map(|p| p.len() + 8).sum());
    for (i, pattern) in patterns.iter().enumerate() {
        if i > 0 {
            out.push('|');
        }
        out.push_str(&group(i, pattern));
    }
    out
}

impl Engine for AlternationEngine {
    fn compile_single(pattern: &str) -> Result<Regex, onig::Error> {
        Regex::with_options(
            &group(0, pattern),
            RegexOptions::REGEX_OPTION_DONT_CAPTURE_GROUP,
            Syntax::default(),
        )
    }

    fn new(patterns: &[&str]) -> ReglexResult<Self> {
        if patterns.is_empty() {
            return Err(Error::EmptyRegistry);
        }

        let pattern = combine(patterns);
        let regex = Regex::with_options(
            &pattern,
            RegexOptions::REGEX_OPTION_DONT_CAPTURE_GROUP,
            Syntax::default(),
        )
        .map_err(|e| Error::CombinedPattern(e.to_string()))?;

        let found = regex.captures_len();
        if found != patterns.len() {
            return Err(Error::GroupCountMismatch {
                expected: patterns.len() + 1,
                found: found + 1,
            });
        }

        #[cfg(feature = "debug")]
        log::debug!(
            "[AlternationEngine] compiled {} patterns into: {pattern}",
            patterns.len()
        );

        Ok(Self { pattern, regex })
    }

    fn search(&self, text: &str, start: usize) -> Option<EngineMatch> {
        let mut region = Region::new();
        self.regex.search_with_options(
            text,
            start,
            text.len(),
            SearchOptions::SEARCH_OPTION_NONE,
            Some(&mut region),
        )?;

        // Top level alternation: exactly one group participates
        (1..region.len()).find_map(|group| {
            region
                .pos(group)
                .map(|(start, end)| EngineMatch { group, start, end })
        })
    }
}

impl fmt::Debug for AlternationEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AlternationEngine({})", self.pattern)
    }
}
