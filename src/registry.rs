use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::{Error, ReglexResult};
use crate::kind::TokenKind;

/// A token kind bound to its pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternEntry<K> {
    pub kind: K,
    pub pattern: String,
    /// Matches of a filtered kind advance the lexer but are not emitted.
    #[serde(default)]
    pub filtered: bool,
}

impl<K> PatternEntry<K> {
    pub fn new(kind: K, pattern: impl Into<String>) -> Self {
        Self {
            kind,
            pattern: pattern.into(),
            filtered: false,
        }
    }

    /// Same as `new` but for a kind that is consumed without being emitted
    pub fn filtered(kind: K, pattern: impl Into<String>) -> Self {
        Self {
            kind,
            pattern: pattern.into(),
            filtered: true,
        }
    }
}

/// The ordered list of token kinds a lexer is built from.
///
/// The order of the entries is the match priority: when several patterns can match at the same
/// position, the first one declared wins, regardless of match length.
/// A registry is never empty and never contains the same kind twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry<K> {
    entries: Vec<PatternEntry<K>>,
}

impl<K> Registry<K>
where
    K: Copy + Eq + Hash + Debug,
{
    pub fn new(entries: impl IntoIterator<Item = PatternEntry<K>>) -> ReglexResult<Self> {
        let entries: Vec<_> = entries.into_iter().collect();
        if entries.is_empty() {
            return Err(Error::EmptyRegistry);
        }

        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.kind) {
                return Err(Error::DuplicateKind(format!("{:?}", entry.kind)));
            }
        }

        Ok(Self { entries })
    }

    /// Entries in priority order
    pub fn entries(&self) -> &[PatternEntry<K>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false, `new` rejects empty registries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, kind: K) -> Option<&PatternEntry<K>> {
        self.entries.iter().find(|e| e.kind == kind)
    }

    /// Priority of the kind, 0 being the highest
    pub fn position(&self, kind: K) -> Option<usize> {
        self.entries.iter().position(|e| e.kind == kind)
    }

    pub fn is_filtered(&self, kind: K) -> bool {
        self.get(kind).is_some_and(|e| e.filtered)
    }

    pub fn kinds(&self) -> impl Iterator<Item = K> + '_ {
        self.entries.iter().map(|e| e.kind)
    }

    pub(crate) fn patterns(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.pattern.as_str()).collect()
    }
}

impl<K: TokenKind> Registry<K> {
    /// Builds the registry from the kind table, in `K::ALL` order.
    pub fn from_kinds() -> ReglexResult<Self> {
        Self::new(K::ALL.iter().map(|&kind| PatternEntry {
            kind,
            pattern: kind.pattern().to_owned(),
            filtered: kind.filtered(),
        }))
    }
}
