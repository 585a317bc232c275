use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ReglexResult;
use crate::registry::{PatternEntry, Registry};

/// A grammar as written in a JSON file.
///
/// # Examples
/// ```json
/// {
///   "name": "lox",
///   "aliases": ["lox-lang"],
///   "tokens": [
///     { "kind": "COMMENT", "pattern": "//[^\\n]*", "filtered": true },
///     { "kind": "IF", "pattern": "if(?=\\W|$)" },
///     { "kind": "IDENTIFIER", "pattern": "[a-zA-Z_]\\w*" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawGrammar {
    /// Name used to look the grammar up
    pub name: String,
    /// Other names the grammar can be looked up with
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Token kinds in priority order: earlier entries win when several match at the same
    /// position
    pub tokens: Vec<PatternEntry<String>>,
}

impl RawGrammar {
    pub fn load_from_file(path: impl AsRef<Path>) -> ReglexResult<Self> {
        let file = File::open(path)?;
        let raw_grammar = serde_json::from_reader(BufReader::new(file))?;
        Ok(raw_grammar)
    }

    pub fn from_json(content: &str) -> ReglexResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// A registry borrowing the kind names of this grammar
    pub fn registry(&self) -> ReglexResult<Registry<&str>> {
        Registry::new(self.tokens.iter().map(|t| PatternEntry {
            kind: t.kind.as_str(),
            pattern: t.pattern.clone(),
            filtered: t.filtered,
        }))
    }
}
