use std::collections::HashMap;
use std::path::Path;

use crate::error::{Error, ReglexResult};

mod raw;

pub use raw::RawGrammar;

const LOX_GRAMMAR: &str = include_str!("lox.json");

/// A collection of grammars that can be looked up by name or alias.
#[derive(Debug, Clone, Default)]
pub struct Grammars {
    grammars: Vec<RawGrammar>,
    // name or alias -> index in `grammars`
    id_by_name: HashMap<String, usize>,
}

impl Grammars {
    /// Adds a grammar, replacing any existing one with the same name or alias
    pub fn add_grammar(&mut self, raw_grammar: RawGrammar) {
        let id = self.grammars.len();
        self.id_by_name.insert(raw_grammar.name.clone(), id);
        for alias in &raw_grammar.aliases {
            self.id_by_name.insert(alias.clone(), id);
        }
        self.grammars.push(raw_grammar);
    }

    /// Reads the file and add it as a grammar.
    pub fn add_grammar_from_path(&mut self, path: impl AsRef<Path>) -> ReglexResult<()> {
        let raw_grammar = RawGrammar::load_from_file(path)?;
        self.add_grammar(raw_grammar);
        Ok(())
    }

    /// Adds an alias for the given grammar, does nothing if the grammar doesn't exist
    pub fn add_alias(&mut self, grammar_name: &str, alias: &str) {
        if let Some(id) = self.id_by_name.get(grammar_name) {
            self.id_by_name.insert(alias.to_string(), *id);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.id_by_name.contains_key(name)
    }

    pub fn get(&self, name: &str) -> ReglexResult<&RawGrammar> {
        self.id_by_name
            .get(name)
            .map(|id| &self.grammars[*id])
            .ok_or_else(|| Error::GrammarNotFound(name.to_string()))
    }

    /// Names of the grammars, without aliases
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.grammars.iter().map(|g| g.name.as_str())
    }

    /// The grammars shipped with reglex
    pub fn builtin() -> ReglexResult<Self> {
        let mut grammars = Self::default();
        grammars.add_grammar(RawGrammar::from_json(LOX_GRAMMAR)?);
        Ok(grammars)
    }
}
