use std::fmt::Debug;
use std::hash::Hash;
use std::iter::FusedIterator;

use serde::Serialize;

use crate::engine::{AlternationEngine, Engine, validate_entries};
use crate::error::{Error, ReglexResult};
use crate::kind::TokenKind;
use crate::registry::Registry;

mod token;

pub use token::Token;
use token::{count_newlines, extract};

/// The output of lexing a whole buffer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lexed<'s, K> {
    /// Emitted tokens, in source order. Filtered kinds are not in there.
    pub tokens: Vec<Token<'s, K>>,
    /// What is left of the source once no pattern matches anymore
    pub remainder: &'s str,
    /// Byte offset of `remainder` in the source
    pub remainder_offset: usize,
    /// Line the lexer was on when it stopped, ie the line of the last consumed lexeme's end.
    /// Newlines in the remainder are not counted.
    pub line: usize,
}

impl<K> Lexed<'_, K> {
    /// Whether the whole source was consumed
    pub fn is_complete(&self) -> bool {
        self.remainder.is_empty()
    }

    /// Line where the unmatched input starts, past the whitespace leading the remainder
    pub fn remainder_line(&self) -> usize {
        let trimmed = self.remainder.trim_start();
        let skipped = &self.remainder[..self.remainder.len() - trimmed.len()];
        self.line + count_newlines(skipped)
    }
}

/// A registry compiled into a matching engine.
///
/// Building it is the expensive part, lexing only borrows it so a single lexer can be shared
/// by any number of threads as long as the engine is `Sync`, which the default one is.
#[derive(Debug)]
pub struct Lexer<K, E = AlternationEngine> {
    registry: Registry<K>,
    engine: E,
}

impl<K, E> Lexer<K, E>
where
    K: Copy + Eq + Hash + Debug,
    E: Engine,
{
    pub fn new(registry: Registry<K>) -> ReglexResult<Self> {
        validate_entries::<K, E>(registry.entries())?;
        let engine = E::new(&registry.patterns())?;
        Ok(Self { registry, engine })
    }

    pub fn registry(&self) -> &Registry<K> {
        &self.registry
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Lazily lexes `source`, see [`Tokens`].
    pub fn tokens<'l, 's>(&'l self, source: &'s str) -> Tokens<'l, 's, K, E> {
        Tokens {
            lexer: self,
            source,
            pos: 0,
            line: 0,
            finished: false,
        }
    }

    /// Lexes the whole source.
    ///
    /// Input that no pattern matches is not an error: lexing stops there and the rest of the
    /// source is returned as the remainder. The only error is a pattern matching an empty
    /// string, since that would never advance.
    pub fn lex<'s>(&self, source: &'s str) -> ReglexResult<Lexed<'s, K>> {
        let mut tokens = self.tokens(source);
        let collected = tokens.by_ref().collect::<ReglexResult<Vec<_>>>()?;

        #[cfg(feature = "debug")]
        log::debug!(
            "[lex] produced {} tokens, stopped at line {} with {} bytes left",
            collected.len(),
            tokens.line(),
            tokens.remainder().len()
        );

        Ok(Lexed {
            tokens: collected,
            remainder: tokens.remainder(),
            remainder_offset: tokens.offset(),
            line: tokens.line(),
        })
    }
}

impl<K: TokenKind, E: Engine> Lexer<K, E> {
    /// Builds a lexer from the `K::ALL` table.
    pub fn for_kinds() -> ReglexResult<Self> {
        Self::new(Registry::from_kinds()?)
    }
}

#[cfg(feature = "parallel")]
impl<K, E> Lexer<K, E>
where
    K: Copy + Eq + Hash + Debug + Send + Sync,
    E: Engine + Sync,
{
    /// Lexes independent buffers in parallel, results are in the same order as `sources`.
    pub fn lex_batch<'s>(&self, sources: &[&'s str]) -> Vec<ReglexResult<Lexed<'s, K>>> {
        use rayon::prelude::*;

        sources.par_iter().map(|source| self.lex(source)).collect()
    }
}

/// Iterator over the emitted tokens of a source.
///
/// Each step searches the rest of the source for the leftmost match, skipping whatever comes
/// before it. Filtered tokens are consumed silently. Iteration ends when the source is
/// exhausted or nothing matches anymore; after that `remainder` is the unconsumed suffix.
/// An empty match yields a single error and ends iteration without consuming anything.
#[derive(Debug)]
pub struct Tokens<'l, 's, K, E = AlternationEngine> {
    lexer: &'l Lexer<K, E>,
    source: &'s str,
    /// Byte offset of the cursor
    pos: usize,
    /// Line of the cursor
    line: usize,
    finished: bool,
}

impl<'s, K, E> Tokens<'_, 's, K, E> {
    /// The part of the source not consumed yet
    pub fn remainder(&self) -> &'s str {
        &self.source[self.pos..]
    }

    pub fn offset(&self) -> usize {
        self.pos
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl<'s, K, E> Iterator for Tokens<'_, 's, K, E>
where
    K: Copy + Eq + Hash + Debug,
    E: Engine,
{
    type Item = ReglexResult<Token<'s, K>>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            if self.pos >= self.source.len() {
                self.finished = true;
                break;
            }

            let found = self.lexer.engine.search(self.source, self.pos);
            let Some(extracted) = extract(
                self.lexer.registry.entries(),
                found,
                self.source,
                self.pos,
                self.line,
            ) else {
                #[cfg(feature = "debug")]
                log::debug!("[Tokens] no more matches from byte {}", self.pos);
                self.finished = true;
                break;
            };
            let token = extracted.token;

            if token.span.is_empty() {
                self.finished = true;
                return Some(Err(Error::DegeneratePattern {
                    kind: format!("{:?}", token.kind),
                    offset: Some(token.span.start),
                }));
            }

            #[cfg(feature = "debug")]
            log::trace!(
                "[Tokens] matched {:?} [{}..{}] => {:?}{}",
                token.kind,
                token.span.start,
                token.span.end,
                token.lexeme,
                if extracted.filtered { " (filtered)" } else { "" }
            );

            self.pos = token.span.end;
            self.line = token.last_line();

            if !extracted.filtered {
                return Some(Ok(token));
            }
        }

        None
    }
}

impl<K, E> FusedIterator for Tokens<'_, '_, K, E>
where
    K: Copy + Eq + Hash + Debug,
    E: Engine,
{
}
