mod engine;
mod error;
mod grammars;
mod kind;
mod registry;
mod tokenizer;

pub mod patterns;

pub use engine::{AlternationEngine, Engine, EngineMatch, RegSetEngine};
pub use error::{Error, ReglexResult};
pub use grammars::{Grammars, RawGrammar};
pub use kind::TokenKind;
pub use registry::{PatternEntry, Registry};
pub use tokenizer::{Lexed, Lexer, Token, Tokens};
