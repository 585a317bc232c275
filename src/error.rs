use std::fmt;
use std::io;

pub type ReglexResult<T> = Result<T, Error>;

/// Errors that can occur during reglex usage
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// An I/O error occurred when reading a grammar file
    Io(io::Error),

    /// JSON parsing failed when loading a grammar.
    Json(serde_json::Error),

    /// A registry needs at least one token kind.
    EmptyRegistry,

    /// The same token kind was declared twice in a registry.
    DuplicateKind(String),

    /// The pattern for a kind failed to parse on its own.
    #[allow(missing_docs)]
    InvalidPattern { kind: String, message: String },

    /// Every kind pattern parsed fine but the combined alternation did not.
    /// Happens eg when a kind pattern uses a numbered backreference.
    CombinedPattern(String),

    /// The combined pattern has more capture groups than there are kinds, which would
    /// break the group -> kind mapping. Kind patterns must not define named groups.
    #[allow(missing_docs)]
    GroupCountMismatch { expected: usize, found: usize },

    /// A pattern matched the empty string.
    /// `offset` is `None` when it was caught while building the registry and the byte offset
    /// in the source when the match happened while lexing.
    #[allow(missing_docs)]
    DegeneratePattern { kind: String, offset: Option<usize> },

    /// A grammar was not found.
    /// Only happens when asking to lex something with a grammar we can't find
    GrammarNotFound(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::Json(err) => write!(f, "JSON parsing error: {}", err),
            Error::EmptyRegistry => write!(f, "registry has no token kinds"),
            Error::DuplicateKind(kind) => write!(f, "token kind {} is declared twice", kind),
            Error::InvalidPattern { kind, message } => {
                write!(f, "invalid pattern for token kind {}: {}", kind, message)
            }
            Error::CombinedPattern(message) => {
                write!(f, "failed to compile combined pattern: {}", message)
            }
            Error::GroupCountMismatch { expected, found } => write!(
                f,
                "combined pattern has {} capture groups, expected {}",
                found, expected
            ),
            Error::DegeneratePattern { kind, offset: None } => {
                write!(f, "pattern for token kind {} matches the empty string", kind)
            }
            Error::DegeneratePattern {
                kind,
                offset: Some(offset),
            } => write!(
                f,
                "pattern for token kind {} produced an empty match at byte {}",
                kind, offset
            ),
            Error::GrammarNotFound(name) => write!(f, "grammar '{}' not found", name),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::EmptyRegistry
            | Error::DuplicateKind(_)
            | Error::InvalidPattern { .. }
            | Error::CombinedPattern(_)
            | Error::GroupCountMismatch { .. }
            | Error::DegeneratePattern { .. }
            | Error::GrammarNotFound(_) => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
