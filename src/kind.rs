use std::fmt::Debug;
use std::hash::Hash;

/// A closed set of token kinds with one pattern per kind.
///
/// `ALL` is the explicit ordered table of kinds: a kind declared earlier wins over a later one
/// when both can match at the same position, so reserved words go before identifiers and
/// catch-all kinds go last. `pattern` should be an exhaustive `match` so that the compiler
/// checks that every kind has a pattern.
///
/// ```
/// use reglex::{Lexer, TokenKind, patterns};
///
/// #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
/// enum Kind { Comment, If, Identifier }
///
/// impl TokenKind for Kind {
///     const ALL: &'static [Self] = &[Kind::Comment, Kind::If, Kind::Identifier];
///
///     fn pattern(self) -> &'static str {
///         match self {
///             Kind::Comment => patterns::CSTYLE_COMMENT,
///             Kind::If => r"if(?=\W|$)",
///             Kind::Identifier => patterns::IDENTIFIER,
///         }
///     }
///
///     fn filtered(self) -> bool {
///         matches!(self, Kind::Comment)
///     }
/// }
///
/// let lexer: Lexer<Kind> = Lexer::for_kinds().unwrap();
/// let lexed = lexer.lex("if iffy // done").unwrap();
/// let kinds: Vec<_> = lexed.tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds, vec![Kind::If, Kind::Identifier]);
/// ```
pub trait TokenKind: Copy + Eq + Hash + Debug + 'static {
    /// Every kind, in priority order.
    const ALL: &'static [Self];

    /// The Oniguruma pattern for this kind.
    /// It must not define named groups and must not be able to match an empty string.
    /// With the default engine the pattern is embedded in a group, so an extended mode `#`
    /// comment running to the end of the pattern is rejected since it would swallow the
    /// closing parenthesis.
    fn pattern(self) -> &'static str;

    /// Filtered kinds are consumed while lexing but never emitted, eg comments.
    fn filtered(self) -> bool {
        false
    }
}
