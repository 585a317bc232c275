//! Patterns that come up in most grammars.

/// C-like identifier: a letter or underscore followed by word characters
pub const IDENTIFIER: &str = r"[a-zA-Z_]\w*";

/// `// line` and `/* block */` comments. Block comments can span lines but do not nest.
pub const CSTYLE_COMMENT: &str = r"(?://[^\n]*)|(?:/\*[^*]*\*+(?:[^/*][^*]*\*+)*/)";

/// Double quoted string without escapes, can span lines
pub const STRING: &str = r#""[^"]*""#;

/// Integer with an optional decimal part
pub const REAL_NUMBER: &str = r"[0-9]+(?:\.[0-9]+)?";

/// Integer without leading zeros
pub const INTEGER: &str = r"[1-9][0-9]*";

/// Any run of non whitespace characters. Declared last, it turns input no other kind
/// matches into an error token instead of leaving it in the remainder.
pub const NON_WHITESPACE: &str = r"[^\s]+";

/// Appended to reserved words so they don't match the start of a longer identifier
pub const KEYWORD_END: &str = r"(?=\W|$)";

/// Pattern for a reserved word, see [`KEYWORD_END`]. The word is not escaped.
pub fn keyword(word: &str) -> String {
    format!("{word}{KEYWORD_END}")
}

/// `keyword!("if")` is the `&'static str` version of [`keyword`], usable in
/// `TokenKind::pattern`.
#[macro_export]
macro_rules! keyword {
    ($word:literal) => {
        concat!($word, r"(?=\W|$)")
    };
}
