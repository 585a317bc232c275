use reglex::{Grammars, Lexed, Lexer, TokenKind, keyword, patterns};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
enum Lox {
    Comment,
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,
    Question,
    Colon,
    BangEqual,
    Bang,
    Equal,
    GreaterEqual,
    LessEqual,
    Greater,
    Less,
    Assign,
    And,
    Struct,
    Else,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    False,
    Var,
    While,
    Identifier,
    String,
    Number,
    Error,
}

impl TokenKind for Lox {
    #[rustfmt::skip]
    const ALL: &'static [Self] = &[
        Lox::Comment,
        Lox::LeftParen, Lox::RightParen, Lox::LeftBrace, Lox::RightBrace, Lox::LeftBracket,
        Lox::RightBracket, Lox::Comma, Lox::Dot, Lox::Minus, Lox::Plus, Lox::Semicolon,
        Lox::Slash, Lox::Star, Lox::Question, Lox::Colon,
        Lox::BangEqual, Lox::Bang, Lox::Equal, Lox::GreaterEqual, Lox::LessEqual, Lox::Greater,
        Lox::Less, Lox::Assign,
        Lox::And, Lox::Struct, Lox::Else, Lox::Fun, Lox::For, Lox::If, Lox::Nil, Lox::Or,
        Lox::Print, Lox::Return, Lox::Super, Lox::This, Lox::True, Lox::False, Lox::Var,
        Lox::While,
        Lox::Identifier, Lox::String, Lox::Number,
        Lox::Error,
    ];

    fn pattern(self) -> &'static str {
        match self {
            Lox::Comment => patterns::CSTYLE_COMMENT,
            Lox::LeftParen => r"\(",
            Lox::RightParen => r"\)",
            Lox::LeftBrace => r"\{",
            Lox::RightBrace => r"\}",
            Lox::LeftBracket => r"\[",
            Lox::RightBracket => r"\]",
            Lox::Comma => ",",
            Lox::Dot => r"\.",
            Lox::Minus => r"\-",
            Lox::Plus => r"\+",
            Lox::Semicolon => ";",
            Lox::Slash => "/",
            Lox::Star => r"\*",
            Lox::Question => r"\?",
            Lox::Colon => ":",
            Lox::BangEqual => "!=",
            Lox::Bang => "!",
            Lox::Equal => "==",
            Lox::GreaterEqual => ">=",
            Lox::LessEqual => "<=",
            Lox::Greater => ">",
            Lox::Less => "<",
            Lox::Assign => "=",
            Lox::And => keyword!("and"),
            Lox::Struct => keyword!("struct"),
            Lox::Else => keyword!("else"),
            Lox::Fun => keyword!("fun"),
            Lox::For => keyword!("for"),
            Lox::If => keyword!("if"),
            Lox::Nil => keyword!("nil"),
            Lox::Or => keyword!("or"),
            Lox::Print => keyword!("print"),
            Lox::Return => keyword!("return"),
            Lox::Super => keyword!("super"),
            Lox::This => keyword!("this"),
            Lox::True => keyword!("true"),
            Lox::False => keyword!("false"),
            Lox::Var => keyword!("var"),
            Lox::While => keyword!("while"),
            Lox::Identifier => patterns::IDENTIFIER,
            Lox::String => patterns::STRING,
            Lox::Number => patterns::REAL_NUMBER,
            Lox::Error => patterns::NON_WHITESPACE,
        }
    }

    fn filtered(self) -> bool {
        matches!(self, Lox::Comment)
    }
}

fn sample(kind: Lox) -> &'static str {
    match kind {
        Lox::Comment => "// nothing to see",
        Lox::LeftParen => "(",
        Lox::RightParen => ")",
        Lox::LeftBrace => "{",
        Lox::RightBrace => "}",
        Lox::LeftBracket => "[",
        Lox::RightBracket => "]",
        Lox::Comma => ",",
        Lox::Dot => ".",
        Lox::Minus => "-",
        Lox::Plus => "+",
        Lox::Semicolon => ";",
        Lox::Slash => "/",
        Lox::Star => "*",
        Lox::Question => "?",
        Lox::Colon => ":",
        Lox::BangEqual => "!=",
        Lox::Bang => "!",
        Lox::Equal => "==",
        Lox::GreaterEqual => ">=",
        Lox::LessEqual => "<=",
        Lox::Greater => ">",
        Lox::Less => "<",
        Lox::Assign => "=",
        Lox::And => "and",
        Lox::Struct => "struct",
        Lox::Else => "else",
        Lox::Fun => "fun",
        Lox::For => "for",
        Lox::If => "if",
        Lox::Nil => "nil",
        Lox::Or => "or",
        Lox::Print => "print",
        Lox::Return => "return",
        Lox::Super => "super",
        Lox::This => "this",
        Lox::True => "true",
        Lox::False => "false",
        Lox::Var => "var",
        Lox::While => "while",
        Lox::Identifier => "orchid",
        Lox::String => "\"a\nb\"",
        Lox::Number => "3.14",
        Lox::Error => "@@",
    }
}

const PROGRAM: &str = r#"var x = 1.5; // set
if (x >= 2) {
  print "big";
}"#;

fn lexer() -> Lexer<Lox> {
    Lexer::for_kinds().unwrap()
}

fn dump(lexed: &Lexed<'_, Lox>) -> String {
    let mut out = String::new();
    for token in &lexed.tokens {
        out.push_str(&format!(
            "{:?} {} {:?}\n",
            token.kind, token.first_line, token.lexeme
        ));
    }
    out
}

#[test]
fn every_unfiltered_kind_lexes_alone() {
    let lexer = lexer();
    for &kind in Lox::ALL {
        let source = sample(kind);
        let lexed = lexer.lex(source).unwrap();
        assert!(lexed.is_complete(), "{kind:?}");

        if kind.filtered() {
            assert!(lexed.tokens.is_empty(), "{kind:?}");
            continue;
        }
        assert_eq!(lexed.tokens.len(), 1, "{kind:?}");
        assert_eq!(lexed.tokens[0].kind, kind);
        assert_eq!(lexed.tokens[0].lexeme, source);
    }
}

#[test]
fn can_lex_a_program() {
    let lexed = lexer().lex(PROGRAM).unwrap();
    assert!(lexed.is_complete());
    insta::assert_snapshot!(dump(&lexed), @r#"
    Var 0 "var"
    Identifier 0 "x"
    Assign 0 "="
    Number 0 "1.5"
    Semicolon 0 ";"
    If 1 "if"
    LeftParen 1 "("
    Identifier 1 "x"
    GreaterEqual 1 ">="
    Number 1 "2"
    RightParen 1 ")"
    LeftBrace 1 "{"
    Print 2 "print"
    String 2 "\"big\""
    Semicolon 2 ";"
    RightBrace 3 "}"
    "#);
}

#[test]
fn keywords_only_match_whole_words() {
    let lexed = lexer().lex("if iffy or orchid").unwrap();
    let kinds: Vec<_> = lexed.tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![Lox::If, Lox::Identifier, Lox::Or, Lox::Identifier]
    );
}

#[test]
fn unknown_input_becomes_error_tokens() {
    let lexed = lexer().lex("var @x = 1;\nprint \"abc").unwrap();
    let kinds: Vec<_> = lexed.tokens.iter().map(|t| (t.kind, t.lexeme)).collect();
    assert_eq!(
        kinds,
        vec![
            (Lox::Var, "var"),
            (Lox::Error, "@x"),
            (Lox::Assign, "="),
            (Lox::Number, "1"),
            (Lox::Semicolon, ";"),
            (Lox::Print, "print"),
            (Lox::Error, "\"abc"),
        ]
    );
    assert!(lexed.is_complete());
}

#[test]
fn multiline_lexemes_keep_lines_right() {
    let source = "/* a\nb */ var s = \"x\ny\";\nz";
    let lexed = lexer().lex(source).unwrap();
    let lines: Vec<_> = lexed
        .tokens
        .iter()
        .map(|t| (t.lexeme, t.first_line, t.num_lines))
        .collect();
    assert_eq!(
        lines,
        vec![
            ("var", 1, 0),
            ("s", 1, 0),
            ("=", 1, 0),
            ("\"x\ny\"", 1, 1),
            (";", 2, 0),
            ("z", 3, 0),
        ]
    );
    assert_eq!(lexed.line, 3);
}

#[test]
fn json_grammar_matches_the_kind_table() {
    let grammars = Grammars::builtin().unwrap();
    let raw = grammars.get("lox").unwrap();
    let json_lexer: Lexer<&str> = Lexer::new(raw.registry().unwrap()).unwrap();
    let enum_lexer = lexer();

    assert_eq!(json_lexer.registry().len(), Lox::ALL.len());
    for (entry, &kind) in json_lexer.registry().entries().iter().zip(Lox::ALL) {
        assert_eq!(entry.pattern, kind.pattern(), "{kind:?}");
        assert_eq!(entry.filtered, kind.filtered(), "{kind:?}");
    }

    let source = format!("{PROGRAM}\n/* trailing\n */ fun f(a, b) {{ return a != b; }} ~");
    let from_json = json_lexer.lex(&source).unwrap();
    let from_enum = enum_lexer.lex(&source).unwrap();
    assert_eq!(from_json.tokens.len(), from_enum.tokens.len());
    for (a, b) in from_json.tokens.iter().zip(&from_enum.tokens) {
        assert_eq!(
            json_lexer.registry().position(a.kind),
            enum_lexer.registry().position(b.kind)
        );
        assert_eq!(a.span, b.span);
        assert_eq!(a.first_line, b.first_line);
        assert_eq!(a.num_lines, b.num_lines);
    }
    assert_eq!(from_json.remainder, from_enum.remainder);
}
