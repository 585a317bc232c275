use reglex::{Lexer, TokenKind, keyword, patterns};

/// A tiny calculator language
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
enum Calc {
    Comment,
    Let,
    Name,
    Number,
    Operator,
    Invalid,
}

impl TokenKind for Calc {
    const ALL: &'static [Self] = &[
        Calc::Comment,
        Calc::Let,
        Calc::Name,
        Calc::Number,
        Calc::Operator,
        Calc::Invalid,
    ];

    fn pattern(self) -> &'static str {
        match self {
            Calc::Comment => r"#[^\n]*",
            Calc::Let => keyword!("let"),
            Calc::Name => patterns::IDENTIFIER,
            Calc::Number => patterns::REAL_NUMBER,
            Calc::Operator => r"[-+*/=()]",
            Calc::Invalid => patterns::NON_WHITESPACE,
        }
    }

    fn filtered(self) -> bool {
        matches!(self, Calc::Comment)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let lexer: Lexer<Calc> = Lexer::for_kinds()?;

    let code = "# circle area\nlet r = 2.5\nlet area = 3.14 * r * r $";
    let lexed = lexer.lex(code)?;
    for token in &lexed.tokens {
        if token.kind == Calc::Invalid {
            eprintln!("line {}: invalid token {:?}", token.first_line + 1, token.lexeme);
            continue;
        }
        println!("{:?} {:?}", token.kind, token.lexeme);
    }

    Ok(())
}
