use reglex::{Grammars, Lexer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load the builtin grammars and compile the Lox one
    let grammars = Grammars::builtin()?;
    let registry = grammars.get("lox")?.registry()?;
    let lexer: Lexer<&str> = Lexer::new(registry)?;

    let code = "var answer = 42; // the answer\nprint answer;";
    let lexed = lexer.lex(code)?;
    for token in &lexed.tokens {
        println!("{} {} {:?}", token.kind, token.first_line, token.lexeme);
    }

    Ok(())
}
