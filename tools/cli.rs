use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use reglex::{Grammars, Lexed, Lexer, RawGrammar};

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One `KIND line "lexeme"` line per token
    Text,
    /// The full lexing result as JSON
    Json,
}

/// Lexes files with a reglex grammar and prints the tokens
#[derive(Debug, Parser)]
#[command(name = "reglex-cli", version)]
struct Cli {
    /// Path to a JSON grammar file
    #[arg(long, conflicts_with = "lang")]
    grammar: Option<PathBuf>,

    /// Name or alias of a builtin grammar
    #[arg(long, default_value = "lox")]
    lang: String,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Files to lex
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn print_lexed(
    path: &Path,
    lexed: &Lexed<'_, &str>,
    format: Format,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        Format::Text => {
            for token in &lexed.tokens {
                println!("{} {} {:?}", token.kind, token.first_line, token.lexeme);
            }
        }
        Format::Json => {
            let out = serde_json::json!({
                "file": path,
                "result": lexed,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}

/// Lexes and prints one file, returns whether it was consumed entirely
fn lex_file(
    lexer: &Lexer<&str>,
    path: &Path,
    format: Format,
) -> Result<bool, Box<dyn std::error::Error>> {
    let source = fs::read_to_string(path)?;
    let lexed = lexer.lex(&source)?;
    print_lexed(path, &lexed, format)?;

    if lexed.is_complete() {
        return Ok(true);
    }
    eprintln!(
        "{}: unexpected input at line {}: {:?}",
        path.display(),
        lexed.remainder_line() + 1,
        lexed.remainder.trim_start().lines().next().unwrap_or("")
    );
    Ok(false)
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let raw_grammar = match &cli.grammar {
        Some(path) => RawGrammar::load_from_file(path)?,
        None => Grammars::builtin()?.get(&cli.lang)?.clone(),
    };
    let lexer: Lexer<&str> = Lexer::new(raw_grammar.registry()?)?;
    log::info!(
        "Using grammar {} with {} token kinds",
        raw_grammar.name,
        lexer.registry().len()
    );

    let mut failed = 0;
    for path in &cli.files {
        match lex_file(&lexer, path, cli.format) {
            Ok(true) => {}
            Ok(false) => failed += 1,
            Err(err) => {
                failed += 1;
                eprintln!("{}: {}", path.display(), err);
            }
        }
    }

    if failed > 0 {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
