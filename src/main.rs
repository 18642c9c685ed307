//! Tusk CLI - interactive tokenizer for the Tusk scripting language

use std::env;
use std::fs;
use std::io;
use std::process::ExitCode;

use tusk::errors::print_errors;
use tusk::{Lexer, TuskError, TuskResult, repl};

fn usage() {
    println!("Tusk - Scripting Language Tokenizer");
    println!("Version {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: tusk [command]");
    println!();
    println!("Commands:");
    println!("  (none)                 Start the interactive token REPL");
    println!("  lex <file>             Tokenize a source file and print its tokens");
    println!("  help                   Show this message");
    println!();
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!(
            "Tusk v{} - type some code to see its tokens",
            env!("CARGO_PKG_VERSION")
        );
        let stdin = io::stdin();
        return match repl::start(stdin.lock(), io::stdout()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("IO error: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    match args[1].as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Error: missing file argument");
                return ExitCode::FAILURE;
            }

            match lex_file(&args[2]) {
                Ok(code) => code,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        "help" | "--help" | "-h" => {
            usage();
            ExitCode::SUCCESS
        }
        command => {
            eprintln!("Unknown command: {}", command);
            eprintln!("Run 'tusk help' for usage information");
            ExitCode::FAILURE
        }
    }
}

/// Tokenize a whole file, printing every token and reporting illegal characters
fn lex_file(filename: &str) -> TuskResult<ExitCode> {
    let source = fs::read_to_string(filename)?;

    let mut lexer = Lexer::new(&source);
    let mut errors = Vec::new();
    loop {
        let token = lexer.next_token();
        let is_eof = token.kind.is_eof();

        if token.kind.is_illegal() {
            errors.push(TuskError::lexer(
                format!("unrecognized character '{}'", token.literal),
                lexer.span(),
            ));
        }

        println!("{:?}", token);
        if is_eof {
            break;
        }
    }

    if errors.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        print_errors(&source, &errors);
        Ok(ExitCode::FAILURE)
    }
}
