//! Read-tokenize-print loop for Tusk
//!
//! Reads a line at a time, runs the lexer over it, and prints every token it
//! produces. No parsing or evaluation happens here.

use std::io::{BufRead, Write};

use crate::lexer::Lexer;

/// The prompt written before each line is read
pub const PROMPT: &str = ">>";

/// Run the read-tokenize-print loop until the input source is exhausted.
///
/// Each line gets a fresh lexer; every token it produces, including the
/// terminating `Eof` token, is written on its own line. A read error ends
/// the loop the same way end of input does, with no further output.
pub fn start<R: BufRead, W: Write>(mut input: R, mut output: W) -> std::io::Result<()> {
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) | Err(_) => return Ok(()),
            Ok(_) => {}
        }

        let mut lexer = Lexer::new(&line);
        loop {
            let token = lexer.next_token();
            let is_eof = token.kind.is_eof();
            writeln!(output, "{:?}", token)?;
            if is_eof {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str) -> String {
        let mut output = Vec::new();
        start(Cursor::new(input), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_empty_input_prints_one_prompt() {
        assert_eq!(run(""), ">>");
    }

    #[test]
    fn test_single_line() {
        let want = r#">>Token { kind: Keyword(Let), literal: "let" }
Token { kind: Ident, literal: "ten" }
Token { kind: Eq, literal: "=" }
Token { kind: Int, literal: "10" }
Token { kind: Semicolon, literal: ";" }
Token { kind: Eof, literal: "" }
>>"#;
        assert_eq!(run("let ten = 10;"), want);
    }

    #[test]
    fn test_each_line_gets_a_fresh_lexer() {
        let got = run("1;\n2;\n");

        // Three prompts: one per line plus the one that hits end of input
        assert_eq!(got.matches(PROMPT).count(), 3);
        assert_eq!(got.matches(r#"Token { kind: Int, literal: "1" }"#).count(), 1);
        assert_eq!(got.matches(r#"Token { kind: Int, literal: "2" }"#).count(), 1);
        assert_eq!(got.matches(r#"Token { kind: Eof, literal: "" }"#).count(), 2);
    }

    #[test]
    fn test_illegal_characters_are_printed_not_fatal() {
        let got = run("@\n");
        assert!(got.contains(r#"Token { kind: Illegal, literal: "@" }"#));
        assert!(got.ends_with(PROMPT));
    }
}
