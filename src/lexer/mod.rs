//! Lexer module for Tusk
//!
//! Hand-written lexer that tokenizes Tusk source code into a stream of tokens.

mod scanner;
mod token;

pub use scanner::Lexer;
pub use token::{Keyword, Token, TokenKind};
