//! Tusk - tokenizer for a small C-like scripting language
//!
//! This crate converts Tusk source text into a stream of classified tokens
//! and exposes an interactive read-tokenize-print loop around it. There is
//! no parser or evaluator; the token stream is the product.

pub mod errors;
pub mod lexer;
pub mod repl;

// Re-export commonly used types
pub use errors::{SourceSpan, TuskError, TuskResult};
pub use lexer::{Keyword, Lexer, Token, TokenKind};
