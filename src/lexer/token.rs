//! Token definitions for Tusk
//!
//! Defines all token types produced by the lexer.

use std::fmt;

/// A token produced by the lexer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The exact source text this token was scanned from
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }
}

/// Keywords in the Tusk language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Fn,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl Keyword {
    /// Try to parse a string as a keyword
    pub fn from_str(s: &str) -> Option<Keyword> {
        match s {
            "fn" => Some(Keyword::Fn),
            "let" => Some(Keyword::Let),
            "true" => Some(Keyword::True),
            "false" => Some(Keyword::False),
            "if" => Some(Keyword::If),
            "else" => Some(Keyword::Else),
            "return" => Some(Keyword::Return),
            _ => None,
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Keyword::Fn => "fn",
            Keyword::Let => "let",
            Keyword::True => "true",
            Keyword::False => "false",
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::Return => "return",
        };
        write!(f, "{}", s)
    }
}

/// The kind of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // Literals
    /// Integer literal (decimal digits, captured textually)
    Int,
    /// Identifier
    Ident,
    /// Keyword
    Keyword(Keyword),

    // Punctuation - single character
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `;`
    Semicolon,
    /// `,`
    Comma,

    // Operators - single character
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `!`
    Bang,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `=`
    Eq,

    // Operators - multi character
    /// `==`
    EqEq,
    /// `!=`
    BangEq,

    // Special
    /// End of input
    Eof,
    /// A single character the lexer could not classify
    Illegal,
}

impl TokenKind {
    /// Check if this is an EOF token
    pub fn is_eof(&self) -> bool {
        matches!(self, TokenKind::Eof)
    }

    /// Check if this is an illegal-character token
    pub fn is_illegal(&self) -> bool {
        matches!(self, TokenKind::Illegal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(Keyword::from_str("fn"), Some(Keyword::Fn));
        assert_eq!(Keyword::from_str("let"), Some(Keyword::Let));
        assert_eq!(Keyword::from_str("true"), Some(Keyword::True));
        assert_eq!(Keyword::from_str("false"), Some(Keyword::False));
        assert_eq!(Keyword::from_str("if"), Some(Keyword::If));
        assert_eq!(Keyword::from_str("else"), Some(Keyword::Else));
        assert_eq!(Keyword::from_str("return"), Some(Keyword::Return));
    }

    #[test]
    fn test_non_keywords_are_not_keywords() {
        assert_eq!(Keyword::from_str("foo"), None);
        assert_eq!(Keyword::from_str("letx"), None);
        assert_eq!(Keyword::from_str("Fn"), None);
        assert_eq!(Keyword::from_str(""), None);
    }

    #[test]
    fn test_keyword_display_round_trips() {
        for kw in [
            Keyword::Fn,
            Keyword::Let,
            Keyword::True,
            Keyword::False,
            Keyword::If,
            Keyword::Else,
            Keyword::Return,
        ] {
            assert_eq!(Keyword::from_str(&kw.to_string()), Some(kw));
        }
    }

    #[test]
    fn test_token_equality_is_structural() {
        assert_eq!(
            Token::new(TokenKind::Int, "10"),
            Token::new(TokenKind::Int, "10")
        );
        assert_ne!(
            Token::new(TokenKind::Int, "10"),
            Token::new(TokenKind::Int, "11")
        );
        assert_ne!(
            Token::new(TokenKind::Ident, "x"),
            Token::new(TokenKind::Int, "x")
        );
    }
}
