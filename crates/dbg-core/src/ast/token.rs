use super::*;

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Ident(Ident),
    Int(LitInt),
    Punct(Punct),
}

/// A token together with the source range it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    pub token: Token,
    pub span: Span,
}

impl Token {
    /// Human readable form used in diagnostics.
    pub fn describe(&self) -> String {
        match self {
            Token::Punct(punct) => punct.describe(),
            token => format!("`{token}`"),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Ident(ident) => fmt::Display::fmt(ident, f),
            Token::Int(lit) => f.write_str(lit.as_str()),
            Token::Punct(punct) => write!(f, "{}", punct.as_char()),
        }
    }
}
