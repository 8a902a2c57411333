use std::fmt::Display;

use super::*;

/// A symbol: `[a-zA-Z][a-zA-Z_]*`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ident {
    name: String,
}

impl Ident {
    pub fn new(name: impl Into<String>) -> Ident {
        Ident { name: name.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl Parse for Ident {
    fn parse(p: &mut Parser<'_>) -> Result<Self> {
        match Ident::from_token(p.peek_token()) {
            Some(ident) => {
                p.next_token();
                Ok(ident)
            }
            None => Err(p.error("a symbol")),
        }
    }
}

impl Peek for Ident {
    fn from_token(token: Option<&Token>) -> Option<Self> {
        match token {
            Some(Token::Ident(ident)) => Some(ident.clone()),
            _ => None,
        }
    }
}

impl AsRef<str> for Ident {
    fn as_ref(&self) -> &str {
        self.name.as_ref()
    }
}
