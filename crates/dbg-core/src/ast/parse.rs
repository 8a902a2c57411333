mod lexer;
use lexer::Lexer;

mod peek;
pub(crate) use peek::Peek;

mod parser;
pub(crate) use parser::Parser;

pub(crate) use crate::Result;

use super::*;

pub(crate) trait Parse: Sized {
    fn parse(parser: &mut Parser<'_>) -> Result<Self>;
}

/// Parse a complete document. Either the whole document parses or an error
/// is returned; there is no partial AST.
pub fn from_str(src: &str) -> Result<Schema> {
    let mut parser = Parser::new(Lexer::new(src));
    let result = Schema::parse(&mut parser);
    parser.finish(result)
}

/// Split a document into its lexemes, dropping comments.
///
/// Unlike [`from_str`], default-value text is tokenized like everything
/// else, so a default that uses characters outside the lexical alphabet is a
/// lexical error here.
pub fn tokenize(src: &str) -> Result<Vec<Lexeme>> {
    let mut lexer = Lexer::new(src);
    let mut lexemes = vec![];

    while let Some(lexeme) = lexer.next() {
        lexemes.push(lexeme);
    }

    if let Some(err) = lexer.take_error() {
        return Err(err);
    }

    tracing::debug!(tokens = lexemes.len(), "tokenized document");
    Ok(lexemes)
}

impl<T: Peek> Parse for Option<T> {
    fn parse(p: &mut Parser<'_>) -> Result<Self> {
        if p.is_next::<T>() {
            Ok(Some(p.parse()?))
        } else {
            Ok(None)
        }
    }
}
