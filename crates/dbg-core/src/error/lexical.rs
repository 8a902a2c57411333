use super::Error;
use crate::ast::Position;

/// Error when the tokenizer meets a character outside the lexical alphabet.
#[derive(Debug)]
pub(super) struct LexicalError {
    ch: char,
    position: Position,
}

impl std::error::Error for LexicalError {}

impl core::fmt::Display for LexicalError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "lexical error: unexpected character {:?} at {}",
            self.ch, self.position
        )
    }
}

impl Error {
    /// Creates a lexical error for an unmatched character.
    pub fn lexical(ch: char, position: Position) -> Error {
        Error::from(super::ErrorKind::Lexical(LexicalError { ch, position }))
    }

    /// Returns `true` if this error is a lexical error.
    pub fn is_lexical(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Lexical(_))
    }
}
