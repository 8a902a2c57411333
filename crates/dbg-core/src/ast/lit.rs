use super::*;

/// An integer literal: `[0-9]+`.
///
/// Integers only appear in default-value text, which the parser captures
/// verbatim, so the grammar never asks for one. They are still part of the
/// lexical alphabet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LitInt {
    digits: String,
}

impl LitInt {
    pub fn new(digits: impl Into<String>) -> LitInt {
        LitInt {
            digits: digits.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }
}
