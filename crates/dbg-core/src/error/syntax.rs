use super::Error;
use crate::ast::Position;

/// Error when the token stream does not match the grammar.
///
/// Carries the innermost grammar rule that was being parsed, a description of
/// what the rule expected, what was found instead, and where.
#[derive(Debug)]
pub(super) struct SyntaxError {
    rule: &'static str,
    expected: Box<str>,
    found: Option<Box<str>>,
    position: Position,
}

impl std::error::Error for SyntaxError {}

impl core::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "syntax error in {} at {}: expected {}, found ",
            self.rule, self.position, self.expected
        )?;

        match &self.found {
            Some(found) => f.write_str(found),
            None => f.write_str("end of input"),
        }
    }
}

impl Error {
    /// Creates a syntax error. `found` is `None` at end of input.
    pub fn syntax(
        rule: &'static str,
        expected: impl Into<String>,
        found: Option<&str>,
        position: Position,
    ) -> Error {
        Error::from(super::ErrorKind::Syntax(SyntaxError {
            rule,
            expected: expected.into().into(),
            found: found.map(Into::into),
            position,
        }))
    }

    /// Returns `true` if this error is a syntax error.
    pub fn is_syntax(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Syntax(_))
    }
}
