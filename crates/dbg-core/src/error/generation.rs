use super::Error;

/// Error when the code generator cannot render the schema model.
#[derive(Debug)]
pub(super) struct GenerationError {
    message: Box<str>,
}

impl std::error::Error for GenerationError {}

impl core::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "generation error: {}", self.message)
    }
}

impl Error {
    /// Creates a generation error.
    pub fn generation(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Generation(GenerationError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a generation error.
    pub fn is_generation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Generation(_))
    }
}
