//! Script generation error types.

/// Ways a script generation call can fail.
///
/// The variants mirror the three observable failure modes of a generation:
/// nothing came back, something came back but it is not a script, or the
/// call never completed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GenerationErrorKind {
    /// The API answered without any text payload
    #[display("No text response from the model")]
    EmptyResponse,
    /// The text payload is not valid JSON or does not describe a script
    #[display("Malformed script response: {}", _0)]
    MalformedResponse(String),
    /// The request itself failed (network, authentication, quota, HTTP status)
    #[display("{}", _0)]
    Transport(String),
}

/// Generation error with source location tracking.
///
/// `Display` renders only the human-readable message so a front end can show
/// it verbatim. Location details stay available through the public fields.
///
/// # Examples
///
/// ```
/// use fixora_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::EmptyResponse);
/// assert_eq!(err.to_string(), "No text response from the model");
///
/// let err = GenerationError::new(GenerationErrorKind::Transport(
///     "HTTP 429 error: quota exceeded".to_string(),
/// ));
/// assert_eq!(err.to_string(), "HTTP 429 error: quota exceeded");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("{}", kind)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GenerationErrorKind {
        &self.kind
    }
}
