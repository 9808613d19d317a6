//! JSON error types.

/// JSON encoding/decoding error with source location.
///
/// Used where Fixora itself serializes values (scene exports, schema dumps).
/// Decoding failures of model output are reported as
/// [`GenerationErrorKind::MalformedResponse`](crate::GenerationErrorKind) instead.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: {} at line {} in {}", message, line, file)]
pub struct JsonError {
    /// The underlying error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// Create a new JsonError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixora_error::JsonError;
    ///
    /// let err = JsonError::new("failed to encode scene prompt");
    /// assert!(err.message.contains("scene prompt"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
