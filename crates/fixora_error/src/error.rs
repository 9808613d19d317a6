//! Top-level error wrapper types.

use crate::{BuilderError, ConfigError, GeminiError, GenerationError, JsonError};

/// Every error condition a Fixora crate can surface.
///
/// # Examples
///
/// ```
/// use fixora_error::{ConfigError, FixoraError};
///
/// let err: FixoraError = ConfigError::new("bad layer").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum FixoraErrorKind {
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Gemini provider error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Script generation error
    #[from(GenerationError)]
    Generation(GenerationError),
}

/// Fixora error with kind discrimination.
///
/// # Examples
///
/// ```
/// use fixora_error::{FixoraErrorKind, FixoraResult, GeminiError, GeminiErrorKind};
///
/// fn connect() -> FixoraResult<()> {
///     Err(GeminiError::new(GeminiErrorKind::MissingApiKey))?
/// }
///
/// let err = connect().unwrap_err();
/// assert!(matches!(err.kind(), FixoraErrorKind::Gemini(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Fixora Error: {}", _0)]
pub struct FixoraError(Box<FixoraErrorKind>);

impl FixoraError {
    /// Create a new error from a kind.
    pub fn new(kind: FixoraErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &FixoraErrorKind {
        &self.0
    }

    /// Human-readable message without the wrapper prefixes.
    ///
    /// Front ends show this text to users; the full `Display` output keeps the
    /// source location for logs.
    pub fn message(&self) -> String {
        match self.kind() {
            FixoraErrorKind::Json(e) => e.message.clone(),
            FixoraErrorKind::Config(e) => e.message.clone(),
            FixoraErrorKind::Builder(e) => e.kind().to_string(),
            FixoraErrorKind::Gemini(e) => e.kind.to_string(),
            FixoraErrorKind::Generation(e) => e.kind.to_string(),
        }
    }
}

// Generic From implementation for any type that converts to FixoraErrorKind
impl<T> From<T> for FixoraError
where
    T: Into<FixoraErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Fixora operations.
pub type FixoraResult<T> = std::result::Result<T, FixoraError>;
