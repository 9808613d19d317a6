//! Configuration error types.

/// Configuration error with source location.
///
/// Raised while loading `fixora.toml` layers or when a configuration value
/// falls outside its accepted domain.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// Error message
    pub message: String,
    /// Configuration key involved, if known
    pub key: Option<String>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixora_error::ConfigError;
    ///
    /// let err = ConfigError::new("Failed to parse fixora.toml");
    /// assert!(err.message.contains("fixora.toml"));
    /// assert!(err.key.is_none());
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            key: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Create a ConfigError attributed to a specific configuration key.
    ///
    /// ```
    /// use fixora_error::ConfigError;
    ///
    /// let err = ConfigError::for_key("defaults.scene_count", "must be between 1 and 10");
    /// assert_eq!(err.key.as_deref(), Some("defaults.scene_count"));
    /// assert!(err.to_string().contains("defaults.scene_count"));
    /// ```
    #[track_caller]
    pub fn for_key(key: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        let key = key.into();
        let location = std::panic::Location::caller();
        Self {
            message: format!("{}: {}", key, reason),
            key: Some(key),
            line: location.line(),
            file: location.file(),
        }
    }
}
