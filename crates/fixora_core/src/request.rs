//! Provider-neutral request and response types.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// MIME type requesting JSON-only model output.
pub const JSON_MIME_TYPE: &str = "application/json";

/// A single structured-output generation request.
///
/// Carries everything a driver needs for one call: the system instruction,
/// the user turn and the JSON schema the answer must follow.
///
/// # Examples
///
/// ```
/// use fixora_core::GenerateRequest;
/// use serde_json::json;
///
/// let request = GenerateRequest::builder()
///     .system_instruction("You are a script writer.")
///     .user_query("Write about a dog learning to surf")
///     .response_schema(json!({ "type": "OBJECT" }))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.response_mime_type(), "application/json");
/// assert!(request.model().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct GenerateRequest {
    /// Model identifier override; the driver default is used when `None`
    #[builder(default)]
    model: Option<String>,
    /// Role, language and structure rules
    system_instruction: String,
    /// User turn embedding the idea
    user_query: String,
    /// Schema the JSON answer must conform to
    response_schema: serde_json::Value,
    /// Requested response MIME type
    #[builder(default = "JSON_MIME_TYPE.to_string()")]
    response_mime_type: String,
}

impl GenerateRequest {
    /// Creates a new builder for `GenerateRequest`.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }

    /// Creates a JSON-output request using the driver's default model.
    pub fn new(
        system_instruction: impl Into<String>,
        user_query: impl Into<String>,
        response_schema: serde_json::Value,
    ) -> Self {
        Self {
            model: None,
            system_instruction: system_instruction.into(),
            user_query: user_query.into(),
            response_schema,
            response_mime_type: JSON_MIME_TYPE.to_string(),
        }
    }

    /// Sets the model override.
    pub fn with_model(mut self, model: Option<String>) -> Self {
        self.model = model;
        self
    }
}

/// The text payload returned by a driver.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Concatenated text of the first candidate, `None` when nothing was returned
    pub text: Option<String>,
}

impl GenerateResponse {
    /// Response carrying the given text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    /// Response without any text payload.
    pub fn empty() -> Self {
        Self::default()
    }
}
