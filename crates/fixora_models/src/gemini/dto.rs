//! Wire types for the Gemini `generateContent` REST endpoint.

use derive_getters::Getters;
use fixora_core::GenerateRequest;
use serde::{Deserialize, Serialize};

/// A content turn: role plus text parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GeminiContent {
    /// `user` or `model`; omitted for the system instruction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    /// Ordered parts of the turn
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

impl GeminiContent {
    /// Single-part text content with an optional role.
    pub fn text(role: Option<&str>, text: impl Into<String>) -> Self {
        Self {
            role: role.map(str::to_string),
            parts: vec![GeminiPart {
                text: Some(text.into()),
                thought: None,
            }],
        }
    }
}

/// One part of a content turn. Only text parts are used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GeminiPart {
    /// Text payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    /// Set on reasoning summaries, which are not part of the answer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    thought: Option<bool>,
}

/// Output constraints for the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GeminiGenerationConfig {
    /// Requested MIME type of the answer
    response_mime_type: String,
    /// Schema the answer must follow
    response_schema: serde_json::Value,
}

/// Request body for `models/{model}:generateContent`.
///
/// # Examples
///
/// ```
/// use fixora_core::GenerateRequest;
/// use fixora_models::GeminiRequest;
/// use serde_json::json;
///
/// let req = GenerateRequest::new("Be brief.", "Hello", json!({"type": "OBJECT"}));
/// let body = serde_json::to_value(GeminiRequest::from(&req)).unwrap();
///
/// assert_eq!(body["systemInstruction"]["parts"][0]["text"], "Be brief.");
/// assert_eq!(body["contents"][0]["role"], "user");
/// assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    /// System instruction
    system_instruction: GeminiContent,
    /// Conversation turns (a single user turn here)
    contents: Vec<GeminiContent>,
    /// Structured output settings
    generation_config: GeminiGenerationConfig,
}

impl From<&GenerateRequest> for GeminiRequest {
    fn from(req: &GenerateRequest) -> Self {
        Self {
            system_instruction: GeminiContent::text(None, req.system_instruction().as_str()),
            contents: vec![GeminiContent::text(Some("user"), req.user_query().as_str())],
            generation_config: GeminiGenerationConfig {
                response_mime_type: req.response_mime_type().clone(),
                response_schema: req.response_schema().clone(),
            },
        }
    }
}

/// One generated candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GeminiCandidate {
    /// Generated content, absent when the candidate was blocked
    #[serde(default)]
    content: Option<GeminiContent>,
    /// Why generation stopped (`STOP`, `MAX_TOKENS`, `SAFETY`, ...)
    #[serde(default)]
    finish_reason: Option<String>,
}

/// Feedback on the prompt itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GeminiPromptFeedback {
    /// Set when the prompt was blocked
    #[serde(default)]
    block_reason: Option<String>,
}

/// Token accounting reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GeminiUsageMetadata {
    /// Tokens in the prompt
    #[serde(default)]
    prompt_token_count: u32,
    /// Tokens across candidates
    #[serde(default)]
    candidates_token_count: u32,
    /// Total tokens billed
    #[serde(default)]
    total_token_count: u32,
}

/// Response body of `generateContent`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GeminiResponse {
    /// Generated candidates, usually one
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    /// Prompt-level feedback
    #[serde(default)]
    prompt_feedback: Option<GeminiPromptFeedback>,
    /// Token usage
    #[serde(default)]
    usage_metadata: Option<GeminiUsageMetadata>,
}

impl GeminiResponse {
    /// Answer text of the first candidate.
    ///
    /// Concatenates its text parts, skipping reasoning summaries. Returns
    /// `None` when there is no candidate or the text is empty.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter(|part| part.thought != Some(true))
            .filter_map(|part| part.text.as_deref())
            .collect();
        (!text.is_empty()).then_some(text)
    }

    /// Finish reason of the first candidate, if reported.
    pub fn finish_reason(&self) -> Option<&str> {
        self.candidates.first()?.finish_reason.as_deref()
    }

    /// Prompt block reason, if the prompt was rejected.
    pub fn block_reason(&self) -> Option<&str> {
        self.prompt_feedback.as_ref()?.block_reason.as_deref()
    }
}

/// Error body returned with non-success HTTP statuses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct GeminiApiErrorEnvelope {
    pub(crate) error: GeminiApiError,
}

/// Details inside [`GeminiApiErrorEnvelope`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct GeminiApiError {
    #[serde(default)]
    pub(crate) message: String,
    #[serde(default)]
    pub(crate) status: Option<String>,
}
