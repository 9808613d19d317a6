//! Google Gemini API client.
//!
//! [`GeminiClient`] talks to the REST `generateContent` endpoint with
//! structured JSON output. The wire types live in [`dto`](self) and are
//! exported for callers that want to inspect the exact request body.

mod client;
mod dto;

pub use client::{API_KEY_VARS, DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiClient};
pub use dto::{
    GeminiCandidate, GeminiContent, GeminiGenerationConfig, GeminiPart, GeminiPromptFeedback,
    GeminiRequest, GeminiResponse, GeminiUsageMetadata,
};

/// Result type for Gemini operations.
pub type GeminiResult<T> = Result<T, fixora_error::GeminiError>;
