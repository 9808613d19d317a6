//! Model provider integrations for Fixora.
//!
//! Currently ships a single driver, [`GeminiClient`], which implements
//! [`FixoraDriver`](fixora_interface::FixoraDriver) against the Google Gemini
//! REST API.
//!
//! # Example
//!
//! ```no_run
//! use fixora_models::GeminiClient;
//! use fixora_interface::FixoraDriver;
//! use fixora_core::GenerateRequest;
//! use serde_json::json;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new()?.with_model("gemini-2.5-flash");
//! let request = GenerateRequest::new("Reply in JSON.", "Hello", json!({ "type": "OBJECT" }));
//! let response = client.generate(&request).await?;
//! # Ok(())
//! # }
//! ```

mod gemini;

pub use gemini::{
    API_KEY_VARS, DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiCandidate, GeminiClient, GeminiContent,
    GeminiGenerationConfig, GeminiPart, GeminiPromptFeedback, GeminiRequest, GeminiResponse,
    GeminiResult, GeminiUsageMetadata,
};
