//! Google Gemini REST client.
//!
//! Sends one `generateContent` request per call with a system instruction, a
//! single user turn and a JSON response schema, and hands back the text of the
//! first candidate.
//!
//! # Example
//!
//! ```no_run
//! use fixora_core::GenerateRequest;
//! use fixora_interface::FixoraDriver;
//! use fixora_models::GeminiClient;
//! use serde_json::json;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new()?;
//!
//! let request = GenerateRequest::new(
//!     "Answer with a JSON object.",
//!     "Name a colour",
//!     json!({ "type": "OBJECT", "properties": { "name": { "type": "STRING" } } }),
//! );
//! let response = client.generate(&request).await?;
//! println!("{:?}", response.text);
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use std::env;
use tracing::{debug, instrument, warn};

use fixora_core::{GenerateRequest, GenerateResponse};
use fixora_error::{FixoraResult, GeminiError, GeminiErrorKind};
use fixora_interface::FixoraDriver;

use super::GeminiResult;
use super::dto::{GeminiApiErrorEnvelope, GeminiRequest, GeminiResponse};

/// Model used when neither the client nor the request names one.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Public Gemini API root.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variables consulted for the API key, in order.
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Client for the Gemini `generateContent` endpoint.
///
/// Cheap to clone; clones share the underlying connection pool. The client
/// holds no per-request state, so concurrent calls are independent.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    /// API key sent in the `x-goog-api-key` header
    api_key: String,
    /// Default model name when `req.model` is None
    model_name: String,
    /// API root, overridable for proxies and tests
    base_url: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model_name", &self.model_name)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client using the API key from the environment.
    ///
    /// Reads `GEMINI_API_KEY`, falling back to `API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiErrorKind::MissingApiKey`] when neither variable is set
    /// to a non-empty value.
    #[instrument(name = "gemini_client_new")]
    pub fn new() -> FixoraResult<Self> {
        let api_key = resolve_api_key(|name| env::var(name).ok())?;
        Self::with_api_key(api_key)
    }

    /// Create a client with an explicit API key.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiErrorKind::ClientCreation`] if the HTTP client cannot be
    /// initialized.
    #[instrument(name = "gemini_client_with_api_key", skip_all)]
    pub fn with_api_key(api_key: impl Into<String>) -> FixoraResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("fixora/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        Ok(Self {
            http,
            api_key: api_key.into(),
            model_name: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Use `model` when a request does not name one.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model_name = model.into();
        self
    }

    /// Send requests to `base_url` instead of the public endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// API root requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full `generateContent` URL for `model`.
    ///
    /// Accepts bare names (`gemini-2.5-flash`) and resource names
    /// (`models/gemini-2.5-flash`).
    pub fn endpoint(&self, model: &str) -> String {
        let model = model.strip_prefix("models/").unwrap_or(model);
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    #[instrument(
        name = "gemini_generate",
        skip(self, req),
        fields(model = %req.model().as_deref().unwrap_or(&self.model_name))
    )]
    async fn generate_internal(&self, req: &GenerateRequest) -> GeminiResult<GenerateResponse> {
        let model = req.model().as_deref().unwrap_or(&self.model_name);
        let url = self.endpoint(model);
        let body = GeminiRequest::from(req);

        debug!(url = %url, "Sending Gemini generateContent request");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string())))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string())))?;

        if !status.is_success() {
            let message = api_error_message(&text);
            warn!(status = status.as_u16(), message = %message, "Gemini API returned an error");
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            }));
        }

        let parsed: GeminiResponse = serde_json::from_str(&text)
            .map_err(|e| GeminiError::new(GeminiErrorKind::ResponseParsing(e.to_string())))?;

        if let Some(reason) = parsed.block_reason() {
            warn!(reason, "Gemini blocked the prompt");
        }
        debug!(
            finish_reason = parsed.finish_reason().unwrap_or("unknown"),
            has_text = parsed.text().is_some(),
            "Received Gemini response"
        );

        Ok(GenerateResponse {
            text: parsed.text(),
        })
    }
}

#[async_trait]
impl FixoraDriver for GeminiClient {
    async fn generate(&self, req: &GenerateRequest) -> FixoraResult<GenerateResponse> {
        self.generate_internal(req).await.map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    /// Returns the default model name used when `GenerateRequest.model` is None.
    fn model_name(&self) -> &str {
        &self.model_name
    }
}

/// First non-empty value among [`API_KEY_VARS`], looked up through `lookup`.
pub(crate) fn resolve_api_key(
    lookup: impl Fn(&str) -> Option<String>,
) -> GeminiResult<String> {
    API_KEY_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .ok_or_else(|| GeminiError::new(GeminiErrorKind::MissingApiKey))
}

/// Human-readable message from an error body, falling back to the raw body.
fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<GeminiApiErrorEnvelope>(body) {
        Ok(envelope) => match envelope.error.status {
            Some(status) if !envelope.error.message.is_empty() => {
                format!("{} ({})", envelope.error.message, status)
            }
            Some(status) => status,
            None => envelope.error.message,
        },
        Err(_) => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn api_key_prefers_gemini_variable() {
        let key = resolve_api_key(lookup(&[("GEMINI_API_KEY", "g-key"), ("API_KEY", "a-key")]));
        assert_eq!(key.unwrap(), "g-key");
    }

    #[test]
    fn api_key_falls_back_to_generic_variable() {
        let key = resolve_api_key(lookup(&[("GEMINI_API_KEY", "  "), ("API_KEY", "a-key")]));
        assert_eq!(key.unwrap(), "a-key");
    }

    #[test]
    fn missing_api_key_is_reported() {
        let err = resolve_api_key(lookup(&[])).unwrap_err();
        assert_eq!(err.kind, GeminiErrorKind::MissingApiKey);
    }

    #[test]
    fn endpoint_accepts_bare_and_resource_names() {
        let client = GeminiClient::with_api_key("k")
            .unwrap()
            .with_base_url("http://localhost:9000/v1beta/");
        assert_eq!(
            client.endpoint("gemini-2.5-flash"),
            "http://localhost:9000/v1beta/models/gemini-2.5-flash:generateContent"
        );
        assert_eq!(
            client.endpoint("models/gemini-2.5-pro"),
            "http://localhost:9000/v1beta/models/gemini-2.5-pro:generateContent"
        );
    }

    #[test]
    fn debug_output_hides_api_key() {
        let client = GeminiClient::with_api_key("super-secret").unwrap();
        let debug = format!("{:?}", client);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains(DEFAULT_MODEL));
    }

    #[test]
    fn api_error_message_prefers_structured_body() {
        let body = r#"{"error":{"code":429,"message":"Resource has been exhausted","status":"RESOURCE_EXHAUSTED"}}"#;
        assert_eq!(
            api_error_message(body),
            "Resource has been exhausted (RESOURCE_EXHAUSTED)"
        );
        assert_eq!(api_error_message("  upstream timeout \n"), "upstream timeout");
    }
}
