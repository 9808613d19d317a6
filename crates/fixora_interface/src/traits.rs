//! Trait definitions for generative backends.

use async_trait::async_trait;
use fixora_core::{GenerateRequest, GenerateResponse};
use fixora_error::FixoraResult;
use std::sync::Arc;

/// Core trait that every generative backend implements.
///
/// A driver performs exactly one outbound call per [`generate`](Self::generate)
/// invocation. It does not retry, cache or serialize callers; concurrent
/// invocations proceed independently.
#[async_trait]
pub trait FixoraDriver: Send + Sync {
    /// Send one structured-output request and return the text payload.
    ///
    /// A successful call with no text payload returns
    /// `GenerateResponse { text: None }` rather than an error, leaving the
    /// caller to decide what an empty answer means.
    async fn generate(&self, req: &GenerateRequest) -> FixoraResult<GenerateResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier (e.g., "gemini-2.5-flash").
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<D: FixoraDriver + ?Sized> FixoraDriver for Arc<D> {
    async fn generate(&self, req: &GenerateRequest) -> FixoraResult<GenerateResponse> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

#[async_trait]
impl<D: FixoraDriver + ?Sized> FixoraDriver for Box<D> {
    async fn generate(&self, req: &GenerateRequest) -> FixoraResult<GenerateResponse> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
