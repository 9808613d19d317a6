//! Script generation: prompt, one driver call, decoded script.

use derive_getters::Getters;
use fixora_core::{ScriptContent, VideoConfig};
use fixora_error::{GenerationError, GenerationErrorKind};
use fixora_interface::FixoraDriver;
use fixora_prompt::PromptBuilder;
use tracing::{debug, info, instrument, warn};

/// Turns an idea and a [`VideoConfig`] into a [`ScriptContent`].
///
/// Each call to [`generate`](Self::generate) issues exactly one request
/// through the driver. There is no retry, caching or timeout handling here,
/// and no shared state between calls, so one generator can serve concurrent
/// callers.
///
/// # Examples
///
/// ```no_run
/// use fixora::{GeminiClient, ScriptGenerator, VideoConfig};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let generator = ScriptGenerator::new(GeminiClient::new()?);
/// let config = VideoConfig::default().with_scene_count(3)?;
///
/// let script = generator.generate("a dog learns to surf", &config).await?;
/// for item in &script.script_timeline {
///     println!("{} {}", item.timestamp, item.label);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ScriptGenerator<D> {
    driver: D,
    model: Option<String>,
}

impl<D: FixoraDriver> ScriptGenerator<D> {
    /// Creates a generator backed by `driver`, using the driver's default model.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            model: None,
        }
    }

    /// Requests `model` instead of the driver's default.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Generates a script for `idea`.
    ///
    /// The idea is used as given; callers reject empty input before calling.
    ///
    /// # Errors
    ///
    /// - [`GenerationErrorKind::Transport`] when the driver call fails, carrying
    ///   the driver's message.
    /// - [`GenerationErrorKind::EmptyResponse`] when the answer has no text.
    /// - [`GenerationErrorKind::MalformedResponse`] when the text is not a
    ///   script (see [`parse_script`]).
    #[instrument(
        skip(self, idea, config),
        fields(
            provider = self.driver.provider_name(),
            video_model = %config.model(),
            parts = config.part_count(),
        )
    )]
    pub async fn generate(
        &self,
        idea: &str,
        config: &VideoConfig,
    ) -> Result<ScriptContent, GenerationError> {
        let request = PromptBuilder::new(*config)
            .build(idea)
            .into_request(self.model.clone());

        let response = self.driver.generate(&request).await.map_err(|e| {
            warn!(error = %e, "Generation request failed");
            GenerationError::new(GenerationErrorKind::Transport(e.message()))
        })?;

        let text = match response.text {
            Some(text) if !text.is_empty() => text,
            _ => {
                warn!("Model returned no text");
                return Err(GenerationError::new(GenerationErrorKind::EmptyResponse));
            }
        };
        debug!(response_len = text.len(), "Received script text");

        let script = parse_script(&text)?;
        info!(
            scenes = script.script_timeline.len(),
            title = %script.seo_title,
            "Generated script"
        );
        Ok(script)
    }

    /// Generates a script and packages the attempt as a [`GenerationOutcome`].
    pub async fn run(&self, idea: impl Into<String>, config: VideoConfig) -> GenerationOutcome {
        let idea = idea.into();
        let result = self.generate(&idea, &config).await;
        GenerationOutcome {
            config,
            idea,
            result,
        }
    }
}

/// Decodes model output into a [`ScriptContent`].
///
/// Requires valid JSON with every script field present and at least one
/// timeline entry.
///
/// # Examples
///
/// ```
/// use fixora::{GenerationErrorKind, parse_script};
///
/// let err = parse_script("{not json").unwrap_err();
/// assert!(matches!(err.kind(), GenerationErrorKind::MalformedResponse(_)));
/// ```
pub fn parse_script(text: &str) -> Result<ScriptContent, GenerationError> {
    let script: ScriptContent = serde_json::from_str(text).map_err(|e| {
        warn!(error = %e, "Model output is not a valid script");
        GenerationError::new(GenerationErrorKind::MalformedResponse(e.to_string()))
    })?;

    if script.script_timeline.is_empty() {
        warn!("Model output has an empty script_timeline");
        return Err(GenerationError::new(GenerationErrorKind::MalformedResponse(
            "script_timeline is empty".to_string(),
        )));
    }

    Ok(script)
}

/// One generation attempt: what was asked and what came back.
///
/// Replaces any notion of a shared "busy" flag or "last result": every
/// attempt produces its own value that the caller owns.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct GenerationOutcome {
    /// Configuration the script was requested for
    config: VideoConfig,
    /// Idea as submitted
    idea: String,
    /// The script or the reason there is none
    result: Result<ScriptContent, GenerationError>,
}

impl GenerationOutcome {
    /// Whether a script was produced.
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// The script, if one was produced.
    pub fn script(&self) -> Option<&ScriptContent> {
        self.result.as_ref().ok()
    }

    /// The failure, if any.
    pub fn error(&self) -> Option<&GenerationError> {
        self.result.as_ref().err()
    }

    /// Consumes the outcome, returning the result.
    pub fn into_result(self) -> Result<ScriptContent, GenerationError> {
        self.result
    }
}
