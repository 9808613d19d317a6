//! Assembles the system instruction, user query and schema for one request.

use crate::rules::{self, SEO_LANGUAGE};
use crate::{TimelinePlan, response_schema};
use fixora_core::{GenerateRequest, VideoConfig};
use serde::Serialize;
use tracing::{debug, instrument};

/// Everything needed to ask the model for one script.
#[derive(Debug, Clone, PartialEq, Serialize, derive_getters::Getters)]
pub struct ScriptPrompt {
    /// Role, language and structure rules
    system_instruction: String,
    /// User turn embedding the idea
    user_query: String,
    /// JSON schema the response must follow
    response_schema: serde_json::Value,
    /// Planned parts the instruction asks for
    plan: TimelinePlan,
}

impl ScriptPrompt {
    /// Converts the prompt into a driver request.
    ///
    /// `model` overrides the driver's default model when set.
    pub fn into_request(self, model: Option<String>) -> GenerateRequest {
        GenerateRequest::new(
            self.system_instruction,
            self.user_query,
            self.response_schema,
        )
        .with_model(model)
    }
}

/// Derives prompts from a [`VideoConfig`].
///
/// Pure and deterministic: the same configuration and idea always produce the
/// same prompt, and building never fails.
///
/// # Examples
///
/// ```
/// use fixora_core::{VideoConfig, VideoModel};
/// use fixora_prompt::PromptBuilder;
///
/// let config = VideoConfig::default().with_model(VideoModel::ShortA);
/// let prompt = PromptBuilder::new(config).build("a cat opens a bakery");
///
/// assert!(prompt.system_instruction().contains("exactly 4 parts"));
/// assert!(prompt.system_instruction().contains("Total duration 15 seconds"));
/// assert!(prompt.user_query().contains("\"a cat opens a bakery\""));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_getters::Getters)]
pub struct PromptBuilder {
    /// Configuration the prompts are built for
    config: VideoConfig,
}

impl PromptBuilder {
    /// Creates a builder for `config`.
    pub fn new(config: VideoConfig) -> Self {
        Self { config }
    }

    /// Planned timeline for the configuration.
    pub fn plan(&self) -> TimelinePlan {
        TimelinePlan::for_config(&self.config)
    }

    /// System instruction describing role, language rules and structure rules.
    pub fn system_instruction(&self) -> String {
        let plan = self.plan();
        let model = *self.config.model();
        let voiceover = *self.config.voiceover_language();

        let role = format!(
            "You are a professional Creative Director and Script Writer for short-form video \
             content made with the AI video model {}.",
            model
        );
        let role = match rules::role_addon(model) {
            "" => role,
            addon => format!("{} {}", role, addon),
        };

        format!(
            "{role}\n\
             \n\
             LANGUAGE RULES (STRICT MODE):\n\
             1. JSON fields 'action', 'scene', 'style', 'camera': MUST be written in {prompt_language}.\n\
             {voiceover_language_rule}\n\
             3. Fields 'seo_title', 'description', 'cta_seo', 'hashtags': write in {SEO_LANGUAGE}.\n\
             \n\
             STRUCTURE RULES:\n\
             1. Output MUST be JSON that follows the schema.\n\
             2. Total length: {duration}. Structure: {parts}.\n\
             3. Visual content must be detailed and cinematic.\n\
             4. {voiceover_content_rule}",
            prompt_language = self.config.prompt_language(),
            voiceover_language_rule = rules::voiceover_language_rule(voiceover),
            duration = rules::duration_description(&plan),
            parts = rules::parts_instruction(&plan),
            voiceover_content_rule = rules::voiceover_content_rule(voiceover),
        )
    }

    /// User turn embedding the idea verbatim.
    pub fn user_query(&self, idea: &str) -> String {
        format!(
            "Create a short video concept based on the following idea: \"{}\"",
            idea
        )
    }

    /// Builds the complete prompt for `idea`.
    #[instrument(level = "debug", skip(self, idea), fields(model = %self.config.model(), idea_len = idea.len()))]
    pub fn build(&self, idea: &str) -> ScriptPrompt {
        let prompt = ScriptPrompt {
            system_instruction: self.system_instruction(),
            user_query: self.user_query(idea),
            response_schema: response_schema(),
            plan: self.plan(),
        };
        debug!(
            parts = prompt.plan.part_count(),
            total_seconds = prompt.plan.total_seconds(),
            instruction_len = prompt.system_instruction.len(),
            "Built script prompt"
        );
        prompt
    }
}

/// Builds the prompt for `config` and `idea` in one call.
pub fn build_prompt(config: &VideoConfig, idea: &str) -> ScriptPrompt {
    PromptBuilder::new(*config).build(idea)
}
