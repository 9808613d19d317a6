//! CLI command definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use fixora::{
    FixoraResult, MAX_SCENE_COUNT, MIN_SCENE_COUNT, PromptLanguage, VideoConfig, VideoModel,
    VoiceoverLanguage,
};

/// Fixora - turn a one-line idea into a short-video script for AI video models
#[derive(Parser, Debug)]
#[command(name = "fixora")]
#[command(about = "Turn a one-line idea into a short-video script for AI video models", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a script with Gemini
    Generate {
        /// The video idea
        #[arg(value_parser = parse_idea)]
        idea: String,

        #[command(flatten)]
        video: VideoArgs,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,

        /// Also print the per-scene JSON prompts
        #[arg(long)]
        scene_json: bool,
    },

    /// Print the prompt that would be sent, without calling the API
    Prompt {
        /// The video idea
        #[arg(value_parser = parse_idea)]
        idea: String,

        #[command(flatten)]
        video: VideoArgs,

        /// Print the prompt as a single JSON document
        #[arg(long)]
        json: bool,
    },

    /// List the supported video models
    Models,
}

/// Video configuration flags; unset flags fall back to the configured defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct VideoArgs {
    /// Target video model
    #[arg(long, value_enum)]
    pub model: Option<ModelArg>,

    /// Number of 8-second scenes (implies --model veo3)
    #[arg(long, value_parser = clap::value_parser!(u32).range(MIN_SCENE_COUNT as i64..=MAX_SCENE_COUNT as i64))]
    pub scenes: Option<u32>,

    /// Language of the visual fields
    #[arg(long, value_enum)]
    pub prompt_lang: Option<PromptLangArg>,

    /// Voiceover language, or sfx for sound effects only
    #[arg(long, value_enum)]
    pub voiceover: Option<VoiceoverArg>,
}

impl VideoArgs {
    /// Apply the flags on top of `defaults`.
    ///
    /// `--scenes` is applied last and always selects the multiscene model.
    pub fn resolve(&self, defaults: VideoConfig) -> FixoraResult<VideoConfig> {
        let mut config = VideoConfig::builder()
            .model(self.model.map(VideoModel::from).unwrap_or(*defaults.model()))
            .scene_count(*defaults.scene_count())
            .prompt_language(
                self.prompt_lang
                    .map(PromptLanguage::from)
                    .unwrap_or(*defaults.prompt_language()),
            )
            .voiceover_language(
                self.voiceover
                    .map(VoiceoverLanguage::from)
                    .unwrap_or(*defaults.voiceover_language()),
            )
            .build()?;

        if let Some(scenes) = self.scenes {
            config = config.with_scene_count(scenes)?;
        }
        Ok(config)
    }
}

/// Video model choices
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelArg {
    /// 15 seconds, 4 parts
    Sora,
    /// 8 seconds, 3 parts
    Veo,
    /// 8 seconds per scene, 1-10 scenes
    Veo3,
}

impl From<ModelArg> for VideoModel {
    fn from(arg: ModelArg) -> Self {
        match arg {
            ModelArg::Sora => VideoModel::ShortA,
            ModelArg::Veo => VideoModel::ShortB,
            ModelArg::Veo3 => VideoModel::Multiscene,
        }
    }
}

/// Visual field language choices
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptLangArg {
    /// English
    English,
    /// Indonesian
    Indonesian,
}

impl From<PromptLangArg> for PromptLanguage {
    fn from(arg: PromptLangArg) -> Self {
        match arg {
            PromptLangArg::English => PromptLanguage::English,
            PromptLangArg::Indonesian => PromptLanguage::Indonesian,
        }
    }
}

/// Voiceover choices
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoiceoverArg {
    /// Indonesian narration
    Indonesian,
    /// English narration
    English,
    /// Sound effects and ambience only
    Sfx,
}

impl From<VoiceoverArg> for VoiceoverLanguage {
    fn from(arg: VoiceoverArg) -> Self {
        match arg {
            VoiceoverArg::Indonesian => VoiceoverLanguage::Indonesian,
            VoiceoverArg::English => VoiceoverLanguage::English,
            VoiceoverArg::Sfx => VoiceoverLanguage::SoundEffectsOnly,
        }
    }
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// The script as JSON
    Json,
    /// Plain full script (timeline with voiceover), ready to paste
    Script,
}

/// Rejects blank ideas; the text is kept as typed.
fn parse_idea(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        return Err("the idea must not be empty".to_string());
    }
    Ok(value.to_string())
}
