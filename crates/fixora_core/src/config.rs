//! Video configuration selected by the user.

use crate::{PromptLanguage, VideoModel, VoiceoverLanguage};
use fixora_error::{BuilderError, BuilderErrorKind};
use serde::{Deserialize, Serialize};

/// Smallest accepted multiscene scene count.
pub const MIN_SCENE_COUNT: u32 = 1;
/// Largest accepted multiscene scene count.
pub const MAX_SCENE_COUNT: u32 = 10;
/// Scene count preselected when the user has not chosen one.
pub const DEFAULT_SCENE_COUNT: u32 = 8;

/// Model, duration and language selections that parameterize a script.
///
/// `scene_count` is kept even for the fixed-length models so switching back
/// to [`VideoModel::Multiscene`] restores the previous choice, but it is only
/// consulted when the model is multiscene.
///
/// # Examples
///
/// ```
/// use fixora_core::{VideoConfig, VideoModel, PromptLanguage, VoiceoverLanguage};
///
/// let config = VideoConfig::builder()
///     .model(VideoModel::Multiscene)
///     .scene_count(3)
///     .voiceover_language(VoiceoverLanguage::English)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.total_seconds(), 24);
/// assert_eq!(*config.prompt_language(), PromptLanguage::English);
///
/// // Defaults mirror the initial form state.
/// let default = VideoConfig::default();
/// assert_eq!(*default.model(), VideoModel::ShortB);
/// assert_eq!(*default.scene_count(), 8);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters,
)]
#[serde(try_from = "VideoConfigFields")]
pub struct VideoConfig {
    /// Target video model.
    model: VideoModel,

    /// Number of 8 second scenes, multiscene only (1-10).
    scene_count: u32,

    /// Language of the visual fields.
    prompt_language: PromptLanguage,

    /// Language of the voiceover field, or SFX only.
    voiceover_language: VoiceoverLanguage,
}

/// Unvalidated wire form of [`VideoConfig`].
#[derive(Deserialize)]
struct VideoConfigFields {
    #[serde(default)]
    model: VideoModel,
    #[serde(default = "default_scene_count")]
    scene_count: u32,
    #[serde(default)]
    prompt_language: PromptLanguage,
    #[serde(default)]
    voiceover_language: VoiceoverLanguage,
}

fn default_scene_count() -> u32 {
    DEFAULT_SCENE_COUNT
}

impl TryFrom<VideoConfigFields> for VideoConfig {
    type Error = BuilderError;

    fn try_from(fields: VideoConfigFields) -> Result<Self, Self::Error> {
        let config = Self {
            model: fields.model,
            scene_count: fields.scene_count,
            prompt_language: fields.prompt_language,
            voiceover_language: fields.voiceover_language,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            model: VideoModel::default(),
            scene_count: DEFAULT_SCENE_COUNT,
            prompt_language: PromptLanguage::default(),
            voiceover_language: VoiceoverLanguage::default(),
        }
    }
}

impl VideoConfig {
    /// Creates a new video config builder.
    pub fn builder() -> VideoConfigBuilder {
        VideoConfigBuilder::default()
    }

    /// Validates that the scene count is within 1-10.
    ///
    /// The range is checked for every model so a stored configuration stays
    /// valid when the model is later switched to multiscene.
    ///
    /// # Errors
    ///
    /// Returns a [`BuilderError`] naming `scene_count` when out of range.
    pub fn validate(&self) -> Result<(), BuilderError> {
        if !(MIN_SCENE_COUNT..=MAX_SCENE_COUNT).contains(&self.scene_count) {
            return Err(BuilderError::new(BuilderErrorKind::InvalidField {
                field: "scene_count".to_string(),
                reason: format!(
                    "must be between {} and {}, got {}",
                    MIN_SCENE_COUNT, MAX_SCENE_COUNT, self.scene_count
                ),
            }));
        }
        Ok(())
    }

    /// Scene count that actually shapes the script: the configured value for
    /// multiscene, otherwise `None`.
    pub fn effective_scene_count(&self) -> Option<u32> {
        self.model
            .uses_scene_count()
            .then_some(self.scene_count)
    }

    /// Total clip duration in seconds.
    pub fn total_seconds(&self) -> u32 {
        self.model.total_seconds(self.scene_count)
    }

    /// Number of timeline parts the script must contain.
    pub fn part_count(&self) -> u32 {
        self.model.part_count(self.scene_count)
    }

    /// Returns a copy with a different model, keeping the other selections.
    pub fn with_model(mut self, model: VideoModel) -> Self {
        self.model = model;
        self
    }

    /// Returns a copy with a different scene count.
    ///
    /// Choosing a scene count selects the multiscene model, matching how the
    /// scene picker behaves in the form.
    pub fn with_scene_count(mut self, scene_count: u32) -> Result<Self, BuilderError> {
        self.model = VideoModel::Multiscene;
        self.scene_count = scene_count;
        self.validate()?;
        Ok(self)
    }
}

/// Builder for `VideoConfig`.
#[derive(Debug, Default)]
pub struct VideoConfigBuilder {
    model: Option<VideoModel>,
    scene_count: Option<u32>,
    prompt_language: Option<PromptLanguage>,
    voiceover_language: Option<VoiceoverLanguage>,
}

impl VideoConfigBuilder {
    /// Sets the video model.
    pub fn model(mut self, value: VideoModel) -> Self {
        self.model = Some(value);
        self
    }

    /// Sets the scene count.
    pub fn scene_count(mut self, value: u32) -> Self {
        self.scene_count = Some(value);
        self
    }

    /// Sets the prompt language.
    pub fn prompt_language(mut self, value: PromptLanguage) -> Self {
        self.prompt_language = Some(value);
        self
    }

    /// Sets the voiceover language.
    pub fn voiceover_language(mut self, value: VoiceoverLanguage) -> Self {
        self.voiceover_language = Some(value);
        self
    }

    /// Builds and validates the `VideoConfig`.
    ///
    /// # Errors
    ///
    /// Returns an error if the scene count is outside 1-10.
    pub fn build(self) -> Result<VideoConfig, BuilderError> {
        let config = VideoConfig {
            model: self.model.unwrap_or_default(),
            scene_count: self.scene_count.unwrap_or(DEFAULT_SCENE_COUNT),
            prompt_language: self.prompt_language.unwrap_or_default(),
            voiceover_language: self.voiceover_language.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }
}
