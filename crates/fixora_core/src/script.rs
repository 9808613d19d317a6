//! Generated script types and their text/JSON exports.

use crate::VoiceoverLanguage;
use fixora_error::JsonError;
use serde::{Deserialize, Serialize};

/// Marker that prefixes sound-effect voiceover lines.
pub const SFX_MARKER: &str = "[SFX]";

/// Prefix used for narrated voiceover lines in the full script export.
const VOICEOVER_PREFIX: &str = "🎙️ VO: ";

/// One labeled, time-bounded segment of a generated script.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimelineItem {
    /// Time range, e.g. `[00:00-00:08]`
    pub timestamp: String,
    /// Part title such as `Hook` or `Scene 2`
    pub label: String,
    /// Visual description and action for this segment
    pub action: String,
    /// Narration or `[SFX]` description, when the model provided one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voiceover: Option<String>,
}

impl TimelineItem {
    /// Voiceover text, treating an empty string the same as no voiceover.
    pub fn voiceover_text(&self) -> Option<&str> {
        self.voiceover.as_deref().filter(|text| !text.is_empty())
    }

    /// Whether this item's audio is sound effects rather than narration.
    ///
    /// True in SFX mode, or when the model marked the line with `[SFX]`
    /// regardless of the requested voiceover language.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixora_core::{TimelineItem, VoiceoverLanguage};
    ///
    /// let item = TimelineItem {
    ///     timestamp: "[00:00-00:08]".to_string(),
    ///     label: "Scene 1".to_string(),
    ///     action: "Waves roll in".to_string(),
    ///     voiceover: Some("  [SFX] surf crashing".to_string()),
    /// };
    /// assert!(item.is_sfx(VoiceoverLanguage::English));
    /// ```
    pub fn is_sfx(&self, voiceover_language: VoiceoverLanguage) -> bool {
        voiceover_language.is_sfx()
            || self
                .voiceover
                .as_deref()
                .is_some_and(|text| text.trim().starts_with(SFX_MARKER))
    }
}

/// A complete generated script.
///
/// Built once from the model response and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScriptContent {
    /// Cinematic style and visual aesthetic
    pub style: String,
    /// Shot and camera movement direction
    pub camera: String,
    /// Location and atmosphere
    pub scene: String,
    /// Ordered timeline segments
    pub script_timeline: Vec<TimelineItem>,
    /// SEO-friendly video title
    pub seo_title: String,
    /// Short selling description
    pub description: String,
    /// Call to action
    pub cta_seo: String,
    /// Comma separated `#hashtags`
    pub hashtags: String,
}

/// Self-contained prompt for a single scene, ready to paste into a video model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenePrompt {
    /// Time range of the scene
    pub timestamp: String,
    /// Style, environment, action and camera merged into one prompt
    pub prompt_context: String,
    /// Voiceover for the scene, `null` when absent
    pub voiceover: Option<String>,
}

impl ScenePrompt {
    /// Pretty-printed JSON form of this scene prompt.
    ///
    /// # Errors
    ///
    /// Returns a [`JsonError`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, JsonError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| JsonError::new(format!("Failed to encode scene prompt: {}", e)))
    }
}

impl ScriptContent {
    /// Renders the whole timeline as plain text, one block per segment.
    ///
    /// Each block is `"{timestamp} - {label}\n{action}"`, followed by the
    /// voiceover on its own line. Narration lines carry a `VO:` prefix; in SFX
    /// mode the line is written as is.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixora_core::{ScriptContent, TimelineItem, VoiceoverLanguage};
    ///
    /// let script = ScriptContent {
    ///     style: String::new(),
    ///     camera: String::new(),
    ///     scene: String::new(),
    ///     script_timeline: vec![
    ///         TimelineItem {
    ///             timestamp: "[00:00-00:03]".into(),
    ///             label: "Hook".into(),
    ///             action: "A dog eyes the waves".into(),
    ///             voiceover: Some("Siapa bilang anjing takut air?".into()),
    ///         },
    ///         TimelineItem {
    ///             timestamp: "[00:03-00:06]".into(),
    ///             label: "Climax".into(),
    ///             action: "The dog stands up on the board".into(),
    ///             voiceover: None,
    ///         },
    ///     ],
    ///     seo_title: String::new(),
    ///     description: String::new(),
    ///     cta_seo: String::new(),
    ///     hashtags: String::new(),
    /// };
    ///
    /// assert_eq!(
    ///     script.full_script(VoiceoverLanguage::Indonesian),
    ///     "[00:00-00:03] - Hook\nA dog eyes the waves\n🎙️ VO: Siapa bilang anjing takut air?\n\n\
    ///      [00:03-00:06] - Climax\nThe dog stands up on the board"
    /// );
    /// ```
    pub fn full_script(&self, voiceover_language: VoiceoverLanguage) -> String {
        let prefix = if voiceover_language.is_sfx() {
            ""
        } else {
            VOICEOVER_PREFIX
        };

        self.script_timeline
            .iter()
            .map(|item| {
                let mut block = format!("{} - {}\n{}", item.timestamp, item.label, item.action);
                if let Some(voiceover) = item.voiceover_text() {
                    block.push('\n');
                    block.push_str(prefix);
                    block.push_str(voiceover);
                }
                block
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Builds the standalone prompt for the timeline item at `index`.
    ///
    /// Returns `None` when `index` is past the end of the timeline.
    pub fn scene_prompt(&self, index: usize) -> Option<ScenePrompt> {
        let item = self.script_timeline.get(index)?;
        Some(ScenePrompt {
            timestamp: item.timestamp.clone(),
            prompt_context: format!(
                "{}. {}. {}. {}",
                self.style, self.scene, item.action, self.camera
            ),
            voiceover: item.voiceover_text().map(str::to_string),
        })
    }

    /// Standalone prompts for every timeline item, in order.
    pub fn scene_prompts(&self) -> Vec<ScenePrompt> {
        (0..self.script_timeline.len())
            .filter_map(|index| self.scene_prompt(index))
            .collect()
    }
}
