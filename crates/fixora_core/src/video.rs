//! Target video models and output languages.

use serde::{Deserialize, Serialize};

/// Length of one scene for the multiscene model, in seconds.
pub const SCENE_SECONDS: u32 = 8;

/// AI video model the script is written for.
///
/// Each model fixes the total duration and how the timeline is split.
///
/// # Examples
///
/// ```
/// use fixora_core::VideoModel;
///
/// assert_eq!(VideoModel::ShortA.to_string(), "Sora");
/// assert_eq!(VideoModel::ShortA.total_seconds(5), 15);
/// assert_eq!(VideoModel::Multiscene.total_seconds(5), 40);
/// assert_eq!("veo3".parse::<VideoModel>().unwrap(), VideoModel::Multiscene);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
pub enum VideoModel {
    /// 15 second clip in four parts
    #[display("Sora")]
    #[serde(rename = "sora")]
    #[strum(serialize = "sora", ascii_case_insensitive)]
    ShortA,
    /// 8 second clip in three parts
    #[default]
    #[display("Veo")]
    #[serde(rename = "veo")]
    #[strum(serialize = "veo", ascii_case_insensitive)]
    ShortB,
    /// Chained 8 second scenes with a continuous story
    #[display("Veo3")]
    #[serde(rename = "veo3")]
    #[strum(serialize = "veo3", ascii_case_insensitive)]
    Multiscene,
}

impl VideoModel {
    /// Total clip duration in seconds.
    ///
    /// `scene_count` only matters for [`VideoModel::Multiscene`]. Saturates
    /// at `u32::MAX`.
    pub fn total_seconds(&self, scene_count: u32) -> u32 {
        match self {
            VideoModel::ShortA => 15,
            VideoModel::ShortB => 8,
            VideoModel::Multiscene => scene_count.saturating_mul(SCENE_SECONDS),
        }
    }

    /// Number of timeline parts the script must contain.
    pub fn part_count(&self, scene_count: u32) -> u32 {
        match self {
            VideoModel::ShortA => 4,
            VideoModel::ShortB => 3,
            VideoModel::Multiscene => scene_count,
        }
    }

    /// Whether the scene count setting affects this model.
    pub fn uses_scene_count(&self) -> bool {
        matches!(self, VideoModel::Multiscene)
    }
}

/// Language for the visual fields (style, scene, action, camera).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PromptLanguage {
    /// English
    #[default]
    English,
    /// Bahasa Indonesia
    Indonesian,
}

/// Language for the voiceover field, or sound effects only.
///
/// # Examples
///
/// ```
/// use fixora_core::VoiceoverLanguage;
///
/// assert_eq!(VoiceoverLanguage::SoundEffectsOnly.to_string(), "SFX");
/// assert!(VoiceoverLanguage::SoundEffectsOnly.is_sfx());
/// assert!(!VoiceoverLanguage::English.is_sfx());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
pub enum VoiceoverLanguage {
    /// Narration in Bahasa Indonesia
    #[default]
    #[strum(serialize = "indonesian", ascii_case_insensitive)]
    Indonesian,
    /// Narration in English
    #[strum(serialize = "english", ascii_case_insensitive)]
    English,
    /// Sound effect and ambience descriptions, no dialogue
    #[display("SFX")]
    #[serde(rename = "sfx")]
    #[strum(serialize = "sfx", ascii_case_insensitive)]
    SoundEffectsOnly,
}

impl VoiceoverLanguage {
    /// True when no human narration may be produced.
    pub fn is_sfx(&self) -> bool {
        matches!(self, VoiceoverLanguage::SoundEffectsOnly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn fixed_models_ignore_scene_count() {
        for scenes in 1..=10 {
            assert_eq!(VideoModel::ShortA.total_seconds(scenes), 15);
            assert_eq!(VideoModel::ShortA.part_count(scenes), 4);
            assert_eq!(VideoModel::ShortB.total_seconds(scenes), 8);
            assert_eq!(VideoModel::ShortB.part_count(scenes), 3);
        }
    }

    #[test]
    fn multiscene_scales_with_scene_count() {
        for scenes in 1..=10 {
            assert_eq!(VideoModel::Multiscene.total_seconds(scenes), scenes * 8);
            assert_eq!(VideoModel::Multiscene.part_count(scenes), scenes);
        }
    }

    #[test]
    fn huge_scene_count_saturates() {
        assert_eq!(VideoModel::Multiscene.total_seconds(u32::MAX), u32::MAX);
    }

    #[test]
    fn parse_round_trips_through_serde_names() {
        for model in VideoModel::iter() {
            let wire = serde_json::to_string(&model).unwrap();
            let name = wire.trim_matches('"');
            assert_eq!(name.parse::<VideoModel>().unwrap(), model);
        }
        for lang in VoiceoverLanguage::iter() {
            let wire = serde_json::to_string(&lang).unwrap();
            let name = wire.trim_matches('"');
            assert_eq!(name.parse::<VoiceoverLanguage>().unwrap(), lang);
        }
        assert_eq!(
            "Indonesian".parse::<PromptLanguage>().unwrap(),
            PromptLanguage::Indonesian
        );
    }
}
