//! Instruction fragments: model structure, voiceover mode and language rules.

use crate::TimelinePlan;
use fixora_core::{SCENE_SECONDS, SFX_MARKER, VideoModel, VoiceoverLanguage};

/// Language the SEO fields are always written in.
pub const SEO_LANGUAGE: &str = "Indonesian";

/// Human description of the clip length.
pub(crate) fn duration_description(plan: &TimelinePlan) -> String {
    match plan.model() {
        VideoModel::ShortA | VideoModel::ShortB => {
            format!("{} seconds", plan.total_seconds())
        }
        VideoModel::Multiscene => format!(
            "{} seconds ({} scenes x {} seconds)",
            plan.total_seconds(),
            plan.part_count(),
            SCENE_SECONDS
        ),
    }
}

/// Structural instruction naming the exact part count and timestamps.
pub(crate) fn parts_instruction(plan: &TimelinePlan) -> String {
    match plan.model() {
        VideoModel::ShortA | VideoModel::ShortB => {
            let labels = plan.labels();
            let conciseness = if *plan.model() == VideoModel::ShortB {
                " Keep it very concise."
            } else {
                ""
            };
            format!(
                "exactly {} parts: {}. Total duration {} seconds.{} Timestamps in order: {}",
                plan.part_count(),
                join_labels(&labels),
                plan.total_seconds(),
                conciseness,
                plan.timestamps()
            )
        }
        VideoModel::Multiscene => {
            let n = plan.part_count();
            format!(
                "EXACTLY {n} SCENES. Every scene lasts exactly {SCENE_SECONDS} seconds \
                 (time order in seconds: {spans}; timestamps: {timestamps}). \
                 The story MUST be continuous (storytelling) and develop chronologically \
                 from Scene 1 to Scene {n}",
                spans = plan.spans(),
                timestamps = plan.timestamps(),
            )
        }
    }
}

/// Extra role sentence appended for multiscene storytelling.
pub(crate) fn role_addon(model: VideoModel) -> &'static str {
    match model {
        VideoModel::Multiscene => {
            "Focus on deep narrative storytelling. Keep visual and story continuity \
             between scenes tight, matching the requested number of scenes."
        }
        VideoModel::ShortA | VideoModel::ShortB => "",
    }
}

/// Language rule for the `voiceover` field (rule 2 of the language block).
pub(crate) fn voiceover_language_rule(voiceover: VoiceoverLanguage) -> String {
    if voiceover.is_sfx() {
        "2. JSON field 'voiceover': MAY ONLY CONTAIN SOUND DESCRIPTIONS (SFX/AMBIENCE). \
         HUMAN DIALOGUE IS FORBIDDEN."
            .to_string()
    } else {
        format!("2. JSON field 'voiceover': MUST be written in {}.", voiceover)
    }
}

/// Content rule for the `voiceover` field (last rule of the structure block).
pub(crate) fn voiceover_content_rule(voiceover: VoiceoverLanguage) -> String {
    if voiceover.is_sfx() {
        format!(
            "JSON field 'voiceover': DO NOT WRITE HUMAN NARRATION OR DIALOGUE. Fill this field \
             with detailed, immersive Sound Effect (SFX) and ambience descriptions that match \
             the scene. Always start with the prefix '{SFX_MARKER}'. Example: '{SFX_MARKER} Heavy \
             rain drumming on a tin roof, with soft rolling thunder'."
        )
    } else {
        format!(
            "JSON field 'voiceover': REQUIRED, filled with flowing voiceover narration in {}.",
            voiceover
        )
    }
}

fn join_labels(labels: &[&str]) -> String {
    match labels {
        [] => String::new(),
        [only] => (*only).to_string(),
        [head @ .., last] => format!("{}, and {}", head.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_read_as_a_list() {
        assert_eq!(join_labels(&["Hook"]), "Hook");
        assert_eq!(
            join_labels(&["Hook", "Climax", "Resolution"]),
            "Hook, Climax, and Resolution"
        );
    }

    #[test]
    fn narration_rules_name_the_language() {
        let rule = voiceover_language_rule(VoiceoverLanguage::English);
        assert!(rule.contains("MUST be written in English"));
        let content = voiceover_content_rule(VoiceoverLanguage::Indonesian);
        assert!(content.contains("narration in Indonesian"));
    }
}
