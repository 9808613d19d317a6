//! Tests for system instruction and schema construction.

use fixora_core::{PromptLanguage, VideoConfig, VideoModel, VoiceoverLanguage};
use fixora_prompt::{PromptBuilder, TimeRange, build_prompt};
use strum::IntoEnumIterator;

fn config(model: VideoModel, scenes: u32, voiceover: VoiceoverLanguage) -> VideoConfig {
    VideoConfig::builder()
        .model(model)
        .scene_count(scenes)
        .voiceover_language(voiceover)
        .build()
        .expect("valid test config")
}

#[test]
fn short_a_always_asks_for_four_parts_in_fifteen_seconds() {
    for idea in ["a dog learns to surf", "exactly 3 parts please", ""] {
        for scenes in [1, 5, 10] {
            let prompt = build_prompt(
                &config(VideoModel::ShortA, scenes, VoiceoverLanguage::English),
                idea,
            );
            let text = prompt.system_instruction();
            assert!(text.contains("exactly 4 parts: Hook, Context, Climax, and Resolution"));
            assert!(text.contains("Total length: 15 seconds."));
            assert!(text.contains("Total duration 15 seconds."));
            assert!(text.contains("[00:00-00:04], [00:04-00:08], [00:08-00:12], [00:12-00:15]"));
            assert_eq!(prompt.plan().part_count(), 4);
        }
    }
}

#[test]
fn short_b_always_asks_for_three_parts_in_eight_seconds() {
    let prompt = build_prompt(
        &config(VideoModel::ShortB, 7, VoiceoverLanguage::Indonesian),
        "a dog learns to surf",
    );
    let text = prompt.system_instruction();
    assert!(text.contains("exactly 3 parts: Hook, Climax, and Resolution"));
    assert!(text.contains("Total length: 8 seconds."));
    assert!(text.contains("Keep it very concise."));
    assert!(text.contains("[00:00-00:03], [00:03-00:06], [00:06-00:08]"));
    assert!(!text.contains("SCENES"));
    assert_eq!(prompt.plan().part_count(), 3);
}

#[test]
fn multiscene_asks_for_n_scenes_of_eight_seconds() {
    for n in 1..=10u32 {
        let prompt = build_prompt(
            &config(VideoModel::Multiscene, n, VoiceoverLanguage::English),
            "a lighthouse keeper finds a map",
        );
        let text = prompt.system_instruction();
        assert!(text.contains(&format!("EXACTLY {n} SCENES")));
        assert!(text.contains(&format!(
            "Total length: {} seconds ({n} scenes x 8 seconds)",
            n * 8
        )));
        assert!(text.contains(&format!("from Scene 1 to Scene {n}")));
        assert!(text.contains("Focus on deep narrative storytelling"));

        let expected: Vec<TimeRange> = (0..n).map(|i| TimeRange::new(i * 8, (i + 1) * 8)).collect();
        assert_eq!(prompt.plan().ranges(), expected);

        let spans = expected
            .iter()
            .map(TimeRange::span)
            .collect::<Vec<_>>()
            .join(", ");
        assert!(text.contains(&spans));
    }
}

#[test]
fn fixed_models_have_no_storytelling_addon() {
    for model in [VideoModel::ShortA, VideoModel::ShortB] {
        let text = PromptBuilder::new(config(model, 4, VoiceoverLanguage::English)).system_instruction();
        assert!(!text.contains("storytelling"));
        assert!(text.contains(&format!("AI video model {}.", model)));
    }
}

#[test]
fn sfx_mode_forbids_dialogue_and_requires_marker() {
    for model in VideoModel::iter() {
        let text = PromptBuilder::new(config(model, 2, VoiceoverLanguage::SoundEffectsOnly))
            .system_instruction();
        assert!(text.contains("HUMAN DIALOGUE IS FORBIDDEN"));
        assert!(text.contains("DO NOT WRITE HUMAN NARRATION OR DIALOGUE"));
        assert!(text.contains("start with the prefix '[SFX]'"));
        assert!(!text.contains("voiceover narration in"));
    }
}

#[test]
fn narrated_modes_require_voiceover_language() {
    for voiceover in [VoiceoverLanguage::Indonesian, VoiceoverLanguage::English] {
        let text = PromptBuilder::new(config(VideoModel::Multiscene, 2, voiceover)).system_instruction();
        assert!(text.contains(&format!("'voiceover': MUST be written in {}.", voiceover)));
        assert!(text.contains(&format!("voiceover narration in {}.", voiceover)));
        assert!(!text.contains("[SFX]"));
        assert!(!text.contains("FORBIDDEN"));
    }
}

#[test]
fn visual_fields_follow_prompt_language_and_seo_stays_indonesian() {
    for language in PromptLanguage::iter() {
        let config = VideoConfig::builder()
            .prompt_language(language)
            .voiceover_language(VoiceoverLanguage::English)
            .build()
            .expect("valid test config");
        let text = PromptBuilder::new(config).system_instruction();
        assert!(text.contains(&format!(
            "'action', 'scene', 'style', 'camera': MUST be written in {}.",
            language
        )));
        assert!(text.contains("'seo_title', 'description', 'cta_seo', 'hashtags': write in Indonesian."));
    }
}

#[test]
fn instruction_is_deterministic_and_idea_only_reaches_the_query() {
    let config = config(VideoModel::Multiscene, 4, VoiceoverLanguage::Indonesian);
    let first = build_prompt(&config, "first idea");
    let second = build_prompt(&config, "second idea");

    assert_eq!(first.system_instruction(), second.system_instruction());
    assert_eq!(first.response_schema(), second.response_schema());
    assert_eq!(first, build_prompt(&config, "first idea"));
    assert_eq!(
        first.user_query(),
        "Create a short video concept based on the following idea: \"first idea\""
    );
    assert!(!first.system_instruction().contains("first idea"));
}

#[test]
fn dog_surfing_three_scene_scenario() {
    let config = VideoConfig::builder()
        .model(VideoModel::Multiscene)
        .scene_count(3)
        .prompt_language(PromptLanguage::English)
        .voiceover_language(VoiceoverLanguage::Indonesian)
        .build()
        .expect("valid test config");

    let prompt = build_prompt(&config, "a dog learns to surf");
    let text = prompt.system_instruction();

    assert!(text.contains("EXACTLY 3 SCENES"));
    assert!(text.contains("Every scene lasts exactly 8 seconds"));
    assert!(text.contains("time order in seconds: 0-8, 8-16, 16-24;"));
    assert!(text.contains("[00:00-00:08], [00:08-00:16], [00:16-00:24]"));
    assert!(text.contains("'action', 'scene', 'style', 'camera': MUST be written in English."));
    assert!(text.contains("'voiceover': MUST be written in Indonesian."));
    assert!(text.contains("'hashtags': write in Indonesian."));
    assert!(prompt.user_query().contains("a dog learns to surf"));
    assert_eq!(prompt.plan().labels(), vec!["Scene 1", "Scene 2", "Scene 3"]);
}

#[test]
fn into_request_carries_prompt_and_json_mime_type() {
    let prompt = build_prompt(&VideoConfig::default(), "a robot paints a mural");
    let schema = prompt.response_schema().clone();
    let instruction = prompt.system_instruction().clone();

    let request = prompt.into_request(Some("gemini-2.5-pro".to_string()));
    assert_eq!(request.model().as_deref(), Some("gemini-2.5-pro"));
    assert_eq!(request.system_instruction(), &instruction);
    assert_eq!(request.response_schema(), &schema);
    assert_eq!(request.response_mime_type(), "application/json");
    assert!(request.user_query().contains("a robot paints a mural"));
}
