use fixora_core::{PromptLanguage, VideoConfig, VideoModel, VoiceoverLanguage};
use fixora_error::BuilderErrorKind;

#[test]
fn default_config_matches_initial_form() {
    let config = VideoConfig::default();
    assert_eq!(*config.model(), VideoModel::ShortB);
    assert_eq!(*config.scene_count(), 8);
    assert_eq!(*config.prompt_language(), PromptLanguage::English);
    assert_eq!(*config.voiceover_language(), VoiceoverLanguage::Indonesian);
    assert_eq!(config.total_seconds(), 8);
    assert_eq!(config.effective_scene_count(), None);
}

#[test]
fn builder_works() -> anyhow::Result<()> {
    let config = VideoConfig::builder()
        .model(VideoModel::Multiscene)
        .scene_count(3)
        .prompt_language(PromptLanguage::Indonesian)
        .voiceover_language(VoiceoverLanguage::SoundEffectsOnly)
        .build()?;

    assert_eq!(config.total_seconds(), 24);
    assert_eq!(config.part_count(), 3);
    assert_eq!(config.effective_scene_count(), Some(3));
    Ok(())
}

#[test]
fn builder_rejects_out_of_range_scene_count() {
    for scenes in [0, 11, 100] {
        let err = VideoConfig::builder()
            .model(VideoModel::Multiscene)
            .scene_count(scenes)
            .build()
            .unwrap_err();
        assert!(matches!(
            err.kind(),
            BuilderErrorKind::InvalidField { field, .. } if field == "scene_count"
        ));
    }
}

#[test]
fn scene_count_is_ignored_for_fixed_models() -> anyhow::Result<()> {
    let short_a = VideoConfig::builder()
        .model(VideoModel::ShortA)
        .scene_count(10)
        .build()?;
    assert_eq!(short_a.total_seconds(), 15);
    assert_eq!(short_a.part_count(), 4);
    assert_eq!(short_a.effective_scene_count(), None);
    Ok(())
}

#[test]
fn choosing_scene_count_selects_multiscene() -> anyhow::Result<()> {
    let config = VideoConfig::default().with_scene_count(5)?;
    assert_eq!(*config.model(), VideoModel::Multiscene);
    assert_eq!(config.total_seconds(), 40);

    assert!(VideoConfig::default().with_scene_count(0).is_err());

    // Switching away keeps the stored count for later.
    let back = config.with_model(VideoModel::ShortA);
    assert_eq!(*back.scene_count(), 5);
    assert_eq!(back.total_seconds(), 15);
    Ok(())
}

#[test]
fn deserializes_partial_config_with_defaults() -> anyhow::Result<()> {
    let config: VideoConfig = serde_json::from_str(r#"{"model":"veo3","voiceover_language":"sfx"}"#)?;
    assert_eq!(*config.model(), VideoModel::Multiscene);
    assert_eq!(*config.scene_count(), 8);
    assert_eq!(*config.voiceover_language(), VoiceoverLanguage::SoundEffectsOnly);
    config.validate()?;
    Ok(())
}

#[test]
fn deserializing_rejects_out_of_range_scene_count() {
    for scenes in [0u64, 11, 42, u32::MAX as u64] {
        let json = format!(r#"{{"model":"veo3","scene_count":{scenes}}}"#);
        let err = serde_json::from_str::<VideoConfig>(&json).unwrap_err();
        assert!(err.to_string().contains("scene_count"), "{scenes}: {err}");
    }

    // Fixed-length models still carry a stored count, so it is checked too.
    assert!(serde_json::from_str::<VideoConfig>(r#"{"model":"sora","scene_count":0}"#).is_err());
}
