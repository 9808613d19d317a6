//! `fixora prompt` and `fixora models` handlers.

use fixora::{
    FixoraConfig, FixoraResult, JsonError, MAX_SCENE_COUNT, MIN_SCENE_COUNT, PromptBuilder,
    SCENE_SECONDS, ScriptPrompt, VideoModel,
};
use std::fmt::Write;
use strum::IntoEnumIterator;

use super::commands::VideoArgs;

/// Print the prompt for `idea` without calling the API.
pub fn show_prompt(
    idea: &str,
    video: &VideoArgs,
    json: bool,
    settings: &FixoraConfig,
) -> FixoraResult<()> {
    let config = video.resolve(settings.defaults)?;
    let prompt = PromptBuilder::new(config).build(idea);

    if json {
        let text = serde_json::to_string_pretty(&prompt)
            .map_err(|e| JsonError::new(format!("Failed to encode prompt: {}", e)))?;
        println!("{}", text);
    } else {
        println!("{}", render_prompt(&prompt)?);
    }
    Ok(())
}

fn render_prompt(prompt: &ScriptPrompt) -> FixoraResult<String> {
    let schema = serde_json::to_string_pretty(prompt.response_schema())
        .map_err(|e| JsonError::new(format!("Failed to encode schema: {}", e)))?;

    let mut out = String::new();
    let _ = writeln!(out, "## System instruction\n\n{}\n", prompt.system_instruction());
    let _ = writeln!(out, "## User query\n\n{}\n", prompt.user_query());
    let _ = write!(out, "## Response schema\n\n{}", schema);
    Ok(out)
}

/// Print the supported video models.
pub fn list_models() {
    println!("{}", models_table());
}

fn models_table() -> String {
    VideoModel::iter()
        .map(|model| {
            let (flag, duration) = match model {
                VideoModel::ShortA => ("sora", format!("{}s, 4 parts", model.total_seconds(0))),
                VideoModel::ShortB => ("veo", format!("{}s, 3 parts", model.total_seconds(0))),
                VideoModel::Multiscene => (
                    "veo3",
                    format!(
                        "{}s per scene, {}-{} scenes ({}-{}s)",
                        SCENE_SECONDS,
                        MIN_SCENE_COUNT,
                        MAX_SCENE_COUNT,
                        model.total_seconds(MIN_SCENE_COUNT),
                        model.total_seconds(MAX_SCENE_COUNT)
                    ),
                ),
            };
            format!("{:<6} {:<6} {}", flag, model.to_string(), duration)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
