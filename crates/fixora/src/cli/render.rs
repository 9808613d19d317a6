//! Text rendering of generated scripts.

use fixora::{FixoraResult, JsonError, ScriptContent, VideoConfig};
use std::fmt::Write;

use super::commands::OutputFormat;

/// Render `script` in `format`.
pub fn render_script(
    script: &ScriptContent,
    config: &VideoConfig,
    format: OutputFormat,
) -> FixoraResult<String> {
    match format {
        OutputFormat::Human => Ok(human(script, config)),
        OutputFormat::Json => serde_json::to_string_pretty(script)
            .map_err(|e| JsonError::new(e.to_string()).into()),
        OutputFormat::Script => Ok(script.full_script(*config.voiceover_language())),
    }
}

/// Per-scene JSON prompts, one block per timeline item.
pub fn render_scene_json(script: &ScriptContent) -> FixoraResult<String> {
    let mut blocks = Vec::with_capacity(script.script_timeline.len());
    for (index, prompt) in script.scene_prompts().iter().enumerate() {
        blocks.push(format!(
            "# Scene {} {}\n{}",
            index + 1,
            prompt.timestamp,
            prompt.to_json_pretty()?
        ));
    }
    Ok(blocks.join("\n\n"))
}

fn human(script: &ScriptContent, config: &VideoConfig) -> String {
    let voiceover_language = *config.voiceover_language();
    let mut out = String::new();

    let _ = writeln!(out, "{}", script.seo_title);
    let _ = writeln!(out, "{:=<80}", "");
    let _ = writeln!(
        out,
        "Model: {} | Duration: {}s | Parts: {}",
        config.model(),
        config.total_seconds(),
        script.script_timeline.len()
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Style:  {}", script.style);
    let _ = writeln!(out, "Camera: {}", script.camera);
    let _ = writeln!(out, "Scene:  {}", script.scene);
    let _ = writeln!(out);
    let _ = writeln!(out, "Timeline");
    let _ = writeln!(out, "{:-<80}", "");

    for item in &script.script_timeline {
        let _ = writeln!(out, "{} {}", item.timestamp, item.label);
        let _ = writeln!(out, "  {}", item.action);
        if let Some(voiceover) = item.voiceover_text() {
            let tag = if item.is_sfx(voiceover_language) { "SFX" } else { "VO" };
            let _ = writeln!(out, "  {}: {}", tag, voiceover);
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "SEO");
    let _ = writeln!(out, "{:-<80}", "");
    let _ = writeln!(out, "Title:       {}", script.seo_title);
    let _ = writeln!(out, "Description: {}", script.description);
    let _ = writeln!(out, "CTA:         {}", script.cta_seo);
    let _ = write!(out, "Hashtags:    {}", script.hashtags);

    out
}
