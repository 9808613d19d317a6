//! `fixora generate` handler.

use fixora::{FixoraConfig, FixoraDriver, FixoraResult, ScriptGenerator};
use tracing::{info, instrument};

use super::commands::{OutputFormat, VideoArgs};
use super::render::{render_scene_json, render_script};
use super::status::StatusTicker;

/// Generate a script for `idea` and print it to stdout.
#[instrument(skip_all)]
pub async fn generate_script(
    idea: &str,
    video: &VideoArgs,
    format: OutputFormat,
    scene_json: bool,
    settings: &FixoraConfig,
) -> FixoraResult<()> {
    let config = video.resolve(settings.defaults)?;
    let client = settings.gemini_client()?;
    info!(
        provider = client.provider_name(),
        model = client.model_name(),
        video_model = %config.model(),
        "Generating script"
    );

    let generator = ScriptGenerator::new(client);

    let ticker = StatusTicker::start();
    let outcome = generator.run(idea, config).await;
    ticker.stop().await;

    let script = outcome.into_result()?;

    println!("{}", render_script(&script, &config, format)?);
    if scene_json {
        println!();
        println!("{}", render_scene_json(&script)?);
    }

    Ok(())
}
