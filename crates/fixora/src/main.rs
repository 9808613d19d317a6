//! Fixora CLI binary.
//!
//! This binary provides command-line access to Fixora's functionality:
//! - Generate a short-video script from an idea
//! - Inspect the prompt sent to the model
//! - List the supported video models

use clap::Parser;
use fixora::{FixoraConfig, ObservabilityConfig, init_observability};
use std::process::ExitCode;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    use cli::{Cli, Commands, generate_script, list_models, show_prompt};

    // Load .env before anything reads the environment
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let logging = ObservabilityConfig::new().with_verbose(cli.verbose);
    if let Err(e) = init_observability(&logging) {
        eprintln!("Error: {}", e.message());
        return ExitCode::FAILURE;
    }

    let result = match FixoraConfig::load() {
        Ok(settings) => match cli.command {
            Commands::Generate {
                idea,
                video,
                format,
                scene_json,
            } => generate_script(&idea, &video, format, scene_json, &settings).await,

            Commands::Prompt { idea, video, json } => show_prompt(&idea, &video, json, &settings),

            Commands::Models => {
                list_models();
                Ok(())
            }
        },
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "Command failed");
            eprintln!("Error: {}", e.message());
            ExitCode::FAILURE
        }
    }
}
