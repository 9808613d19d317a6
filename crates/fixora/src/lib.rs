//! Fixora - short-video script generator.
//!
//! Fixora turns a one-line idea into a production-ready script for an AI video
//! model: visual style, camera direction, a timed scene timeline with
//! voiceover or sound-effect cues, and SEO metadata. The script comes from a
//! single schema-constrained call to Google Gemini.
//!
//! # Quick Start
//!
//! ```no_run
//! use fixora::{GeminiClient, ScriptGenerator, VideoConfig, VideoModel, VoiceoverLanguage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = VideoConfig::builder()
//!         .model(VideoModel::Multiscene)
//!         .scene_count(3)
//!         .voiceover_language(VoiceoverLanguage::English)
//!         .build()?;
//!
//!     let generator = ScriptGenerator::new(GeminiClient::new()?);
//!     let script = generator.generate("a dog learns to surf", &config).await?;
//!
//!     println!("{}", script.full_script(*config.voiceover_language()));
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `fixora_core` - configuration and script data types
//! - `fixora_error` - error types
//! - `fixora_interface` - `FixoraDriver` trait
//! - `fixora_prompt` - system instruction and response schema construction
//! - `fixora_models` - Gemini driver
//!
//! This crate re-exports all of them and adds [`ScriptGenerator`],
//! [`FixoraConfig`] and logging setup.

mod config;
mod generator;
mod observability;

pub use crate::config::{FixoraConfig, GeminiSettings};
pub use generator::{GenerationOutcome, ScriptGenerator, parse_script};
pub use observability::{JSON_LOGS_VAR, ObservabilityConfig, init_observability};

pub use fixora_core::*;
pub use fixora_error::*;
pub use fixora_interface::*;
pub use fixora_models::*;
pub use fixora_prompt::*;
