//! Core data types for the Fixora video script generator.
//!
//! This crate provides the configuration model, the generated script types and
//! the provider-neutral request/response pair shared by every Fixora crate.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod request;
mod script;
mod video;

pub use config::{
    DEFAULT_SCENE_COUNT, MAX_SCENE_COUNT, MIN_SCENE_COUNT, VideoConfig, VideoConfigBuilder,
};
pub use request::{
    GenerateRequest, GenerateRequestBuilder, GenerateRequestBuilderError, GenerateResponse,
    JSON_MIME_TYPE,
};
pub use script::{SFX_MARKER, ScenePrompt, ScriptContent, TimelineItem};
pub use video::{PromptLanguage, SCENE_SECONDS, VideoModel, VoiceoverLanguage};
