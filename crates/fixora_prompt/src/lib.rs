//! Prompt construction for Fixora video scripts.
//!
//! Maps a [`VideoConfig`](fixora_core::VideoConfig) and a free-text idea to a
//! system instruction, a user query and the JSON response schema. Nothing in
//! this crate performs I/O.
//!
//! # Rules encoded in the instruction
//!
//! - **Sora** (15 s): Hook, Context, Climax, Resolution in 4 second steps
//! - **Veo** (8 s): Hook, Climax, Resolution in roughly 3 second steps
//! - **Veo3**: `scene_count` continuous scenes of exactly 8 seconds each
//! - Visual fields follow the prompt language
//! - Voiceover is narration in the voiceover language, or `[SFX]` lines only
//! - SEO fields are always Indonesian
//!
//! # Example
//!
//! ```
//! use fixora_core::VideoConfig;
//! use fixora_prompt::build_prompt;
//!
//! let config = VideoConfig::default().with_scene_count(3).unwrap();
//! let prompt = build_prompt(&config, "a dog learns to surf");
//!
//! assert!(prompt.system_instruction().contains("EXACTLY 3 SCENES"));
//! assert!(prompt.system_instruction().contains("0-8, 8-16, 16-24"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod plan;
mod rules;
mod schema;

pub use builder::{PromptBuilder, ScriptPrompt, build_prompt};
pub use plan::{PlannedPart, TimeRange, TimelinePlan};
pub use rules::SEO_LANGUAGE;
pub use schema::{REQUIRED_SCRIPT_FIELDS, REQUIRED_TIMELINE_FIELDS, response_schema};
