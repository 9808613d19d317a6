//! Error types for the Fixora video script generator.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! Everything converts into [`FixoraError`] so `?` works across crates.
//!
//! # Examples
//!
//! ```
//! use fixora_error::{FixoraResult, GenerationError, GenerationErrorKind};
//!
//! fn parse_script(text: &str) -> FixoraResult<()> {
//!     if text.is_empty() {
//!         return Err(GenerationError::new(GenerationErrorKind::EmptyResponse).into());
//!     }
//!     Ok(())
//! }
//!
//! let err = parse_script("").unwrap_err();
//! assert_eq!(err.message(), "No text response from the model");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod gemini;
mod generation;
mod json;

pub use builder::{BuilderError, BuilderErrorKind};
pub use config::ConfigError;
pub use error::{FixoraError, FixoraErrorKind, FixoraResult};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use generation::{GenerationError, GenerationErrorKind};
pub use json::JsonError;
