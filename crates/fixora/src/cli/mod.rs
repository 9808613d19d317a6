//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the fixora binary.

mod commands;
mod generate;
mod prompt;
mod render;
mod status;

pub use commands::{Cli, Commands};
pub use generate::generate_script;
pub use prompt::{list_models, show_prompt};
