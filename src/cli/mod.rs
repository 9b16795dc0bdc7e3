//! Command-line interface definitions and helpers.
//!
//! This module contains all CLI argument parsing, error types, and subcommand handlers.

mod args;
mod commands;
mod error;

pub use args::{Args, Command, ConfigAction};
pub use commands::{handle_config_action, resolve_settings, run_convert, Settings};
pub use error::CliError;
