//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the slideprompt binary.

mod commands;
mod generate;
mod input;
mod output;
mod parse;

pub use commands::{Cli, Commands};
pub use generate::{assemble_command, generate_command};
pub use parse::parse_command;
