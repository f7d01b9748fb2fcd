//! CLI module for the bookshelf service
//!
//! Provides the `start` command, which loads configuration and serves the
//! bookshelf over HTTP until interrupted.

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{resolve_config, run, run_command, start};
pub use errors::{CliError, CliErrorCode, CliResult};
