//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the lynqx binary.

mod commands;
mod generate;
mod prompt;
mod tui_handler;

pub use commands::{Cli, Commands, OutputFormat};
pub use generate::run_generate;
pub use prompt::print_prompt;
pub use tui_handler::launch_tui;

use lynqx::{LynqxConfig, LynqxResult};
use std::path::Path;

/// Load configuration from `--config` or the default search path.
pub fn load_config(path: Option<&Path>) -> LynqxResult<LynqxConfig> {
    match path {
        Some(path) => LynqxConfig::from_file(path),
        None => LynqxConfig::load(),
    }
}
