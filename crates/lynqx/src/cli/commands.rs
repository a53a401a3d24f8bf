//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// LynQX - Generate and review test scenarios from user stories
#[derive(Parser, Debug)]
#[command(name = "lynqx")]
#[command(about = "Generate and review test scenarios from user stories", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Configuration file (defaults to ./lynqx.toml and ~/.config/lynqx/lynqx.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the interactive review workflow
    Tui {
        /// Prefill the story editor from a file (one story per line)
        #[arg(long)]
        stories: Option<PathBuf>,
    },

    /// Generate scenarios for a story file without the TUI
    Generate {
        /// Path to the user story file
        #[arg(long)]
        stories: PathBuf,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Print the prompt that would be sent for a story file
    Prompt {
        /// Path to the user story file
        #[arg(long)]
        stories: PathBuf,
    },
}

impl Commands {
    /// Whether the command takes over the terminal.
    pub fn is_interactive(&self) -> bool {
        matches!(self, Commands::Tui { .. })
    }
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
