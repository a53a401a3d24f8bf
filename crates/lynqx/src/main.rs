//! LynQX CLI binary.
//!
//! This binary provides command-line access to the review workflow:
//! - Launch the TUI to generate, review and approve scenarios
//! - Generate scenarios headlessly from a story file
//! - Preview the generation prompt

use clap::Parser;
use lynqx::{LogConfig, init_logging};
use std::process::ExitCode;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    use cli::{Cli, Commands, launch_tui, load_config, print_prompt, run_generate};

    // Parse command-line arguments
    let cli = Cli::parse();

    // The TUI owns the terminal, so its logs go to a file.
    let mut log_config = LogConfig::new(cli.verbose).with_json_logs(cli.json_logs);
    if cli.command.is_interactive()
        && let Some(dir) = LogConfig::default_log_dir()
    {
        log_config = log_config.with_log_dir(dir);
    }
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Warning: failed to initialize logging: {}", e);
            None
        }
    };

    let result = match cli.command {
        Commands::Prompt { stories } => print_prompt(&stories),
        Commands::Generate { stories, format } => match load_config(cli.config.as_deref()) {
            Ok(config) => run_generate(&config, &stories, format).await,
            Err(e) => Err(e),
        },
        Commands::Tui { stories } => match load_config(cli.config.as_deref()) {
            Ok(config) => launch_tui(&config, stories.as_deref()).await,
            Err(e) => Err(e),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}
