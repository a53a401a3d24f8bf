//! TUI launch command handler.

use lynqx::{LynqxConfig, LynqxResult};
use std::path::Path;

/// Launch the interactive review workflow.
#[cfg(feature = "tui")]
pub async fn launch_tui(config: &LynqxConfig, stories: Option<&Path>) -> LynqxResult<()> {
    use lynqx::{App, ReviewWorkflow, build_driver, read_stories, run_tui};

    // Credentials are checked before the terminal is taken over.
    let driver = build_driver(config)?;

    let mut app = App::new(ReviewWorkflow::new(driver));
    if let Some(path) = stories {
        app = app.with_stories(read_stories(path)?);
    }

    tracing::info!(stories = ?stories, "Launching TUI");
    run_tui(app, config.tui.tick_rate_ms).await?;

    Ok(())
}

#[cfg(not(feature = "tui"))]
pub async fn launch_tui(_config: &LynqxConfig, _stories: Option<&Path>) -> LynqxResult<()> {
    eprintln!("Error: TUI feature not enabled. Rebuild with --features tui");
    std::process::exit(1);
}
