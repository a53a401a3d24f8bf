//! TUI runner - terminal setup and the main loop.

use crate::{App, AppCommand, Event, EventHandler};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use lynqx_error::{TuiError, TuiErrorKind, TuiResult};
use lynqx_workflow::Action;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{info, instrument};

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Run the TUI until the user quits.
///
/// The terminal is restored even when the loop fails.
///
/// # Arguments
///
/// * `app` - Application state wrapping the review workflow
/// * `tick_rate_ms` - Event poll interval
#[instrument(skip(app))]
pub async fn run_tui(mut app: App, tick_rate_ms: u64) -> TuiResult<()> {
    let mut terminal = setup_terminal()?;
    info!(provider = %app.workflow.provider_label(), "TUI started");

    let result = run_loop(&mut terminal, &mut app, &EventHandler::new(tick_rate_ms)).await;
    let restored = restore_terminal(&mut terminal);

    result.and(restored)
}

fn setup_terminal() -> TuiResult<CrosstermTerminal> {
    enable_raw_mode().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to enable raw mode: {}",
            e
        )))
    })?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to setup terminal: {}",
            e
        )))
    })?;

    Terminal::new(CrosstermBackend::new(stdout)).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to create terminal: {}",
            e
        )))
    })
}

fn restore_terminal(terminal: &mut CrosstermTerminal) -> TuiResult<()> {
    disable_raw_mode().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to disable raw mode: {}",
            e
        )))
    })?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to cleanup terminal: {}",
            e
        )))
    })?;
    terminal.show_cursor().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to show cursor: {}",
            e
        )))
    })
}

fn draw(terminal: &mut CrosstermTerminal, app: &App) -> TuiResult<()> {
    terminal
        .draw(|f| crate::ui::draw(f, app))
        .map(|_| ())
        .map_err(|e| TuiError::new(TuiErrorKind::Rendering(format!("Failed to draw: {}", e))))
}

async fn run_loop(
    terminal: &mut CrosstermTerminal,
    app: &mut App,
    events: &EventHandler,
) -> TuiResult<()> {
    while !app.should_quit {
        draw(terminal, app)?;

        let Some(Event::Key(key)) = events.next()? else {
            continue;
        };

        match app.handle_key(key) {
            AppCommand::None => {}
            AppCommand::Quit => app.quit(),
            AppCommand::Dispatch(action) => {
                // Generation blocks for the provider round trip; show it first.
                if action == Action::GenerateScenarios {
                    app.busy = true;
                    draw(terminal, app)?;
                }
                app.apply(action).await;
                app.busy = false;
            }
        }
    }

    info!("TUI closed");
    Ok(())
}
