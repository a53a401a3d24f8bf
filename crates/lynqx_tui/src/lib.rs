//! Terminal User Interface for the scenario review workflow.
//!
//! Renders the eight workflow steps in a sidebar, shows the current step's
//! page, and maps key presses to workflow actions. Built with ratatui for
//! terminal rendering.

mod app;
mod events;
mod runner;
mod ui;

pub use app::{App, AppCommand, AppMode, FormField, ScenarioForm};
pub use events::{Event, EventHandler};
pub use lynqx_error::{TuiError, TuiErrorKind, TuiResult};
pub use runner::run_tui;
pub use ui::draw;
