//! LynQX - LLM-assisted manual QA review
//!
//! LynQX takes user stories, asks a language model for test scenarios and
//! walks a reviewer through approving them before test case creation.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use lynqx::{Action, LynqxConfig, ReviewWorkflow, build_driver};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = LynqxConfig::load()?;
//!     let mut workflow = ReviewWorkflow::new(build_driver(&config)?);
//!
//!     workflow.handle(Action::SubmitStories("As a user I can log in".into())).await;
//!     for notice in workflow.handle(Action::GenerateScenarios).await {
//!         println!("{notice}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Cargo Features
//!
//! - `tui` - Terminal user interface (default)
//!
//! # Architecture
//!
//! - `lynqx_error` - Error types
//! - `lynqx_core` - Core data types (steps, scenarios, requests)
//! - `lynqx_interface` - `LynqxDriver` trait definition
//! - `lynqx_models` - Provider clients and configuration
//! - `lynqx_workflow` - Review workflow controller
//! - `lynqx_tui` - Terminal UI
//!
//! This crate re-exports everything for convenience.

mod observability;
mod stories;

pub use observability::{LogConfig, LogGuard, init_logging};
pub use stories::read_stories;

// Re-export error types
pub use lynqx_error::{
    ConfigError, IoError, JsonError, LynqxError, LynqxErrorKind, LynqxResult, ProviderError,
    ProviderErrorKind, ValidationError, ValidationErrorKind,
};

// Re-export core types
pub use lynqx_core::{
    GenerateRequest, GenerateResponse, Message, NewScenario, Notice, NoticeLevel, Output, Role,
    ScenarioRecord, ScenarioStatus, ScenarioType, Step, Usage,
};

// Re-export the driver trait
pub use lynqx_interface::LynqxDriver;

// Re-export providers and configuration
pub use lynqx_models::{
    AnthropicClient, GenerationMetrics, LynqxConfig, OpenAiClient, ProviderKind,
    ProviderSettings, TuiSettings, build_driver,
};

// Re-export the workflow
pub use lynqx_workflow::{
    Action, ExportFormat, ReviewWorkflow, SessionId, SessionRegistry, WorkflowState,
    build_prompt, generate_text, parse_scenarios, render_scenarios, story_lines,
};

// Re-export the TUI
#[cfg(feature = "tui")]
pub use lynqx_tui::{App, run_tui};
