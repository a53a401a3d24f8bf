//! Review workflow controller for LynQX.
//!
//! The workflow walks a reviewer through eight steps. Only the first four
//! carry behaviour:
//!
//! 1. **Input**: user stories are submitted as free text.
//! 2. **Generate**: the stories are embedded in a prompt and sent to the
//!    configured [`LynqxDriver`](lynqx_interface::LynqxDriver).
//! 3. **Review**: `TSxxx:` lines are parsed out of the response into
//!    scenario records that the reviewer approves, rejects or extends.
//! 4. **Create Test Cases**: receives the approved scenarios.
//!
//! [`WorkflowState`] owns the data and the transition guards.
//! [`ReviewWorkflow`] maps each user [`Action`] to one guarded mutation and
//! reports the outcome as inline [`Notice`](lynqx_core::Notice)s.
//! [`SessionRegistry`] keeps one independent workflow per session.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod action;
mod controller;
mod export;
mod generation;
mod parser;
mod prompt;
mod session;
mod state;

pub use action::Action;
pub use controller::ReviewWorkflow;
pub use export::{ExportFormat, render_scenarios};
pub use generation::generate_text;
pub use parser::{ScenarioLine, parse_line, parse_scenarios};
pub use prompt::{build_prompt, story_lines};
pub use session::{SessionHandle, SessionId, SessionRegistry};
pub use state::WorkflowState;
