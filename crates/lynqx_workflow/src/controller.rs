//! Action dispatch for one review session.

use crate::{Action, ExportFormat, WorkflowState, build_prompt, generate_text, render_scenarios};
use lynqx_core::{Notice, Step};
use lynqx_error::{LynqxErrorKind, LynqxResult, ValidationError, ValidationErrorKind};
use lynqx_interface::LynqxDriver;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Review Workflow Controller.
///
/// Owns one [`WorkflowState`] and the generation driver. Every call to
/// [`handle`](Self::handle) is one request cycle: at most one mutation,
/// with failures reported as notices instead of errors.
pub struct ReviewWorkflow {
    state: WorkflowState,
    driver: Arc<dyn LynqxDriver>,
    notices: Vec<Notice>,
}

impl std::fmt::Debug for ReviewWorkflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReviewWorkflow")
            .field("state", &self.state)
            .field("provider", &self.driver.provider_name())
            .field("notices", &self.notices)
            .finish()
    }
}

impl ReviewWorkflow {
    /// Start a fresh workflow on step 1.
    pub fn new(driver: Arc<dyn LynqxDriver>) -> Self {
        Self::with_state(driver, WorkflowState::new())
    }

    /// Resume a workflow from existing state.
    pub fn with_state(driver: Arc<dyn LynqxDriver>, state: WorkflowState) -> Self {
        Self {
            state,
            driver,
            notices: Vec::new(),
        }
    }

    /// Current state, read-only.
    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    /// Notices produced by the most recent action.
    pub fn last_notices(&self) -> &[Notice] {
        &self.notices
    }

    /// `provider/model` of the configured driver.
    pub fn provider_label(&self) -> String {
        format!("{}/{}", self.driver.provider_name(), self.driver.model_name())
    }

    /// The prompt that generation would send for the current stories.
    pub fn prompt(&self) -> String {
        build_prompt(&self.state.story_lines())
    }

    /// Approved scenarios rendered for the steps after review.
    pub fn export_approved(&self, format: ExportFormat) -> LynqxResult<String> {
        render_scenarios(&self.state.approved_scenarios(), format)
    }

    /// Handle one user action and return the resulting notices.
    ///
    /// Never fails: refused actions produce warnings, provider failures
    /// produce errors, and the state is left untouched in both cases.
    #[instrument(skip(self, action), fields(action = action.label(), step = %self.state.current_step()))]
    pub async fn handle(&mut self, action: Action) -> Vec<Notice> {
        let notices = match self.check_step(&action) {
            Err(e) => vec![Notice::warning(e.kind().to_string())],
            Ok(()) => self.dispatch(action).await,
        };

        for notice in notices.iter().filter(|n| n.is_problem()) {
            warn!(notice = %notice, "Action refused");
        }
        self.notices = notices.clone();
        notices
    }

    fn check_step(&self, action: &Action) -> Result<(), ValidationError> {
        match action.required_step() {
            Some(step) if step != self.state.current_step() => {
                Err(ValidationError::new(ValidationErrorKind::WrongStep {
                    action: action.label().to_string(),
                    step: self.state.current_step().title().to_string(),
                }))
            }
            _ => Ok(()),
        }
    }

    async fn dispatch(&mut self, action: Action) -> Vec<Notice> {
        match action {
            Action::SubmitStories(text) => self.submit_stories(text),
            Action::GenerateScenarios => self.generate().await,
            Action::AddCustomScenario(scenario) => match self.state.add_scenario(scenario) {
                Ok(record) => vec![Notice::success(format!(
                    "Added {}: {}",
                    record.id(),
                    record.name()
                ))],
                Err(e) => vec![Notice::warning(e.kind().to_string())],
            },
            Action::Approve(index) => match self.state.approve(index) {
                Ok(record) => vec![Notice::success(format!("Approved {}", record.id()))],
                Err(e) => vec![Notice::warning(e.kind().to_string())],
            },
            Action::Reject(index) => match self.state.reject(index) {
                Ok(record) => vec![Notice::info(format!("Rejected {}", record.id()))],
                Err(e) => vec![Notice::warning(e.kind().to_string())],
            },
            Action::Back => match self.state.retreat() {
                Ok(step) => vec![Notice::info(format!("Step {}: {}", step.number(), step))],
                Err(e) => vec![Notice::warning(e.kind().to_string())],
            },
            Action::Next => self.advance(),
        }
    }

    fn submit_stories(&mut self, text: String) -> Vec<Notice> {
        if let Err(e) = self.state.submit_stories(text) {
            return vec![Notice::warning(e.kind().to_string())];
        }
        let count = self.state.story_lines().len();
        let mut notices = vec![Notice::success(format!(
            "{} user {} saved",
            count,
            if count == 1 { "story" } else { "stories" }
        ))];
        notices.extend(self.advance());
        notices
    }

    fn advance(&mut self) -> Vec<Notice> {
        match self.state.advance() {
            Ok(step) => {
                let mut notices = vec![Notice::info(format!("Step {}: {}", step.number(), step))];
                if step == Step::Review {
                    let count = self.state.scenarios().len();
                    if count == 0 {
                        notices.push(Notice::warning(
                            "No scenarios could be parsed; add them manually or regenerate",
                        ));
                    } else {
                        notices.push(Notice::info(format!("{} scenarios ready for review", count)));
                    }
                }
                if !step.is_implemented() {
                    notices.push(Notice::info(format!("{} is not implemented yet", step)));
                }
                notices
            }
            Err(e) => vec![Notice::warning(e.kind().to_string())],
        }
    }

    async fn generate(&mut self) -> Vec<Notice> {
        let prompt = self.prompt();
        match generate_text(self.driver.as_ref(), &prompt).await {
            Ok(text) => {
                self.state.set_generated_text(text);
                info!(provider = %self.provider_label(), "Scenarios generated");
                vec![Notice::success("Test scenarios generated")]
            }
            Err(e) => {
                error!(error = %e, "Scenario generation failed");
                let transient = matches!(
                    e.kind(),
                    LynqxErrorKind::Provider(p) if p.kind.is_transient()
                );
                let mut message = format!("Error generating test scenarios: {}", e.user_message());
                if transient {
                    message.push_str(". Please try again.");
                }
                vec![Notice::error(message)]
            }
        }
    }
}
