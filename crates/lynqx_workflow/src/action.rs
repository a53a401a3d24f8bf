//! User-facing workflow actions.

use lynqx_core::{NewScenario, Step};

/// One user request to the workflow.
///
/// Each action is handled as a single request cycle by
/// [`ReviewWorkflow::handle`](crate::ReviewWorkflow::handle).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Store the story text and move to step 2
    SubmitStories(String),
    /// Ask the provider for scenarios
    GenerateScenarios,
    /// Insert a hand-written scenario
    AddCustomScenario(NewScenario),
    /// Approve the scenario at this index
    Approve(usize),
    /// Reject the scenario at this index
    Reject(usize),
    /// Go back one step
    Back,
    /// Go forward one step
    Next,
}

impl Action {
    /// Short name used in notices and logs.
    pub fn label(&self) -> &'static str {
        match self {
            Action::SubmitStories(_) => "Submit stories",
            Action::GenerateScenarios => "Generate scenarios",
            Action::AddCustomScenario(_) => "Add scenario",
            Action::Approve(_) => "Approve",
            Action::Reject(_) => "Reject",
            Action::Back => "Back",
            Action::Next => "Next",
        }
    }

    /// The only step this action is accepted on, if it is step-scoped.
    pub fn required_step(&self) -> Option<Step> {
        match self {
            Action::SubmitStories(_) => Some(Step::Input),
            Action::GenerateScenarios => Some(Step::Generate),
            Action::AddCustomScenario(_) | Action::Approve(_) | Action::Reject(_) => {
                Some(Step::Review)
            }
            Action::Back | Action::Next => None,
        }
    }
}
