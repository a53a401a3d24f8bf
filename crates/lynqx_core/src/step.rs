//! The eight steps of the review workflow.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A step of the review workflow, numbered 1 through 8.
///
/// Only steps 1 to 4 carry behaviour today; steps 5 to 8 are placeholders
/// that can be navigated to but have no content of their own.
///
/// # Examples
///
/// ```
/// use lynqx_core::Step;
///
/// assert_eq!(Step::Input.number(), 1);
/// assert_eq!(Step::from_number(3), Some(Step::Review));
/// assert_eq!(Step::Review.next(), Some(Step::CreateTestCases));
/// assert_eq!(Step::Input.previous(), None);
/// assert_eq!(Step::all().count(), 8);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Step {
    /// Paste or load user stories
    #[default]
    #[display("Input User Story")]
    Input,
    /// Ask the provider for scenarios
    #[display("Generate Test Scenarios")]
    Generate,
    /// Approve, reject or add scenarios
    #[display("Review Scenarios")]
    Review,
    /// Turn approved scenarios into test cases
    #[display("Create Test Cases")]
    CreateTestCases,
    /// Check coverage of the stories
    #[display("Verify Coverage")]
    VerifyCoverage,
    /// Prepare the execution run
    #[display("Prepare for Execution")]
    PrepareExecution,
    /// Upload execution results
    #[display("Upload Test Results")]
    UploadResults,
    /// Produce the final report
    #[display("Generate Report")]
    GenerateReport,
}

impl Step {
    /// One-based position of the step.
    pub fn number(self) -> u8 {
        match self {
            Step::Input => 1,
            Step::Generate => 2,
            Step::Review => 3,
            Step::CreateTestCases => 4,
            Step::VerifyCoverage => 5,
            Step::PrepareExecution => 6,
            Step::UploadResults => 7,
            Step::GenerateReport => 8,
        }
    }

    /// Look a step up by its one-based position.
    pub fn from_number(number: u8) -> Option<Self> {
        Self::iter().find(|step| step.number() == number)
    }

    /// Human-readable title, as shown in the sidebar.
    pub fn title(self) -> String {
        self.to_string()
    }

    /// The following step, or `None` on the last one.
    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    /// The preceding step, or `None` on the first one.
    pub fn previous(self) -> Option<Self> {
        self.number().checked_sub(1).and_then(Self::from_number)
    }

    /// Whether the step has behaviour beyond a placeholder page.
    pub fn is_implemented(self) -> bool {
        self.number() <= Step::CreateTestCases.number()
    }

    /// All steps in order.
    pub fn all() -> impl Iterator<Item = Step> {
        Self::iter()
    }
}
