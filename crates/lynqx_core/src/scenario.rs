//! Scenario records under review.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Kind of behaviour a scenario exercises.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioType {
    /// Expected, happy-path behaviour
    #[default]
    Positive,
    /// Invalid input or forbidden action
    Negative,
    /// Boundary conditions
    #[display("Edge Case")]
    EdgeCase,
}

/// Review decision on a scenario.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioStatus {
    /// Not yet decided
    #[default]
    #[display("Pending Review")]
    PendingReview,
    /// Accepted for test case creation
    Approved,
    /// Discarded
    Rejected,
}

/// A reviewable test scenario.
///
/// Records come either from the scenario parser or from manual insertion.
/// Status only changes through [`approve`](Self::approve) and
/// [`reject`](Self::reject).
///
/// # Examples
///
/// ```
/// use lynqx_core::{ScenarioRecord, ScenarioStatus, ScenarioType};
///
/// let mut record = ScenarioRecord::new("TS001", "Login")
///     .with_description("User signs in with valid credentials")
///     .with_scenario_type(ScenarioType::Positive);
/// assert_eq!(record.status(), &ScenarioStatus::PendingReview);
///
/// record.approve();
/// assert!(record.is_approved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ScenarioRecord {
    /// Identifier token, `TS` followed by at least three digits
    id: String,
    /// Human-readable title, unique case-insensitively within a list
    name: String,
    /// What the scenario does
    #[serde(default)]
    description: String,
    /// What should happen
    #[serde(default)]
    expected_result: String,
    /// Kind of behaviour
    #[serde(default)]
    scenario_type: ScenarioType,
    /// Story the scenario was derived from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    related_story: Option<String>,
    /// Review decision
    #[serde(default)]
    status: ScenarioStatus,
}

impl ScenarioRecord {
    /// Pending, positive record with no description.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            expected_result: String::new(),
            scenario_type: ScenarioType::default(),
            related_story: None,
            status: ScenarioStatus::default(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the expected result.
    pub fn with_expected_result(mut self, expected_result: impl Into<String>) -> Self {
        self.expected_result = expected_result.into();
        self
    }

    /// Set the scenario type.
    pub fn with_scenario_type(mut self, scenario_type: ScenarioType) -> Self {
        self.scenario_type = scenario_type;
        self
    }

    /// Set the related story.
    pub fn with_related_story(mut self, related_story: Option<String>) -> Self {
        self.related_story = related_story;
        self
    }

    /// Mark the scenario approved.
    pub fn approve(&mut self) {
        self.status = ScenarioStatus::Approved;
    }

    /// Mark the scenario rejected.
    pub fn reject(&mut self) {
        self.status = ScenarioStatus::Rejected;
    }

    /// Whether the scenario is approved.
    pub fn is_approved(&self) -> bool {
        self.status == ScenarioStatus::Approved
    }

    /// Key used for case-insensitive name uniqueness.
    pub fn name_key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Fields a reviewer fills in to add a scenario by hand.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewScenario {
    /// Scenario title
    pub name: String,
    /// What the scenario does
    pub description: String,
    /// What should happen
    pub expected_result: String,
    /// Kind of behaviour
    pub scenario_type: ScenarioType,
    /// Story the scenario covers
    pub related_story: Option<String>,
}
