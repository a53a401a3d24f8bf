//! Workflow state container and transition guards.

use crate::{parse_scenarios, story_lines};
use lynqx_core::{NewScenario, ScenarioRecord, Step};
use lynqx_error::{ValidationError, ValidationErrorKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The state of one review session.
///
/// `current_step` only moves through [`advance`](Self::advance) and
/// [`retreat`](Self::retreat). Every mutating method either succeeds
/// completely or returns a [`ValidationError`] and leaves the state as it
/// was.
///
/// # Examples
///
/// ```
/// use lynqx_core::Step;
/// use lynqx_workflow::WorkflowState;
///
/// let mut state = WorkflowState::new();
/// assert!(state.advance().is_err());
/// assert_eq!(state.current_step(), Step::Input);
///
/// state.submit_stories("As a user I can log in").unwrap();
/// assert_eq!(state.advance().unwrap(), Step::Generate);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowState {
    current_step: Step,
    story_text: String,
    raw_generated_text: String,
    scenarios: Vec<ScenarioRecord>,
}

impl WorkflowState {
    /// Fresh state on step 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// The step the reviewer is on.
    pub fn current_step(&self) -> Step {
        self.current_step
    }

    /// Story text as submitted.
    pub fn story_text(&self) -> &str {
        &self.story_text
    }

    /// Non-blank story lines, in order.
    pub fn story_lines(&self) -> Vec<&str> {
        story_lines(&self.story_text)
    }

    /// Unparsed provider output of the latest successful generation.
    pub fn raw_generated_text(&self) -> &str {
        &self.raw_generated_text
    }

    /// Scenarios under review, in order.
    pub fn scenarios(&self) -> &[ScenarioRecord] {
        &self.scenarios
    }

    /// Store submitted story text.
    ///
    /// Submitting different text discards the previous generation and its
    /// scenarios, since they no longer describe the stories.
    ///
    /// # Errors
    ///
    /// `EmptyStories` if the text has no non-blank line.
    #[instrument(skip(self, text))]
    pub fn submit_stories(&mut self, text: impl Into<String>) -> Result<(), ValidationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::EmptyStories));
        }

        if text != self.story_text {
            self.raw_generated_text.clear();
            self.scenarios.clear();
        }
        self.story_text = text;
        debug!(stories = self.story_lines().len(), "Stories submitted");
        Ok(())
    }

    /// Replace the generated text and invalidate scenarios parsed from the
    /// previous generation.
    #[instrument(skip(self, text), fields(len = text.len()))]
    pub fn set_generated_text(&mut self, text: String) {
        self.raw_generated_text = text;
        self.scenarios.clear();
    }

    /// Parse scenarios from the generated text unless some already exist.
    ///
    /// Returns the number of scenarios afterwards.
    pub fn ensure_scenarios(&mut self) -> usize {
        if self.scenarios.is_empty() {
            self.scenarios = parse_scenarios(&self.raw_generated_text);
        }
        self.scenarios.len()
    }

    /// Move to the next step if the current step's guard holds.
    ///
    /// Entering the review step parses scenarios on first entry.
    ///
    /// # Errors
    ///
    /// - `EmptyStories` on step 1 with blank story text
    /// - `NoGeneratedScenarios` on step 2 without generated text
    /// - `NoApprovedScenarios` on step 3 with nothing approved
    /// - `AtLastStep` on step 8
    #[instrument(skip(self), fields(from = %self.current_step))]
    pub fn advance(&mut self) -> Result<Step, ValidationError> {
        let next = self
            .current_step
            .next()
            .ok_or_else(|| ValidationError::new(ValidationErrorKind::AtLastStep))?;

        self.check_forward_guard()?;

        if next == Step::Review {
            self.ensure_scenarios();
        }
        self.current_step = next;
        debug!(to = %next, "Advanced");
        Ok(next)
    }

    /// Move back one step. Never guarded except on step 1.
    ///
    /// # Errors
    ///
    /// `AtFirstStep` on step 1.
    #[instrument(skip(self), fields(from = %self.current_step))]
    pub fn retreat(&mut self) -> Result<Step, ValidationError> {
        let previous = self
            .current_step
            .previous()
            .ok_or_else(|| ValidationError::new(ValidationErrorKind::AtFirstStep))?;
        self.current_step = previous;
        Ok(previous)
    }

    fn check_forward_guard(&self) -> Result<(), ValidationError> {
        let violated = match self.current_step {
            Step::Input if self.story_text.trim().is_empty() => {
                Some(ValidationErrorKind::EmptyStories)
            }
            Step::Generate if self.raw_generated_text.trim().is_empty() => {
                Some(ValidationErrorKind::NoGeneratedScenarios)
            }
            Step::Review if self.approved_count() == 0 => {
                Some(ValidationErrorKind::NoApprovedScenarios)
            }
            _ => None,
        };

        match violated {
            Some(kind) => Err(ValidationError::new(kind)),
            None => Ok(()),
        }
    }

    /// Add a scenario by hand.
    ///
    /// The new record gets the next free `TSxxx` id and starts pending.
    ///
    /// # Errors
    ///
    /// - `MissingField` if name or description is blank
    /// - `DuplicateScenarioName` if the name matches an existing one,
    ///   ignoring case
    #[instrument(skip(self, scenario), fields(name = %scenario.name))]
    pub fn add_scenario(&mut self, scenario: NewScenario) -> Result<ScenarioRecord, ValidationError> {
        let name = scenario.name.trim();
        if name.is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::MissingField(
                "name".to_string(),
            )));
        }
        if scenario.description.trim().is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::MissingField(
                "description".to_string(),
            )));
        }

        let key = name.to_lowercase();
        if self.scenarios.iter().any(|s| s.name_key() == key) {
            return Err(ValidationError::new(
                ValidationErrorKind::DuplicateScenarioName(name.to_string()),
            ));
        }

        let related_story = scenario
            .related_story
            .map(|story| story.trim().to_string())
            .filter(|story| !story.is_empty());

        let record = ScenarioRecord::new(self.next_scenario_id(), name)
            .with_description(scenario.description.trim())
            .with_expected_result(scenario.expected_result.trim())
            .with_scenario_type(scenario.scenario_type)
            .with_related_story(related_story);

        debug!(id = %record.id(), "Scenario added");
        self.scenarios.push(record.clone());
        Ok(record)
    }

    /// Id for the next inserted scenario.
    ///
    /// One past the larger of the scenario count and the highest numeric id,
    /// zero-padded to at least three digits. Never repeats an existing id,
    /// including ids too large to parse.
    pub fn next_scenario_id(&self) -> String {
        let highest = self
            .scenarios
            .iter()
            .filter_map(|s| s.id().strip_prefix("TS")?.parse::<u64>().ok())
            .max()
            .unwrap_or(0);

        // Widened so an id at u64::MAX still has a successor.
        let mut next = u128::from(highest.max(self.scenarios.len() as u64)) + 1;
        let mut id = format!("TS{:03}", next);
        while self.scenarios.iter().any(|s| s.id() == &id) {
            next = next.saturating_add(1);
            id = format!("TS{:03}", next);
        }
        id
    }

    /// Approve the scenario at `index`.
    ///
    /// # Errors
    ///
    /// `ScenarioIndexOutOfRange` for an unknown index.
    pub fn approve(&mut self, index: usize) -> Result<&ScenarioRecord, ValidationError> {
        let record = self.scenario_mut(index)?;
        record.approve();
        Ok(record)
    }

    /// Reject the scenario at `index`.
    ///
    /// # Errors
    ///
    /// `ScenarioIndexOutOfRange` for an unknown index.
    pub fn reject(&mut self, index: usize) -> Result<&ScenarioRecord, ValidationError> {
        let record = self.scenario_mut(index)?;
        record.reject();
        Ok(record)
    }

    fn scenario_mut(&mut self, index: usize) -> Result<&mut ScenarioRecord, ValidationError> {
        let len = self.scenarios.len();
        self.scenarios.get_mut(index).ok_or_else(|| {
            ValidationError::new(ValidationErrorKind::ScenarioIndexOutOfRange { index, len })
        })
    }

    /// Approved scenarios in their original order. Recomputed on each call.
    pub fn approved_scenarios(&self) -> Vec<&ScenarioRecord> {
        self.scenarios.iter().filter(|s| s.is_approved()).collect()
    }

    /// Number of approved scenarios.
    pub fn approved_count(&self) -> usize {
        self.scenarios.iter().filter(|s| s.is_approved()).count()
    }
}
