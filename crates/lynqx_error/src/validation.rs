//! Validation error types.
//!
//! Every variant here is recoverable: the workflow shows it as an inline
//! warning and leaves its state untouched.

/// Specific validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ValidationErrorKind {
    /// No non-blank user story was provided
    #[display("Please enter at least one user story")]
    EmptyStories,
    /// A required field was empty or whitespace
    #[display("The {} field is required", _0)]
    MissingField(String),
    /// A scenario with the same name (case-insensitive) already exists
    #[display("A scenario named '{}' already exists", _0)]
    DuplicateScenarioName(String),
    /// Step 2 cannot be left before scenarios have been generated
    #[display("Generate scenarios before continuing")]
    NoGeneratedScenarios,
    /// Step 3 cannot be left before a scenario has been approved
    #[display("Approve at least one scenario before continuing")]
    NoApprovedScenarios,
    /// A scenario index does not exist
    #[display("No scenario at position {} (there are {})", index, len)]
    ScenarioIndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of scenarios
        len: usize,
    },
    /// Back was requested on the first step
    #[display("Already at the first step")]
    AtFirstStep,
    /// Next was requested on the last step
    #[display("Already at the last step")]
    AtLastStep,
    /// No session with this id exists
    #[display("Unknown session: {}", _0)]
    SessionNotFound(String),
    /// The action is not available on the current step
    #[display("'{}' is not available during step {}", action, step)]
    WrongStep {
        /// Action name
        action: String,
        /// Step title
        step: String,
    },
}

/// Validation error with location tracking.
///
/// # Examples
///
/// ```
/// use lynqx_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::DuplicateScenarioName("Login".into()));
/// assert_eq!(err.kind().to_string(), "A scenario named 'Login' already exists");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    kind: ValidationErrorKind,
    line: u32,
    file: &'static str,
}

impl ValidationError {
    /// Create a new validation error with caller location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ValidationErrorKind {
        &self.kind
    }
}
