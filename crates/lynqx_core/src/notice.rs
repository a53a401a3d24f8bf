//! Inline notices shown to the user after each action.

use serde::{Deserialize, Serialize};

/// Severity of a notice.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum NoticeLevel {
    /// Neutral information
    Info,
    /// The action succeeded
    Success,
    /// The action was refused; nothing changed
    Warning,
    /// The action failed; nothing changed, retry is possible
    Error,
}

/// A non-blocking message produced by one workflow action.
///
/// # Examples
///
/// ```
/// use lynqx_core::{Notice, NoticeLevel};
///
/// let notice = Notice::warning("Please enter at least one user story");
/// assert_eq!(notice.level, NoticeLevel::Warning);
/// assert_eq!(notice.to_string(), "Warning: Please enter at least one user story");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[display("{level}: {message}")]
pub struct Notice {
    /// Severity
    pub level: NoticeLevel,
    /// Message text
    pub message: String,
}

impl Notice {
    /// Create a notice with an explicit level.
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    /// Informational notice.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    /// Success notice.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    /// Warning notice.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message)
    }

    /// Error notice.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    /// Whether the notice reports a refused or failed action.
    pub fn is_problem(&self) -> bool {
        matches!(self.level, NoticeLevel::Warning | NoticeLevel::Error)
    }
}
