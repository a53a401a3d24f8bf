//! Message types for provider requests.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A single text message in a provider conversation.
///
/// # Examples
///
/// ```
/// use lynqx_core::{Message, Role};
///
/// let message = Message::user("Draft test scenarios");
/// assert_eq!(message.role, Role::User);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// Message text
    pub content: String,
}

impl Message {
    /// Create a message from the user.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }
}
