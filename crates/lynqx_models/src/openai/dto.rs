//! OpenAI chat completions data transfer objects.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A chat message, in requests and in response choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct OpenAiMessage {
    /// "system", "user" or "assistant"
    role: String,
    /// Message text; absent on refusals
    #[serde(default)]
    content: Option<String>,
    /// Refusal explanation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    refusal: Option<String>,
}

impl OpenAiMessage {
    /// Creates a request message.
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: Some(content.into()),
            refusal: None,
        }
    }
}

/// Chat completions request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct OpenAiRequest {
    /// Model identifier
    model: String,
    /// Conversation messages
    messages: Vec<OpenAiMessage>,
    /// Maximum tokens to generate
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    /// Sampling temperature
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

impl OpenAiRequest {
    /// Creates a new builder for `OpenAiRequest`.
    pub fn builder() -> OpenAiRequestBuilder {
        OpenAiRequestBuilder::default()
    }
}

/// One completion choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct OpenAiChoice {
    /// Choice index
    #[serde(default)]
    index: u32,
    /// Generated message
    message: OpenAiMessage,
    /// Why generation stopped
    #[serde(default)]
    finish_reason: Option<String>,
}

/// Token usage reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Getters)]
pub struct OpenAiUsage {
    /// Prompt tokens consumed
    #[serde(default)]
    prompt_tokens: u64,
    /// Completion tokens generated
    #[serde(default)]
    completion_tokens: u64,
}

/// Chat completions response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct OpenAiResponse {
    /// Response identifier
    #[serde(default)]
    id: String,
    /// Model that answered
    #[serde(default)]
    model: String,
    /// Completion choices
    choices: Vec<OpenAiChoice>,
    /// Token usage
    #[serde(default)]
    usage: Option<OpenAiUsage>,
}
