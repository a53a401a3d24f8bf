//! OpenAI chat completions client (also used for compatible servers).

mod client;
mod dto;

pub use client::OpenAiClient;
pub use dto::{
    OpenAiChoice, OpenAiMessage, OpenAiRequest, OpenAiRequestBuilder, OpenAiResponse,
    OpenAiUsage,
};
