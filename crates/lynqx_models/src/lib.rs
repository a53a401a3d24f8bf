//! Generation provider clients for LynQX.
//!
//! Each provider sits behind its own feature flag. The workflow only ever
//! sees an `Arc<dyn LynqxDriver>`, produced from configuration by
//! [`build_driver`].
//!
//! # Available Providers
//!
//! - **Anthropic** (Messages API) - `anthropic` feature
//! - **OpenAI** and OpenAI-compatible chat completion servers - `openai` feature
//!
//! # Example
//!
//! ```no_run
//! use lynqx_models::{LynqxConfig, build_driver};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = LynqxConfig::load()?;
//! let driver = build_driver(&config)?;
//! println!("Using {} / {}", driver.provider_name(), driver.model_name());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod driver;
mod metrics;
mod transport;

#[cfg(feature = "anthropic")]
mod anthropic;

#[cfg(feature = "openai")]
mod openai;

pub use config::{LynqxConfig, ProviderKind, ProviderSettings, TuiSettings};
pub use driver::build_driver;
pub use metrics::GenerationMetrics;

#[cfg(feature = "anthropic")]
pub use anthropic::{
    AnthropicClient, AnthropicContentBlock, AnthropicMessage, AnthropicRequest,
    AnthropicRequestBuilder, AnthropicResponse, AnthropicUsage,
};

#[cfg(feature = "openai")]
pub use openai::{
    OpenAiChoice, OpenAiClient, OpenAiMessage, OpenAiRequest, OpenAiRequestBuilder,
    OpenAiResponse, OpenAiUsage,
};
