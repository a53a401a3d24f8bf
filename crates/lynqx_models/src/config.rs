//! Configuration loading.
//!
//! Sources, in order of precedence (later sources override earlier):
//! 1. Bundled defaults (`lynqx.toml` shipped with the library)
//! 2. User config in home directory (`~/.config/lynqx/lynqx.toml`)
//! 3. User config in current directory (`./lynqx.toml`)
//! 4. Environment variables prefixed with `LYNQX_`, using `__` between
//!    nested keys (e.g. `LYNQX_PROVIDER__MODEL`)
//!
//! The provider credential is never stored in configuration; only the name
//! of the environment variable that holds it.

use lynqx_error::{ConfigError, LynqxError, LynqxResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../lynqx.toml");

/// Which provider API to talk to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Anthropic Messages API
    #[display("anthropic")]
    Anthropic,
    /// OpenAI chat completions (or any compatible server)
    #[display("openai")]
    OpenAi,
}

/// Generation provider settings.
///
/// ```toml
/// [provider]
/// kind = "anthropic"
/// model = "claude-3-5-haiku-latest"
/// api_key_env = "ANTHROPIC_API_KEY"
/// max_tokens = 2048
/// timeout_secs = 60
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// Provider API
    pub kind: ProviderKind,
    /// Model identifier
    pub model: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    /// Override of the provider endpoint (OpenAI-compatible servers)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Sampling temperature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ProviderSettings {
    /// Read the API key from the environment.
    ///
    /// A `.env` file in the working directory is loaded first, if present.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when the variable is unset or blank.
    #[instrument(skip(self), fields(api_key_env = %self.api_key_env))]
    pub fn api_key(&self) -> Result<String, ConfigError> {
        let _ = dotenvy::dotenv();

        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(ConfigError::new(format!(
                "{} is not set. Export it or add it to a .env file before starting LynQX.",
                self.api_key_env
            ))),
        }
    }
}

/// Terminal front end settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TuiSettings {
    /// Event poll interval in milliseconds
    pub tick_rate_ms: u64,
}

/// Top-level LynQX configuration.
///
/// # Example
///
/// ```no_run
/// use lynqx_models::LynqxConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = LynqxConfig::load()?;
/// println!("Provider: {} ({})", config.provider.kind, config.provider.model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LynqxConfig {
    /// Provider settings
    pub provider: ProviderSettings,
    /// TUI settings
    pub tui: TuiSettings,
}

impl LynqxConfig {
    /// Load configuration from bundled defaults, user files and environment.
    ///
    /// User config files are optional and silently skipped if not found.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a source cannot be parsed.
    #[instrument]
    pub fn load() -> LynqxResult<Self> {
        debug!("Loading configuration: env > current dir > home dir > bundled defaults");

        let mut builder = config::Config::builder().add_source(config::File::from_str(
            DEFAULT_CONFIG,
            config::FileFormat::Toml,
        ));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/lynqx/lynqx.toml");
            builder = builder.add_source(config::File::from(home_config).required(false));
        }

        builder = builder
            .add_source(config::File::with_name("lynqx").required(false))
            .add_source(environment());

        Self::finish(builder)
    }

    /// Load bundled defaults overridden by one explicit file (and environment).
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file is missing or cannot be parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> LynqxResult<Self> {
        debug!("Loading configuration from file");

        let builder = config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            .add_source(config::File::from(path.as_ref()).required(true))
            .add_source(environment());

        Self::finish(builder)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> LynqxResult<Self> {
        builder
            .build()
            .map_err(|e| {
                LynqxError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                LynqxError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix("LYNQX")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
