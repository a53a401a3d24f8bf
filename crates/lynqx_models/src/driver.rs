//! Driver construction from configuration.

use crate::{LynqxConfig, ProviderKind};
use lynqx_error::LynqxResult;
use lynqx_interface::LynqxDriver;
use std::sync::Arc;
use tracing::{info, instrument};

/// Build the configured provider client.
///
/// This is the startup credential check: a missing API key is returned as a
/// `ConfigError` before any UI is shown.
///
/// # Errors
///
/// Returns a `ConfigError` if the credential is missing or the provider is
/// not compiled in, and a `ProviderError` if the HTTP client cannot be built.
#[instrument(skip(config), fields(provider = %config.provider.kind, model = %config.provider.model))]
pub fn build_driver(config: &LynqxConfig) -> LynqxResult<Arc<dyn LynqxDriver>> {
    let settings = &config.provider;
    let api_key = settings.api_key()?;

    let driver: Arc<dyn LynqxDriver> = match settings.kind {
        #[cfg(feature = "anthropic")]
        ProviderKind::Anthropic => Arc::new(crate::AnthropicClient::from_settings(api_key, settings)?),
        #[cfg(feature = "openai")]
        ProviderKind::OpenAi => Arc::new(crate::OpenAiClient::from_settings(api_key, settings)?),
        #[allow(unreachable_patterns)]
        other => {
            let _ = api_key;
            return Err(lynqx_error::ConfigError::new(format!(
                "Support for provider '{}' was not compiled in",
                other
            ))
            .into());
        }
    };

    info!("Generation provider ready");
    Ok(driver)
}
