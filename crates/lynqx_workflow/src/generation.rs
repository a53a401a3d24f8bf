//! The single generation call made by the workflow.

use lynqx_core::{GenerateRequest, Message};
use lynqx_error::{LynqxResult, ProviderError, ProviderErrorKind};
use lynqx_interface::LynqxDriver;
use tracing::{debug, instrument, warn};

/// Send `prompt` as one user message and return the generated text.
///
/// # Errors
///
/// Propagates driver errors unchanged. A response without text is a
/// `ProviderError`: `Refused` when the model declined, otherwise
/// `EmptyResponse`.
#[instrument(
    skip(driver, prompt),
    fields(provider = driver.provider_name(), model = driver.model_name(), prompt_len = prompt.len())
)]
pub async fn generate_text(driver: &dyn LynqxDriver, prompt: &str) -> LynqxResult<String> {
    let request = GenerateRequest::builder()
        .messages(vec![Message::user(prompt)])
        .build()
        .map_err(|e| ProviderError::new(ProviderErrorKind::Request(e.to_string())))?;

    let response = driver.generate(&request).await?;
    let text = response.text();

    if text.trim().is_empty() {
        if let Some(reason) = response.refusal() {
            warn!(reason = %reason, "Provider refused the prompt");
            return Err(ProviderError::new(ProviderErrorKind::Refused(reason.to_string())).into());
        }
        return Err(ProviderError::new(ProviderErrorKind::EmptyResponse).into());
    }

    if let Some(usage) = &response.usage {
        debug!(
            input_tokens = usage.input_tokens,
            output_tokens = usage.output_tokens,
            "Generation complete"
        );
    }
    Ok(text)
}
