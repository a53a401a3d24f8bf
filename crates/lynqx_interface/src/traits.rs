//! Trait definitions for generation backends.

use async_trait::async_trait;
use lynqx_core::{GenerateRequest, GenerateResponse};
use lynqx_error::LynqxResult;

/// Core trait that all generation backends must implement.
///
/// Failures are reported as `ProviderError`s wrapped in `LynqxError`; the
/// caller decides how to surface them.
#[async_trait]
pub trait LynqxDriver: Send + Sync {
    /// Generate model output for a request.
    async fn generate(&self, req: &GenerateRequest) -> LynqxResult<GenerateResponse>;

    /// Provider name (e.g., "anthropic", "openai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "claude-3-5-haiku-latest").
    fn model_name(&self) -> &str;
}
