//! HTTP plumbing shared by the provider clients.

use crate::GenerationMetrics;
use lynqx_error::{LynqxError, ProviderError, ProviderErrorKind};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use tracing::{debug, error};

/// Build a reqwest client with the configured request timeout.
pub(crate) fn http_client(timeout_secs: u64) -> Result<Client, ProviderError> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| ProviderError::new(ProviderErrorKind::Request(e.to_string())))
}

/// Send a prepared request and decode a JSON body, recording metrics.
pub(crate) async fn send_json<T: DeserializeOwned>(
    request: RequestBuilder,
    provider: &'static str,
    model: &str,
    timeout_secs: u64,
) -> Result<T, LynqxError> {
    let metrics = GenerationMetrics::get();
    let started = Instant::now();

    let result = send_inner(request, timeout_secs).await;
    match &result {
        Ok(_) => {
            let elapsed = started.elapsed().as_secs_f64();
            debug!(provider, model, elapsed, "Provider request succeeded");
            metrics.record_request(provider, model, elapsed);
        }
        Err(e) => {
            error!(provider, model, error = %e, "Provider request failed");
            metrics.record_error(provider, model, error_type(&e.kind));
        }
    }
    result.map_err(LynqxError::from)
}

async fn send_inner<T: DeserializeOwned>(
    request: RequestBuilder,
    timeout_secs: u64,
) -> Result<T, ProviderError> {
    let response = request
        .send()
        .await
        .map_err(|e| classify_send_error(e, timeout_secs))?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        return Err(ProviderError::new(ProviderErrorKind::Api { status, message }));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ProviderError::new(ProviderErrorKind::Parse(e.to_string())))
}

fn classify_send_error(e: reqwest::Error, timeout_secs: u64) -> ProviderError {
    if e.is_timeout() {
        ProviderError::new(ProviderErrorKind::Timeout(timeout_secs))
    } else {
        ProviderError::new(ProviderErrorKind::Http(e.to_string()))
    }
}

fn error_type(kind: &ProviderErrorKind) -> &'static str {
    match kind {
        ProviderErrorKind::Http(_) => "network",
        ProviderErrorKind::Timeout(_) => "timeout",
        ProviderErrorKind::Api { status: 429, .. } => "rate_limit",
        ProviderErrorKind::Api { status: 401 | 403, .. } => "auth",
        ProviderErrorKind::Api { .. } => "api",
        ProviderErrorKind::Parse(_)
        | ProviderErrorKind::EmptyResponse
        | ProviderErrorKind::Refused(_) => "response",
        ProviderErrorKind::Request(_) => "invalid_request",
    }
}
