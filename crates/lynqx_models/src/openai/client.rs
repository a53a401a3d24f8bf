use crate::transport::{http_client, send_json};
use crate::{GenerationMetrics, OpenAiMessage, OpenAiRequest, OpenAiResponse, ProviderSettings};
use lynqx_core::{GenerateRequest, GenerateResponse, Output, Role, Usage};
use lynqx_error::{LynqxResult, ProviderError, ProviderErrorKind};
use lynqx_interface::LynqxDriver;
use reqwest::Client;
use tracing::{debug, instrument};

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// OpenAI-compatible chat completions client.
///
/// Point `base_url` at any server speaking the same protocol (Groq, a local
/// llama.cpp or vLLM instance) to use it instead of OpenAI.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    model: String,
    url: String,
    max_tokens: u32,
    temperature: Option<f32>,
    timeout_secs: u64,
}

impl OpenAiClient {
    /// Creates a client from provider settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    #[instrument(skip_all, fields(model = %settings.model))]
    pub fn from_settings(
        api_key: impl Into<String>,
        settings: &ProviderSettings,
    ) -> Result<Self, ProviderError> {
        debug!("Creating new OpenAI-compatible client");
        Ok(Self {
            client: http_client(settings.timeout_secs)?,
            api_key: api_key.into(),
            model: settings.model.clone(),
            url: settings
                .base_url
                .clone()
                .unwrap_or_else(|| OPENAI_API_URL.to_string()),
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
            timeout_secs: settings.timeout_secs,
        })
    }

    fn convert_request(&self, request: &GenerateRequest) -> Result<OpenAiRequest, ProviderError> {
        let messages = request
            .messages()
            .iter()
            .map(|message| {
                let role = match message.role {
                    Role::System => "system",
                    Role::User => "user",
                    Role::Assistant => "assistant",
                };
                OpenAiMessage::new(role, &message.content)
            })
            .collect::<Vec<_>>();

        if messages.is_empty() {
            return Err(ProviderError::new(ProviderErrorKind::Request(
                "At least one message is required".to_string(),
            )));
        }

        OpenAiRequest::builder()
            .model(self.model.clone())
            .messages(messages)
            .max_tokens(Some(request.max_tokens().unwrap_or(self.max_tokens)))
            .temperature(request.temperature().or(self.temperature))
            .build()
            .map_err(|e| ProviderError::new(ProviderErrorKind::Request(e.to_string())))
    }

    fn convert_response(response: &OpenAiResponse) -> GenerateResponse {
        let outputs = response
            .choices()
            .iter()
            .filter_map(|choice| {
                let message = choice.message();
                match (message.content(), message.refusal()) {
                    (_, Some(refusal)) => Some(Output::Refusal(refusal.clone())),
                    (Some(content), None) => Some(Output::Text(content.clone())),
                    (None, None) => None,
                }
            })
            .collect();

        let converted = GenerateResponse::new(outputs);
        match response.usage() {
            Some(usage) => converted.with_usage(Usage {
                input_tokens: *usage.prompt_tokens(),
                output_tokens: *usage.completion_tokens(),
            }),
            None => converted,
        }
    }
}

#[async_trait::async_trait]
impl LynqxDriver for OpenAiClient {
    #[instrument(skip(self, request), fields(provider = "openai", model = %self.model))]
    async fn generate(&self, request: &GenerateRequest) -> LynqxResult<GenerateResponse> {
        let body = self.convert_request(request)?;

        let http = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body);

        let response: OpenAiResponse =
            send_json(http, "openai", &self.model, self.timeout_secs).await?;
        debug!(response_id = %response.id(), choices = response.choices().len(), "Received chat completion");

        if let Some(usage) = response.usage() {
            GenerationMetrics::get().record_tokens(
                &self.model,
                *usage.prompt_tokens(),
                *usage.completion_tokens(),
            );
        }
        Ok(Self::convert_response(&response))
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
