use crate::transport::{http_client, send_json};
use crate::{
    AnthropicContentBlock, AnthropicMessage, AnthropicRequest, AnthropicResponse,
    GenerationMetrics, ProviderSettings,
};
use lynqx_core::{GenerateRequest, GenerateResponse, Output, Role, Usage};
use lynqx_error::{LynqxResult, ProviderError, ProviderErrorKind};
use lynqx_interface::LynqxDriver;
use reqwest::Client;
use tracing::{debug, instrument};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Anthropic API client.
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    client: Client,
    api_key: String,
    model: String,
    url: String,
    max_tokens: u32,
    temperature: Option<f32>,
    timeout_secs: u64,
}

impl AnthropicClient {
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
        debug!("Creating new Anthropic client");
        Ok(Self {
            client: http_client(settings.timeout_secs)?,
            api_key: api_key.into(),
            model: settings.model.clone(),
            url: settings
                .base_url
                .clone()
                .unwrap_or_else(|| ANTHROPIC_API_URL.to_string()),
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
            timeout_secs: settings.timeout_secs,
        })
    }

    /// Converts a LynQX request to an Anthropic API request.
    ///
    /// System messages are lifted into the top-level `system` field.
    fn convert_request(&self, request: &GenerateRequest) -> Result<AnthropicRequest, ProviderError> {
        let mut system = Vec::new();
        let mut messages = Vec::new();
        for message in request.messages() {
            match message.role {
                Role::System => system.push(message.content.clone()),
                Role::User => messages.push(AnthropicMessage::new("user", &message.content)),
                Role::Assistant => {
                    messages.push(AnthropicMessage::new("assistant", &message.content))
                }
            }
        }

        if messages.is_empty() {
            return Err(ProviderError::new(ProviderErrorKind::Request(
                "At least one user message is required".to_string(),
            )));
        }

        AnthropicRequest::builder()
            .model(self.model.clone())
            .max_tokens(request.max_tokens().unwrap_or(self.max_tokens))
            .messages(messages)
            .system((!system.is_empty()).then(|| system.join("\n\n")))
            .temperature(request.temperature().or(self.temperature))
            .build()
            .map_err(|e| ProviderError::new(ProviderErrorKind::Request(e.to_string())))
    }

    /// Converts an Anthropic API response to a LynQX response.
    fn convert_response(response: &AnthropicResponse) -> GenerateResponse {
        let outputs = response
            .content()
            .iter()
            .filter_map(|block| match block {
                AnthropicContentBlock::Text { text } => Some(Output::Text(text.clone())),
                AnthropicContentBlock::Other => None,
            })
            .collect();

        GenerateResponse::new(outputs).with_usage(Usage {
            input_tokens: *response.usage().input_tokens(),
            output_tokens: *response.usage().output_tokens(),
        })
    }
}

#[async_trait::async_trait]
impl LynqxDriver for AnthropicClient {
    #[instrument(skip(self, request), fields(provider = "anthropic", model = %self.model))]
    async fn generate(&self, request: &GenerateRequest) -> LynqxResult<GenerateResponse> {
        let body = self.convert_request(request)?;

        let http = self
            .client
            .post(&self.url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&body);

        let response: AnthropicResponse =
            send_json(http, "anthropic", &self.model, self.timeout_secs).await?;
        debug!(response_id = %response.id(), stop_reason = ?response.stop_reason(), "Received response from Anthropic");

        GenerationMetrics::get().record_tokens(
            &self.model,
            *response.usage().input_tokens(),
            *response.usage().output_tokens(),
        );
        Ok(Self::convert_response(&response))
    }

    fn provider_name(&self) -> &'static str {
        "anthropic"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProviderKind;
    use lynqx_core::Message;

    fn settings() -> ProviderSettings {
        ProviderSettings {
            kind: ProviderKind::Anthropic,
            model: "claude-test".to_string(),
            api_key_env: "UNUSED".to_string(),
            base_url: None,
            max_tokens: 1024,
            temperature: Some(0.2),
            timeout_secs: 5,
        }
    }

    #[test]
    fn test_system_messages_lifted() {
        let client = AnthropicClient::from_settings("key", &settings()).unwrap();
        let request = GenerateRequest::builder()
            .messages(vec![Message::system("Be terse"), Message::user("Draft")])
            .build()
            .unwrap();

        let converted = client.convert_request(&request).unwrap();
        assert_eq!(converted.system().as_deref(), Some("Be terse"));
        assert_eq!(converted.messages().len(), 1);
        assert_eq!(converted.messages()[0].role(), "user");
        assert_eq!(*converted.max_tokens(), 1024);
        assert_eq!(*converted.temperature(), Some(0.2));
    }

    #[test]
    fn test_request_without_user_message_rejected() {
        let client = AnthropicClient::from_settings("key", &settings()).unwrap();
        let request = GenerateRequest::builder()
            .messages(vec![Message::system("Only system")])
            .build()
            .unwrap();

        assert!(client.convert_request(&request).is_err());
    }

    #[test]
    fn test_response_keeps_text_blocks_only() {
        let json = r#"{
            "id": "msg_1",
            "model": "claude-test",
            "content": [
                {"type": "text", "text": "TS001: Login"},
                {"type": "tool_use", "id": "t", "name": "x", "input": {}}
            ],
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 12, "output_tokens": 5}
        }"#;
        let response: AnthropicResponse = serde_json::from_str(json).unwrap();
        let converted = AnthropicClient::convert_response(&response);

        assert_eq!(converted.text(), "TS001: Login");
        assert_eq!(converted.usage.map(|u| u.output_tokens), Some(5));
    }
}
