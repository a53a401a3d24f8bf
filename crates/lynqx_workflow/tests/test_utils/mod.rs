//! Shared helpers for workflow tests.

#![allow(dead_code)]

use async_trait::async_trait;
use lynqx_core::{GenerateRequest, GenerateResponse, Output, Usage};
use lynqx_error::{LynqxError, LynqxResult, ProviderError, ProviderErrorKind};
use lynqx_interface::LynqxDriver;
use std::sync::{Arc, Mutex};

/// A single mock response (success or error).
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(String),
    Refusal(String),
    Error(ProviderErrorKind),
}

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return success with the given text
    Success(String),
    /// Always return the specified error
    Error(ProviderErrorKind),
    /// Return a sequence of responses, then fail
    Sequence(Vec<MockResponse>),
}

/// Mock generation driver.
///
/// Records every prompt it receives so tests can assert on what the
/// workflow sent.
pub struct MockDriver {
    behavior: MockBehavior,
    call_count: Arc<Mutex<usize>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockDriver {
    fn with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(Mutex::new(0)),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Always succeed with `text`.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::with_behavior(MockBehavior::Success(text.into()))
    }

    /// Always fail with `error`.
    pub fn new_error(error: ProviderErrorKind) -> Self {
        Self::with_behavior(MockBehavior::Error(error))
    }

    /// Answer with `responses` in order.
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self::with_behavior(MockBehavior::Sequence(responses))
    }

    /// Number of times generate() was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Prompt text of every call, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    fn respond(response: &MockResponse) -> LynqxResult<GenerateResponse> {
        match response {
            MockResponse::Success(text) => Ok(GenerateResponse::new(vec![Output::Text(
                text.clone(),
            )])
            .with_usage(Usage {
                input_tokens: 100,
                output_tokens: 50,
            })),
            MockResponse::Refusal(reason) => {
                Ok(GenerateResponse::new(vec![Output::Refusal(reason.clone())]))
            }
            MockResponse::Error(kind) => Err(LynqxError::from(ProviderError::new(kind.clone()))),
        }
    }

    fn next_response(&self) -> LynqxResult<GenerateResponse> {
        let mut count = self.call_count.lock().unwrap();
        let current = *count;
        *count += 1;

        match &self.behavior {
            MockBehavior::Success(text) => Self::respond(&MockResponse::Success(text.clone())),
            MockBehavior::Error(kind) => Self::respond(&MockResponse::Error(kind.clone())),
            MockBehavior::Sequence(responses) => match responses.get(current) {
                Some(response) => Self::respond(response),
                None => Err(LynqxError::from(ProviderError::new(
                    ProviderErrorKind::Request(format!(
                        "Mock sequence exhausted (call {} beyond {} responses)",
                        current + 1,
                        responses.len()
                    )),
                ))),
            },
        }
    }
}

#[async_trait]
impl LynqxDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> LynqxResult<GenerateResponse> {
        let prompt = req
            .messages()
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        self.prompts.lock().unwrap().push(prompt);
        tokio::time::sleep(tokio::time::Duration::from_millis(1)).await;
        self.next_response()
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

/// Provider output used across tests: five lines, one duplicate name.
pub const SAMPLE_OUTPUT: &str = "Here are your scenarios:\n\
1. **TS001**: Successful login — User enters valid credentials - Dashboard shown\n\
2. TS002: Invalid password — Wrong password - Error shown\n\
3. TS003: successful LOGIN — duplicate in other case\n\
TS004: Password reset - Email is sent\n\
Thanks!";

/// Wrap a mock as the trait object the workflow expects.
pub fn shared(driver: MockDriver) -> (Arc<MockDriver>, Arc<dyn LynqxDriver>) {
    let mock = Arc::new(driver);
    let dyn_driver: Arc<dyn LynqxDriver> = mock.clone();
    (mock, dyn_driver)
}
