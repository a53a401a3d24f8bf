//! Tests for action dispatch through the review workflow controller.

mod test_utils;

use lynqx_core::{NewScenario, NoticeLevel, Step};
use lynqx_error::ProviderErrorKind;
use lynqx_workflow::{Action, ExportFormat, ReviewWorkflow};
use test_utils::{MockDriver, MockResponse, SAMPLE_OUTPUT, shared};

const STORIES: &str = "As a user I can log in\n\nAs a user I can reset my password\n";

async fn workflow_in_review(driver: MockDriver) -> ReviewWorkflow {
    let (_, driver) = shared(driver);
    let mut workflow = ReviewWorkflow::new(driver);
    workflow.handle(Action::SubmitStories(STORIES.to_string())).await;
    workflow.handle(Action::GenerateScenarios).await;
    workflow.handle(Action::Next).await;
    assert_eq!(workflow.state().current_step(), Step::Review);
    workflow
}

#[tokio::test]
async fn test_submit_stories_advances_to_generate() {
    let (_, driver) = shared(MockDriver::new_success(SAMPLE_OUTPUT));
    let mut workflow = ReviewWorkflow::new(driver);

    let notices = workflow
        .handle(Action::SubmitStories(STORIES.to_string()))
        .await;

    assert_eq!(workflow.state().current_step(), Step::Generate);
    assert_eq!(notices[0].level, NoticeLevel::Success);
    assert!(notices[0].message.contains("2 user stories"));
    assert_eq!(workflow.last_notices(), notices.as_slice());
}

#[tokio::test]
async fn test_submit_blank_stories_warns_and_stays() {
    let (_, driver) = shared(MockDriver::new_success(SAMPLE_OUTPUT));
    let mut workflow = ReviewWorkflow::new(driver);

    let notices = workflow.handle(Action::SubmitStories("  \n ".to_string())).await;

    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Warning);
    assert_eq!(notices[0].message, "Please enter at least one user story");
    assert_eq!(workflow.state().current_step(), Step::Input);
}

#[tokio::test]
async fn test_generate_sends_prompt_with_stories() {
    let (mock, driver) = shared(MockDriver::new_success(SAMPLE_OUTPUT));
    let mut workflow = ReviewWorkflow::new(driver);
    workflow.handle(Action::SubmitStories(STORIES.to_string())).await;

    let notices = workflow.handle(Action::GenerateScenarios).await;

    assert_eq!(notices[0].level, NoticeLevel::Success);
    assert_eq!(mock.call_count(), 1);
    let prompts = mock.prompts();
    assert!(prompts[0].contains("1. As a user I can log in"));
    assert!(prompts[0].contains("2. As a user I can reset my password"));
    assert_eq!(workflow.state().raw_generated_text(), SAMPLE_OUTPUT);
}

#[tokio::test]
async fn test_generation_failure_leaves_state_unchanged() {
    let (mock, driver) = shared(MockDriver::new_sequence(vec![
        MockResponse::Success("TS001: First draft".to_string()),
        MockResponse::Error(ProviderErrorKind::Api {
            status: 401,
            message: "invalid x-api-key".to_string(),
        }),
    ]));
    let mut workflow = ReviewWorkflow::new(driver);
    workflow.handle(Action::SubmitStories(STORIES.to_string())).await;
    workflow.handle(Action::GenerateScenarios).await;
    let before = workflow.state().clone();

    let notices = workflow.handle(Action::GenerateScenarios).await;

    assert_eq!(mock.call_count(), 2);
    assert_eq!(workflow.state(), &before);
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Error);
    assert!(notices[0].message.starts_with("Error generating test scenarios"));
    assert!(notices[0].message.contains("invalid x-api-key"));
    assert!(!notices[0].message.contains("try again"));
}

#[tokio::test]
async fn test_transient_failure_suggests_retry() {
    let (_, driver) = shared(MockDriver::new_error(ProviderErrorKind::Timeout(60)));
    let mut workflow = ReviewWorkflow::new(driver);
    workflow.handle(Action::SubmitStories(STORIES.to_string())).await;

    let notices = workflow.handle(Action::GenerateScenarios).await;

    assert_eq!(notices[0].level, NoticeLevel::Error);
    assert!(notices[0].message.contains("timed out"));
    assert!(notices[0].message.ends_with("Please try again."));
    assert!(workflow.state().raw_generated_text().is_empty());
}

#[tokio::test]
async fn test_refusal_is_reported_as_error() {
    let (_, driver) = shared(MockDriver::new_sequence(vec![MockResponse::Refusal(
        "I can't help with that".to_string(),
    )]));
    let mut workflow = ReviewWorkflow::new(driver);
    workflow.handle(Action::SubmitStories(STORIES.to_string())).await;

    let notices = workflow.handle(Action::GenerateScenarios).await;

    assert_eq!(notices[0].level, NoticeLevel::Error);
    assert!(notices[0].message.contains("I can't help with that"));
    assert!(workflow.state().raw_generated_text().is_empty());
}

#[tokio::test]
async fn test_empty_response_is_reported_as_error() {
    let (_, driver) = shared(MockDriver::new_success("   "));
    let mut workflow = ReviewWorkflow::new(driver);
    workflow.handle(Action::SubmitStories(STORIES.to_string())).await;

    let notices = workflow.handle(Action::GenerateScenarios).await;

    assert_eq!(notices[0].level, NoticeLevel::Error);
    assert!(notices[0].message.contains("empty response"));
}

#[tokio::test]
async fn test_step_scoped_actions_are_refused_elsewhere() {
    let (mock, driver) = shared(MockDriver::new_success(SAMPLE_OUTPUT));
    let mut workflow = ReviewWorkflow::new(driver);

    for action in [
        Action::GenerateScenarios,
        Action::Approve(0),
        Action::Reject(0),
        Action::AddCustomScenario(NewScenario::default()),
    ] {
        let notices = workflow.handle(action).await;
        assert_eq!(notices[0].level, NoticeLevel::Warning);
        assert!(notices[0].message.contains("is not available during step"));
    }

    assert_eq!(mock.call_count(), 0);
    assert_eq!(workflow.state().current_step(), Step::Input);
}

#[tokio::test]
async fn test_entering_review_reports_parsed_count() {
    let (_, driver) = shared(MockDriver::new_success(SAMPLE_OUTPUT));
    let mut workflow = ReviewWorkflow::new(driver);
    workflow.handle(Action::SubmitStories(STORIES.to_string())).await;
    workflow.handle(Action::GenerateScenarios).await;

    let notices = workflow.handle(Action::Next).await;

    assert_eq!(workflow.state().current_step(), Step::Review);
    assert!(notices.iter().any(|n| n.message == "3 scenarios ready for review"));
}

#[tokio::test]
async fn test_entering_review_without_parsable_lines_warns() {
    let (_, driver) = shared(MockDriver::new_success("Sorry, no scenarios today."));
    let mut workflow = ReviewWorkflow::new(driver);
    workflow.handle(Action::SubmitStories(STORIES.to_string())).await;
    workflow.handle(Action::GenerateScenarios).await;

    let notices = workflow.handle(Action::Next).await;

    assert_eq!(workflow.state().current_step(), Step::Review);
    assert!(notices.iter().any(|n| n.level == NoticeLevel::Warning));
    assert!(workflow.state().scenarios().is_empty());
}

#[tokio::test]
async fn test_review_actions_and_guarded_next() {
    let mut workflow = workflow_in_review(MockDriver::new_success(SAMPLE_OUTPUT)).await;

    let notices = workflow.handle(Action::Next).await;
    assert_eq!(notices[0].message, "Approve at least one scenario before continuing");
    assert_eq!(workflow.state().current_step(), Step::Review);

    let notices = workflow.handle(Action::Approve(1)).await;
    assert_eq!(notices[0].message, "Approved TS002");

    let notices = workflow.handle(Action::Approve(9)).await;
    assert_eq!(notices[0].level, NoticeLevel::Warning);

    let notices = workflow
        .handle(Action::AddCustomScenario(NewScenario {
            name: "Expired link".to_string(),
            description: "Reset link older than 24h".to_string(),
            expected_result: "Link is rejected".to_string(),
            ..NewScenario::default()
        }))
        .await;
    assert_eq!(notices[0].message, "Added TS005: Expired link");

    workflow.handle(Action::Next).await;
    assert_eq!(workflow.state().current_step(), Step::CreateTestCases);
}

#[tokio::test]
async fn test_back_from_first_step_warns() {
    let (_, driver) = shared(MockDriver::new_success(SAMPLE_OUTPUT));
    let mut workflow = ReviewWorkflow::new(driver);

    let notices = workflow.handle(Action::Back).await;

    assert_eq!(notices[0].level, NoticeLevel::Warning);
    assert_eq!(notices[0].message, "Already at the first step");
}

#[tokio::test]
async fn test_export_approved_text_and_json() {
    let mut workflow = workflow_in_review(MockDriver::new_success(SAMPLE_OUTPUT)).await;
    workflow.handle(Action::Approve(2)).await;
    workflow
        .handle(Action::AddCustomScenario(NewScenario {
            name: "Expired link".to_string(),
            description: "Reset link older than 24h".to_string(),
            expected_result: "Link is rejected".to_string(),
            ..NewScenario::default()
        }))
        .await;
    workflow.handle(Action::Approve(3)).await;

    let text = workflow.export_approved(ExportFormat::Text).unwrap();
    assert_eq!(
        text,
        "TS004: Password reset\nTS005: Expired link — Reset link older than 24h — Link is rejected"
    );

    let json = workflow.export_approved(ExportFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1]["id"], "TS005");
    assert_eq!(items[1]["status"], "approved");
    assert_eq!(items[1]["scenario_type"], "positive");
}

#[tokio::test]
async fn test_provider_label_and_prompt() {
    let (_, driver) = shared(MockDriver::new_success(SAMPLE_OUTPUT));
    let mut workflow = ReviewWorkflow::new(driver);
    workflow.handle(Action::SubmitStories("Only story".to_string())).await;

    assert_eq!(workflow.provider_label(), "mock/mock-model");
    assert!(workflow.prompt().contains("1. Only story"));
}
