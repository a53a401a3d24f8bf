//! End-to-end review flow through the facade crate.

use async_trait::async_trait;
use lynqx::{
    Action, ExportFormat, GenerateRequest, GenerateResponse, LynqxDriver, LynqxResult,
    NewScenario, Output, ReviewWorkflow, ScenarioStatus, ScenarioType, Step,
};
use std::sync::Arc;

struct ScriptedDriver;

#[async_trait]
impl LynqxDriver for ScriptedDriver {
    async fn generate(&self, _req: &GenerateRequest) -> LynqxResult<GenerateResponse> {
        Ok(GenerateResponse::new(vec![Output::Text(
            "1. **TS001**: Login OK — valid creds - dashboard\n\
             TS002: login ok — dup\n\
             TS003: Logout - session ends"
                .to_string(),
        )]))
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-v1"
    }
}

#[tokio::test]
async fn test_stories_to_approved_scenarios() {
    let mut workflow = ReviewWorkflow::new(Arc::new(ScriptedDriver));

    workflow
        .handle(Action::SubmitStories(
            "As a user I can log in\nAs a user I can log out".to_string(),
        ))
        .await;
    workflow.handle(Action::GenerateScenarios).await;
    workflow.handle(Action::Next).await;
    assert_eq!(workflow.state().current_step(), Step::Review);

    let names: Vec<(&str, &str)> = workflow
        .state()
        .scenarios()
        .iter()
        .map(|s| (s.id().as_str(), s.name().as_str()))
        .collect();
    assert_eq!(names, vec![("TS001", "Login OK"), ("TS003", "Logout")]);

    workflow
        .handle(Action::AddCustomScenario(NewScenario {
            name: "Expired session".to_string(),
            description: "Session idle for 30 minutes".to_string(),
            expected_result: "User is asked to sign in again".to_string(),
            scenario_type: ScenarioType::EdgeCase,
            related_story: Some("As a user I can log out".to_string()),
        }))
        .await;
    let added = &workflow.state().scenarios()[2];
    assert_eq!(added.id(), "TS004");
    assert_eq!(added.status(), &ScenarioStatus::PendingReview);

    workflow.handle(Action::Approve(0)).await;
    workflow.handle(Action::Approve(2)).await;
    workflow.handle(Action::Reject(1)).await;
    workflow.handle(Action::Next).await;
    assert_eq!(workflow.state().current_step(), Step::CreateTestCases);

    let approved = workflow.export_approved(ExportFormat::Text).unwrap();
    assert_eq!(
        approved,
        "TS001: Login OK\n\
         TS004: Expired session — Session idle for 30 minutes — User is asked to sign in again"
    );
}
