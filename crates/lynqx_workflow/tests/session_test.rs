//! Tests for per-session isolation.

mod test_utils;

use lynqx_core::Step;
use lynqx_error::ValidationErrorKind;
use lynqx_workflow::{Action, SessionId, SessionRegistry};
use std::sync::Arc;
use test_utils::{MockDriver, SAMPLE_OUTPUT, shared};

#[tokio::test]
async fn test_sessions_do_not_share_state() {
    let (_, driver) = shared(MockDriver::new_success(SAMPLE_OUTPUT));
    let registry = SessionRegistry::new(driver);

    let first = registry.create().await;
    let second = registry.create().await;
    assert_ne!(first, second);
    assert_eq!(registry.len().await, 2);

    registry
        .dispatch(first, Action::SubmitStories("Story".to_string()))
        .await
        .unwrap();

    let first_step = registry.get(first).await.unwrap().lock().await.state().current_step();
    let second_step = registry.get(second).await.unwrap().lock().await.state().current_step();
    assert_eq!(first_step, Step::Generate);
    assert_eq!(second_step, Step::Input);
}

#[tokio::test]
async fn test_dispatch_to_unknown_session_fails() {
    let (_, driver) = shared(MockDriver::new_success(SAMPLE_OUTPUT));
    let registry = SessionRegistry::new(driver);
    let missing = SessionId::new();

    let err = registry.dispatch(missing, Action::Next).await.unwrap_err();

    assert_eq!(
        err.kind(),
        &ValidationErrorKind::SessionNotFound(missing.to_string())
    );
}

#[tokio::test]
async fn test_destroy_removes_session() {
    let (_, driver) = shared(MockDriver::new_success(SAMPLE_OUTPUT));
    let registry = SessionRegistry::new(driver);
    let id = registry.create().await;

    assert!(registry.destroy(id).await);
    assert!(!registry.destroy(id).await);
    assert!(registry.is_empty().await);
    assert!(registry.get(id).await.is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_actions_on_one_session_are_serialized() {
    let (mock, driver) = shared(MockDriver::new_success(SAMPLE_OUTPUT));
    let registry = Arc::new(SessionRegistry::new(driver));
    let id = registry.create().await;
    registry
        .dispatch(id, Action::SubmitStories("Story".to_string()))
        .await
        .unwrap();

    let mut tasks = Vec::new();
    for _ in 0..8 {
        let registry = Arc::clone(&registry);
        tasks.push(tokio::spawn(async move {
            registry.dispatch(id, Action::GenerateScenarios).await
        }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    assert_eq!(mock.call_count(), 8);
    let handle = registry.get(id).await.unwrap();
    let workflow = handle.lock().await;
    assert_eq!(workflow.state().raw_generated_text(), SAMPLE_OUTPUT);
    assert_eq!(workflow.state().current_step(), Step::Generate);
}
