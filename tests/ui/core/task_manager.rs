use crate::support::{good_bad, ScriptedClient};
use sentencelens::analysis::ClientError;
use sentencelens::ui::core::{Action, TaskManager};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_success_is_reported_with_request_id() {
    let (mut manager, mut rx) = TaskManager::new();
    let client = Arc::new(ScriptedClient::new(vec![Ok(good_bad())]));

    let id = manager.spawn_analysis(client.clone(), "Good. Bad.".to_string());

    match rx.recv().await {
        Some(Action::AnalysisSucceeded { request_id, results }) => {
            assert_eq!(request_id, id);
            assert_eq!(results, good_bad());
        }
        other => panic!("unexpected action: {other:?}"),
    }
    assert_eq!(client.requests(), vec!["Good. Bad.".to_string()]);
}

#[tokio::test]
async fn test_failure_is_reported() {
    let (mut manager, mut rx) = TaskManager::new();
    let client = Arc::new(ScriptedClient::new(vec![Err(ClientError::Parse("bad json".to_string()))]));

    let id = manager.spawn_analysis(client, "Good.".to_string());

    match rx.recv().await {
        Some(Action::AnalysisFailed { request_id, error }) => {
            assert_eq!(request_id, id);
            assert_eq!(error, ClientError::Parse("bad json".to_string()));
        }
        other => panic!("unexpected action: {other:?}"),
    }
}

#[tokio::test]
async fn test_task_ids_increase_and_finished_tasks_are_cleaned_up() {
    let (mut manager, mut rx) = TaskManager::new();
    let client = Arc::new(ScriptedClient::new(vec![Ok(good_bad()), Ok(good_bad())]));

    let first = manager.spawn_analysis(client.clone(), "one".to_string());
    let second = manager.spawn_analysis(client, "two".to_string());
    assert!(second > first);
    assert_eq!(manager.task_count(), 2);

    rx.recv().await.unwrap();
    rx.recv().await.unwrap();

    // The send happens just before the task finishes
    let mut cleaned = Vec::new();
    for _ in 0..100 {
        cleaned.extend(manager.cleanup_finished_tasks());
        if manager.task_count() == 0 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    assert_eq!(manager.task_count(), 0);
    assert_eq!(cleaned.len(), 2);
    assert!(cleaned.iter().all(|task| task.description.contains("scripted://analyze")));
}

#[tokio::test]
async fn test_cancel_all_tasks() {
    let (mut manager, mut rx) = TaskManager::new();
    let client = Arc::new(ScriptedClient::new(vec![Ok(good_bad())]).with_delay(Duration::from_secs(5)));

    manager.spawn_analysis(client, "slow".to_string());
    manager.cancel_all_tasks();
    assert_eq!(manager.task_count(), 0);

    drop(manager);
    // Aborted tasks never report back, and dropping the sender closes the channel
    assert!(rx.recv().await.is_none());
}
