use crate::support::{good_bad, render_lines, settle, ScriptedClient};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use sentencelens::analysis::{AnalysisError, ClientError, RequestState, SentenceResult};
use sentencelens::config::Config;
use sentencelens::logger::Logger;
use sentencelens::ui::app_component::{AppComponent, AppState};
use sentencelens::ui::core::{DialogType, EventType, Focus};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

fn config_in(dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.export.directory = dir.path().display().to_string();
    config
}

fn app_with(client: Arc<ScriptedClient>, dir: &TempDir) -> AppComponent {
    AppComponent::new(&config_in(dir), client, Logger::new())
}

fn key(code: KeyCode) -> EventType {
    EventType::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(c: char) -> EventType {
    EventType::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn contains(lines: &[String], needle: &str) -> bool {
    lines.iter().any(|line| line.contains(needle))
}

#[test]
fn test_app_state_default() {
    let state = AppState::default();
    assert!(state.text.is_empty());
    assert_eq!(state.session.state(), &RequestState::Idle);
    assert_eq!(state.focus, Focus::Input);
    assert!(state.last_export.is_none());
}

#[tokio::test]
async fn test_good_bad_end_to_end() {
    let dir = TempDir::new().unwrap();
    let client = Arc::new(ScriptedClient::new(vec![Ok(good_bad())]));
    let mut app = app_with(client.clone(), &dir);

    app.set_text("Good. Bad.");
    app.handle_event(ctrl('r'));
    assert!(app.state().session.is_loading());

    let lines = render_lines(&mut app, 100, 40);
    assert!(contains(&lines, "Analyzing..."));

    settle(&mut app).await;

    assert_eq!(client.requests(), vec!["Good. Bad.".to_string()]);
    assert_eq!(app.state().session.state(), &RequestState::Succeeded);

    let rows = app.results_table().rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].cells(), ["Good.", "0.80", "0.80", "0.50"]);
    assert_eq!(rows[1].cells(), ["Bad.", "-0.70", "0.70", "N/A"]);

    let lines = render_lines(&mut app, 100, 40);
    assert!(contains(&lines, "Analysis Results"));
    assert!(contains(&lines, "Aggregated Salience"));
    let bad_row = lines
        .iter()
        .find(|line| line.contains("Bad.") && line.contains("-0.70"))
        .expect("second sentence row is rendered");
    assert!(bad_row.contains("N/A"));
}

#[tokio::test]
async fn test_blank_input_makes_no_call() {
    let dir = TempDir::new().unwrap();
    let client = Arc::new(ScriptedClient::new(vec![Ok(good_bad())]));
    let mut app = app_with(client.clone(), &dir);

    app.set_text("  \n ");
    app.handle_event(ctrl('r'));

    assert_eq!(app.state().session.error(), Some(AnalysisError::EmptyInput));
    assert_eq!(app.active_task_count(), 0);
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(client.requests().is_empty());

    let lines = render_lines(&mut app, 100, 40);
    assert!(contains(&lines, "Please enter text."));
}

#[tokio::test]
async fn test_failure_keeps_previous_table() {
    let dir = TempDir::new().unwrap();
    let client = Arc::new(ScriptedClient::new(vec![Ok(good_bad())]));
    let mut app = app_with(client.clone(), &dir);

    app.set_text("Good. Bad.");
    app.handle_event(ctrl('r'));
    settle(&mut app).await;

    client.push(Err(ClientError::Network("connection reset".to_string())));
    app.set_text("Something else.");
    app.handle_event(ctrl('r'));
    settle(&mut app).await;

    assert_eq!(app.state().session.error(), Some(AnalysisError::RequestFailed));
    assert_eq!(app.results_table().rows().len(), 2);
    assert_eq!(app.state().session.results(), Some(&good_bad()));

    let lines = render_lines(&mut app, 100, 40);
    assert!(contains(&lines, "Error analyzing, please try again."));
    assert!(!contains(&lines, "connection reset"));
    assert!(contains(&lines, "Good."));
}

#[tokio::test]
async fn test_analyze_is_ignored_while_loading() {
    let dir = TempDir::new().unwrap();
    let client = Arc::new(ScriptedClient::new(vec![Ok(good_bad()), Ok(good_bad())]).with_delay(Duration::from_millis(50)));
    let mut app = app_with(client.clone(), &dir);

    app.set_text("Good. Bad.");
    app.handle_event(ctrl('r'));
    app.handle_event(ctrl('r'));
    settle(&mut app).await;

    assert_eq!(client.requests().len(), 1);
}

#[tokio::test]
async fn test_clear_resets_text_only() {
    let dir = TempDir::new().unwrap();
    let client = Arc::new(ScriptedClient::new(vec![Ok(good_bad())]));
    let mut app = app_with(client, &dir);

    app.set_text("Good. Bad.");
    app.handle_event(ctrl('r'));
    settle(&mut app).await;

    app.handle_event(ctrl('l'));

    assert!(app.state().text.is_empty());
    assert!(app.input().text().is_empty());
    assert_eq!(app.state().session.state(), &RequestState::Succeeded);
    assert_eq!(app.results_table().rows().len(), 2);
}

#[test]
fn test_typing_updates_owned_text() {
    let dir = TempDir::new().unwrap();
    let mut app = app_with(Arc::new(ScriptedClient::new(Vec::new())), &dir);

    for c in "Hi.".chars() {
        app.handle_event(key(KeyCode::Char(c)));
    }
    app.handle_event(EventType::Paste(" Bye.".to_string()));

    assert_eq!(app.state().text, "Hi. Bye.");
}

#[test]
fn test_results_hidden_before_first_analysis() {
    let dir = TempDir::new().unwrap();
    let mut app = app_with(Arc::new(ScriptedClient::new(Vec::new())), &dir);

    let lines = render_lines(&mut app, 100, 40);
    assert!(contains(&lines, "Sentence Sentiment Analysis with Aggregated Salience"));
    assert!(contains(&lines, "Enter text for analysis"));
    assert!(!contains(&lines, "Analysis Results"));
}

#[tokio::test]
async fn test_empty_result_set_shows_message() {
    let dir = TempDir::new().unwrap();
    let client = Arc::new(ScriptedClient::new(vec![Ok(Vec::<SentenceResult>::new().into())]));
    let mut app = app_with(client, &dir);

    app.set_text("...");
    app.handle_event(ctrl('r'));
    settle(&mut app).await;

    let lines = render_lines(&mut app, 100, 40);
    assert!(contains(&lines, "Analysis Results"));
    assert!(contains(&lines, "No sentences found."));
}

#[test]
fn test_export_without_results_is_noop() {
    let dir = TempDir::new().unwrap();
    let mut app = app_with(Arc::new(ScriptedClient::new(Vec::new())), &dir);

    app.handle_event(ctrl('s'));
    app.handle_event(ctrl('x'));

    assert!(app.dialog_type().is_none());
    assert!(app.state().last_export.is_none());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_export_after_analysis_writes_files() {
    let dir = TempDir::new().unwrap();
    let client = Arc::new(ScriptedClient::new(vec![Ok(good_bad())]));
    let mut app = app_with(client, &dir);

    app.set_text("Good. Bad.");
    app.handle_event(ctrl('r'));
    settle(&mut app).await;

    app.handle_event(ctrl('s'));
    let csv_path = dir.path().join("sentence_analysis.csv");
    assert!(csv_path.exists());
    match app.dialog_type() {
        Some(DialogType::Info(message)) => assert!(message.contains("sentence_analysis.csv")),
        other => panic!("expected an info dialog, got {other:?}"),
    }

    // Any key dismisses the info dialog
    app.handle_event(key(KeyCode::Enter));
    assert!(app.dialog_type().is_none());

    // Export keys also work from the results panel
    app.handle_event(key(KeyCode::Tab));
    app.handle_event(key(KeyCode::Char('x')));
    assert!(dir.path().join("sentence_analysis.xlsx").exists());

    let content = std::fs::read_to_string(csv_path).unwrap();
    assert!(content.contains("Bad.,-0.70,0.70,N/A"));
}

#[tokio::test]
async fn test_results_focus_navigation_and_quit() {
    let dir = TempDir::new().unwrap();
    let client = Arc::new(ScriptedClient::new(vec![Ok(good_bad())]));
    let mut app = app_with(client, &dir);

    app.set_text("Good. Bad.");
    app.handle_event(ctrl('r'));
    settle(&mut app).await;

    app.handle_event(key(KeyCode::Tab));
    assert_eq!(app.state().focus, Focus::Results);

    app.handle_event(key(KeyCode::Char('j')));
    assert_eq!(app.results_table().selected(), Some(1));

    // Letters are commands here, not text
    assert_eq!(app.state().text, "Good. Bad.");

    app.handle_event(key(KeyCode::Char('i')));
    assert_eq!(app.state().focus, Focus::Input);
    app.handle_event(key(KeyCode::Char('q')));
    assert!(!app.should_quit());
    assert_eq!(app.state().text, "Good. Bad.q");

    app.handle_event(key(KeyCode::Esc));
    app.handle_event(key(KeyCode::Char('q')));
    assert!(app.should_quit());
}

#[test]
fn test_focus_stays_on_input_until_results_exist() {
    let dir = TempDir::new().unwrap();
    let mut app = app_with(Arc::new(ScriptedClient::new(Vec::new())), &dir);

    for c in "Hello".chars() {
        app.handle_event(key(KeyCode::Char(c)));
    }
    app.handle_event(key(KeyCode::Esc));
    assert_eq!(app.state().focus, Focus::Input);
    app.handle_event(key(KeyCode::Tab));
    assert_eq!(app.state().focus, Focus::Input);

    // Still text, not a results command
    app.handle_event(key(KeyCode::Char('q')));
    app.handle_event(key(KeyCode::Char('c')));
    assert!(!app.should_quit());
    assert_eq!(app.state().text, "Helloqc");
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_help_and_logs_dialogs() {
    let dir = TempDir::new().unwrap();
    let mut app = app_with(Arc::new(ScriptedClient::new(vec![Ok(good_bad())])), &dir);

    app.set_text("Good. Bad.");
    app.handle_event(ctrl('r'));
    settle(&mut app).await;

    app.handle_event(key(KeyCode::F(1)));
    assert_eq!(app.dialog_type(), Some(&DialogType::Help));
    let lines = render_lines(&mut app, 100, 40);
    assert!(contains(&lines, "Ctrl+R"));

    app.handle_event(key(KeyCode::Esc));
    assert!(app.dialog_type().is_none());

    app.handle_event(key(KeyCode::Esc));
    app.handle_event(key(KeyCode::Char('G')));
    assert_eq!(app.dialog_type(), Some(&DialogType::Logs));
}

#[test]
fn test_ctrl_c_quits() {
    let dir = TempDir::new().unwrap();
    let mut app = app_with(Arc::new(ScriptedClient::new(Vec::new())), &dir);

    app.handle_event(ctrl('c'));
    assert!(app.should_quit());
}
