use sentencelens::analysis::{AnalysisError, AnalysisSession, ClientError, RequestState, ResultSet, SentenceResult};

fn results(texts: &[&str]) -> ResultSet {
    texts
        .iter()
        .map(|text| SentenceResult::new(*text).with_sentiment(0.5))
        .collect::<Vec<_>>()
        .into()
}

#[test]
fn test_new_session_is_idle_without_results() {
    let session = AnalysisSession::new();
    assert_eq!(session.state(), &RequestState::Idle);
    assert!(session.results().is_none());
    assert!(session.error().is_none());
}

#[test]
fn test_blank_input_fails_without_loading() {
    for text in ["", "   ", "\n\t \n"] {
        let mut session = AnalysisSession::new();

        assert_eq!(session.begin(text), Err(AnalysisError::EmptyInput));
        assert!(!session.is_loading());
        assert_eq!(session.error(), Some(AnalysisError::EmptyInput));
        assert_eq!(session.error().unwrap().to_string(), "Please enter text.");
    }
}

#[test]
fn test_success_replaces_results_and_clears_error() {
    let mut session = AnalysisSession::new();
    session.begin("").unwrap_err();

    session.begin("Good. Bad.").unwrap();
    assert!(session.is_loading());

    let state = session.complete(Ok(results(&["Good.", "Bad."])));
    assert_eq!(state, &RequestState::Succeeded);
    assert!(session.error().is_none());
    assert_eq!(session.results().map(ResultSet::len), Some(2));
}

#[test]
fn test_failure_keeps_previous_results() {
    let mut session = AnalysisSession::new();
    session.begin("Good.").unwrap();
    session.complete(Ok(results(&["Good."])));

    session.begin("Again.").unwrap();
    session.complete(Err(ClientError::Network("connection refused".to_string())));

    assert!(!session.is_loading());
    assert_eq!(session.error(), Some(AnalysisError::RequestFailed));
    assert_eq!(
        session.error().unwrap().to_string(),
        "Error analyzing, please try again."
    );
    assert_eq!(session.results(), Some(&results(&["Good."])));
}

#[test]
fn test_blank_input_keeps_previous_results() {
    let mut session = AnalysisSession::new();
    session.begin("Good.").unwrap();
    session.complete(Ok(results(&["Good."])));

    session.begin(" ").unwrap_err();
    assert_eq!(session.results().map(ResultSet::len), Some(1));
}

#[test]
fn test_every_client_error_collapses_to_one_message() {
    let errors = [
        ClientError::Network("timeout".to_string()),
        ClientError::Http {
            status: 502,
            body: String::new(),
        },
        ClientError::Parse("missing field `sentences`".to_string()),
    ];

    for error in errors {
        let mut session = AnalysisSession::new();
        session.begin("Good.").unwrap();
        session.complete(Err(error));
        assert_eq!(session.error(), Some(AnalysisError::RequestFailed));
    }
}

#[test]
fn test_overlapping_requests_last_response_wins() {
    let mut session = AnalysisSession::new();
    session.begin("first").unwrap();
    session.begin("second").unwrap();

    // The second request answers first, the first one answers last
    session.complete(Ok(results(&["second"])));
    session.complete(Ok(results(&["first"])));

    assert_eq!(session.results(), Some(&results(&["first"])));
    assert_eq!(session.state(), &RequestState::Succeeded);
}

#[test]
fn test_empty_result_set_is_present_but_empty() {
    let mut session = AnalysisSession::new();
    session.begin("...").unwrap();
    session.complete(Ok(ResultSet::default()));

    assert!(session.results().is_some_and(ResultSet::is_empty));
}
