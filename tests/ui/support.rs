use async_trait::async_trait;
use ratatui::{backend::TestBackend, Terminal};
use sentencelens::analysis::{ClientError, ResultSet, SentenceResult, SentimentClient};
use sentencelens::ui::core::Component;
use sentencelens::ui::AppComponent;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

/// Client that answers from a script instead of the network
pub struct ScriptedClient {
    responses: Mutex<VecDeque<Result<ResultSet, ClientError>>>,
    requests: Mutex<Vec<String>>,
    delay: Duration,
}

impl ScriptedClient {
    pub fn new(responses: Vec<Result<ResultSet, ClientError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn push(&self, response: Result<ResultSet, ClientError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl SentimentClient for ScriptedClient {
    fn endpoint(&self) -> &str {
        "scripted://analyze"
    }

    async fn analyze(&self, text: &str) -> Result<ResultSet, ClientError> {
        self.requests.lock().unwrap().push(text.to_string());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Network("no scripted response".to_string())))
    }
}

/// The two-sentence response used across the UI tests; the second sentence has no salience
pub fn good_bad() -> ResultSet {
    vec![
        SentenceResult::new("Good.")
            .with_sentiment(0.8)
            .with_magnitude(0.8)
            .with_aggregated_salience(0.5),
        SentenceResult::new("Bad.").with_sentiment(-0.7).with_magnitude(0.7),
    ]
    .into()
}

/// Apply background responses until no request is in flight
pub async fn settle(app: &mut AppComponent) {
    for _ in 0..300 {
        for action in app.process_background_actions() {
            app.dispatch(action);
        }
        if !app.state().session.is_loading() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("analysis did not finish");
}

/// Render the app into an in-memory terminal and return its lines
pub fn render_lines(app: &mut AppComponent, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();

    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect::<String>())
        .collect()
}
