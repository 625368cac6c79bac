//! HTTP client for the sentence analysis endpoint.
//!
//! The endpoint takes the raw text as a `text` query parameter on a GET request
//! and answers with `{ "sentences": [...] }`. There is no authentication, no
//! pagination and no retry.

use async_trait::async_trait;
use reqwest::Client;

use super::model::{AnalysisResponse, ResultSet};
use crate::config::ApiConfig;
use crate::constants::TEXT_QUERY_PARAM;

/// Failures talking to the analysis endpoint.
///
/// These stay internal: the UI collapses all of them into a single generic message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Invalid response: {0}")]
    Parse(String),

    #[error("Client setup failed: {0}")]
    Setup(String),
}

/// Anything that can turn text into per-sentence scores.
#[async_trait]
pub trait SentimentClient: Send + Sync {
    /// The URL requests are sent to, for logging.
    fn endpoint(&self) -> &str;

    /// Analyze `text`, issuing exactly one request.
    async fn analyze(&self, text: &str) -> Result<ResultSet, ClientError>;
}

/// [`SentimentClient`] backed by reqwest.
#[derive(Debug, Clone)]
pub struct HttpSentimentClient {
    http: Client,
    endpoint: String,
}

impl HttpSentimentClient {
    pub fn new(endpoint: impl Into<String>, user_agent: &str) -> Result<Self, ClientError> {
        let http = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| ClientError::Setup(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(api: &ApiConfig) -> Result<Self, ClientError> {
        Self::new(api.endpoint.clone(), &api.user_agent)
    }
}

#[async_trait]
impl SentimentClient for HttpSentimentClient {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn analyze(&self, text: &str) -> Result<ResultSet, ClientError> {
        log::debug!("GET {} ({} chars)", self.endpoint, text.chars().count());

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[(TEXT_QUERY_PARAM, text)])
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(|e| ClientError::Network(e.to_string()))?;
        let parsed: AnalysisResponse = serde_json::from_str(&body).map_err(|e| ClientError::Parse(e.to_string()))?;

        log::debug!("Received {} sentences", parsed.sentences.len());
        Ok(parsed.sentences)
    }
}
