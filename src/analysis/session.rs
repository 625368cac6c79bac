//! Request state and result ownership for the analyze action.
//!
//! Transitions:
//!
//! | from        | event                 | to                      | results        |
//! |-------------|-----------------------|-------------------------|----------------|
//! | any         | begin, blank text     | `Failed(EmptyInput)`    | unchanged      |
//! | any         | begin, non-blank text | `Loading`               | unchanged      |
//! | any         | complete(Ok)          | `Succeeded`             | replaced       |
//! | any         | complete(Err)         | `Failed(RequestFailed)` | unchanged      |
//!
//! `begin` does not reject a second request while one is pending, and `complete`
//! applies every response in arrival order, so the last response to arrive wins.

use super::client::ClientError;
use super::model::ResultSet;
use crate::constants::{MSG_EMPTY_INPUT, MSG_REQUEST_FAILED};

/// Errors shown to the user. The underlying cause is never surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    #[error("{}", MSG_EMPTY_INPUT)]
    EmptyInput,

    #[error("{}", MSG_REQUEST_FAILED)]
    RequestFailed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed(AnalysisError),
}

#[derive(Debug, Clone, Default)]
pub struct AnalysisSession {
    state: RequestState,
    results: Option<ResultSet>,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// `None` until the first successful analysis.
    pub fn results(&self) -> Option<&ResultSet> {
        self.results.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.state == RequestState::Loading
    }

    pub fn error(&self) -> Option<AnalysisError> {
        match self.state {
            RequestState::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Start an analysis of `text`.
    ///
    /// Returns `Err(EmptyInput)` for blank text, in which case no request may be sent.
    pub fn begin(&mut self, text: &str) -> Result<(), AnalysisError> {
        if text.trim().is_empty() {
            self.state = RequestState::Failed(AnalysisError::EmptyInput);
            return Err(AnalysisError::EmptyInput);
        }

        self.state = RequestState::Loading;
        Ok(())
    }

    /// Apply the outcome of a request.
    pub fn complete(&mut self, outcome: Result<ResultSet, ClientError>) -> &RequestState {
        match outcome {
            Ok(results) => {
                self.results = Some(results);
                self.state = RequestState::Succeeded;
            }
            Err(_) => {
                // failure never touches the previous results
                self.state = RequestState::Failed(AnalysisError::RequestFailed);
            }
        }
        &self.state
    }
}
