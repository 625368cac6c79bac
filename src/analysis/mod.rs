//! Sentence analysis: the remote client, its data model, and the request state machine.

pub mod client;
pub mod model;
pub mod session;

pub use client::{ClientError, HttpSentimentClient, SentimentClient};
pub use model::{AnalysisResponse, ResultSet, SentenceResult};
pub use session::{AnalysisError, AnalysisSession, RequestState};
