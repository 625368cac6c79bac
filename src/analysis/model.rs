//! Data structures exchanged with the analysis endpoint.

use serde::{Deserialize, Serialize};

/// Scores for a single sentence, in the order the service returned them.
///
/// Every numeric field is optional: the service omits (or nulls) scores it could
/// not compute, and those render as `N/A`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceResult {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magnitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregated_salience: Option<f64>,
}

impl SentenceResult {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sentiment: None,
            magnitude: None,
            aggregated_salience: None,
        }
    }

    #[must_use]
    pub fn with_sentiment(mut self, sentiment: f64) -> Self {
        self.sentiment = Some(sentiment);
        self
    }

    #[must_use]
    pub fn with_magnitude(mut self, magnitude: f64) -> Self {
        self.magnitude = Some(magnitude);
        self
    }

    #[must_use]
    pub fn with_aggregated_salience(mut self, salience: f64) -> Self {
        self.aggregated_salience = Some(salience);
        self
    }
}

/// Ordered results of one successful analysis.
///
/// A new analysis replaces the whole set; sets are never merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet {
    sentences: Vec<SentenceResult>,
}

impl ResultSet {
    pub fn new(sentences: Vec<SentenceResult>) -> Self {
        Self { sentences }
    }

    pub fn sentences(&self) -> &[SentenceResult] {
        &self.sentences
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SentenceResult> {
        self.sentences.iter()
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

impl From<Vec<SentenceResult>> for ResultSet {
    fn from(sentences: Vec<SentenceResult>) -> Self {
        Self::new(sentences)
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a SentenceResult;
    type IntoIter = std::slice::Iter<'a, SentenceResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Response body of the analysis endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisResponse {
    pub sentences: ResultSet,
}
