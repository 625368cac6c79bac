//! Display rows derived from a [`ResultSet`].
//!
//! The results table, the XLSX exporter and the CSV exporter all render from
//! [`report_rows`], so the three always agree cell for cell.

use crate::analysis::{ResultSet, SentenceResult};
use crate::constants::RESULT_COLUMNS;
use crate::utils::format::format_score;

/// One formatted row: `Sentence | Sentiment Score | Magnitude | Aggregated Salience`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub sentence: String,
    pub sentiment: String,
    pub magnitude: String,
    pub aggregated_salience: String,
}

impl ReportRow {
    pub fn header() -> [&'static str; 4] {
        RESULT_COLUMNS
    }

    pub fn cells(&self) -> [&str; 4] {
        [
            &self.sentence,
            &self.sentiment,
            &self.magnitude,
            &self.aggregated_salience,
        ]
    }
}

impl From<&SentenceResult> for ReportRow {
    fn from(result: &SentenceResult) -> Self {
        Self {
            sentence: result.text.clone(),
            sentiment: format_score(result.sentiment),
            magnitude: format_score(result.magnitude),
            aggregated_salience: format_score(result.aggregated_salience),
        }
    }
}

/// Rows in received order, no sorting or filtering.
pub fn report_rows(results: &ResultSet) -> Vec<ReportRow> {
    results.iter().map(ReportRow::from).collect()
}
