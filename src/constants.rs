//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

/// Application name, used for config and data directories
pub const APP_NAME: &str = "sentencelens";

// Remote endpoint
pub const DEFAULT_ENDPOINT: &str =
    "https://us-central1-automatedcontenthub.cloudfunctions.net/analyzeSentencesWithSalience";
pub const ENDPOINT_ENV_VAR: &str = "SENTENCELENS_ENDPOINT";
pub const TEXT_QUERY_PARAM: &str = "text";
pub const DEFAULT_USER_AGENT: &str = concat!("sentencelens/", env!("CARGO_PKG_VERSION"));

// User-visible analysis errors
pub const MSG_EMPTY_INPUT: &str = "Please enter text.";
pub const MSG_REQUEST_FAILED: &str = "Error analyzing, please try again.";

// Result columns
pub const NOT_AVAILABLE: &str = "N/A";
pub const COLUMN_SENTENCE: &str = "Sentence";
pub const COLUMN_SENTIMENT: &str = "Sentiment Score";
pub const COLUMN_MAGNITUDE: &str = "Magnitude";
pub const COLUMN_SALIENCE: &str = "Aggregated Salience";
pub const RESULT_COLUMNS: [&str; 4] = [COLUMN_SENTENCE, COLUMN_SENTIMENT, COLUMN_MAGNITUDE, COLUMN_SALIENCE];

// Export
pub const SHEET_NAME: &str = "Sentiment Analysis";
pub const XLSX_FILE_NAME: &str = "sentence_analysis.xlsx";
pub const CSV_FILE_NAME: &str = "sentence_analysis.csv";
pub const XLSX_MIME_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8;";

// UI text
pub const APP_TITLE: &str = "Sentence Sentiment Analysis with Aggregated Salience";
pub const INPUT_TITLE: &str = "Text";
pub const INPUT_PLACEHOLDER: &str = "Enter text for analysis";
pub const RESULTS_TITLE: &str = "Analysis Results";
pub const RESULTS_EMPTY: &str = "No sentences found.";
pub const ANALYZING_LABEL: &str = "Analyzing...";
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = "Logs - Press 'Esc', 'G' or 'q' to close";

// UI Layout Constants
/// Default number of text rows in the input area
pub const INPUT_HEIGHT_DEFAULT: u16 = 15;
/// Minimum number of text rows in the input area
pub const INPUT_HEIGHT_MIN: u16 = 3;
/// Maximum number of text rows in the input area
pub const INPUT_HEIGHT_MAX: u16 = 40;

/// Upper bound on in-memory log lines kept for the logs dialog
pub const LOG_BUFFER_CAPACITY: usize = 2000;
