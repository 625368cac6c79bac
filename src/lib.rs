//! SentenceLens - sentence-level sentiment analysis in the terminal
//!
//! Sends text to a remote analysis service, shows one row per sentence with its
//! sentiment score, magnitude and aggregated salience, and exports the same rows
//! to XLSX or CSV.
//!
//! # Modules
//!
//! * [`analysis`] - Remote client, result model and request state machine
//! * [`report`] - Formatted rows shared by the table and the exporters
//! * [`export`] - XLSX and CSV writers
//! * [`config`] - Application configuration management
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Number formatting helpers

/// Sentence analysis client, data model and request lifecycle
pub mod analysis;

/// Command line arguments
pub mod cli;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Spreadsheet and CSV export of analysis results
pub mod export;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging setup and the in-memory log buffer
pub mod logger;

/// Table rows derived from analysis results
pub mod report;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for formatting
pub mod utils;
