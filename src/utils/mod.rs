//! Utility modules for the SentenceLens application.
//!
//! This module contains small helpers that are used by more than one layer of
//! the application.
//!
//! # Available Utilities
//!
//! - [`format`] - Fixed-point formatting for sentiment, magnitude and salience scores

pub mod format;
