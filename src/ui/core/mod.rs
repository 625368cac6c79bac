//! Core UI functionality for the SentenceLens application.
//!
//! This module contains the fundamental building blocks for the user interface:
//! event handling, the action vocabulary, the component abstraction, and
//! background request management.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Terminal event polling and tick generation
//! - [`task_manager`] - Background analysis requests and their result channel
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait and turn key presses into actions
//! 2. **Actions** flow through the component hierarchy, then to the app for business logic
//! 3. **Background tasks** report back by sending actions over a channel, drained on each tick

// Core UI modules
pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

// Re-export core types for easier access from other modules
pub use actions::{Action, DialogType, Focus, ScrollDirection};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};
