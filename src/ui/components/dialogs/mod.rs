//! Popup rendering for info, error, help and log dialogs.

pub mod scroll_behavior;
pub mod system_dialogs;

pub use scroll_behavior::DialogScroll;
