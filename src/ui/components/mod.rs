//! Reusable UI components

pub mod dialog_component;
pub mod dialogs;
pub mod input_component;
pub mod results_table_component;
pub mod scrollbar_helper;
pub mod status_bar;

pub use dialog_component::DialogComponent;
pub use input_component::InputComponent;
pub use results_table_component::ResultsTableComponent;
pub use scrollbar_helper::ScrollbarHelper;
pub use status_bar::StatusBar;
