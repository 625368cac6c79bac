use super::task_manager::TaskId;
use crate::analysis::{ClientError, ResultSet};
use crate::export::ExportFormat;

/// Which panel receives plain key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
    PageUp,
    PageDown,
    Top,
    Bottom,
}

#[derive(Debug, Clone)]
pub enum Action {
    // Input (the editor requests changes, the app owns the text)
    TextChanged(String),
    ClearInput,
    SetFocus(Focus),
    ToggleFocus,

    // Analysis
    Analyze,
    AnalysisSucceeded {
        request_id: TaskId,
        results: ResultSet,
    },
    AnalysisFailed {
        request_id: TaskId,
        error: ClientError,
    },

    // Results
    ScrollResults(ScrollDirection),
    Export(ExportFormat),

    // UI operations
    ShowDialog(DialogType),
    HideDialog,
    CycleIconTheme,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogType {
    Error(String),
    Info(String),
    Help,
    Logs,
}
