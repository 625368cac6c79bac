//! Layout management and calculations

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Screen areas of the main view, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainLayout {
    pub title: Rect,
    pub input: Rect,
    pub feedback: Rect,
    pub results: Rect,
    pub status: Rect,
}

pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into title, input box, feedback line, results and status bar.
    ///
    /// The input box gets `input_height` text rows plus borders when space allows;
    /// the results pane takes whatever is left.
    #[must_use]
    pub fn main_layout(area: Rect, input_height: u16) -> MainLayout {
        // title, feedback and status take one line each
        let available = area.height.saturating_sub(3);
        let input_box_height = input_height.saturating_add(2).min(available);

        let [title, input, feedback, results, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(input_box_height),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        MainLayout {
            title,
            input,
            feedback,
            results,
            status,
        }
    }

    /// Popup sized as a percentage of `area` in both directions
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        Self::center(area, Constraint::Percentage(percent_x), Constraint::Percentage(percent_y))
    }

    /// Popup with a percentage width and a fixed number of lines
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, area: Rect) -> Rect {
        Self::center(area, Constraint::Percentage(percent_x), Constraint::Length(height_lines))
    }

    fn center(area: Rect, width: Constraint, height: Constraint) -> Rect {
        let [row] = Layout::vertical([height]).flex(Flex::Center).areas(area);
        let [popup] = Layout::horizontal([width]).flex(Flex::Center).areas(row);
        popup
    }

    /// Help and logs panels grow a little on large screens
    #[must_use]
    pub fn help_panel_dimensions(screen_width: u16, screen_height: u16) -> (u16, u16) {
        let width = if screen_width < 80 { 90 } else { 75 };
        let height = if screen_height < 30 { 85 } else { 70 };
        (width, height)
    }
}
