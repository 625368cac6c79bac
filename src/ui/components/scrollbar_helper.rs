//! Vertical scrollbar for bordered panes.
//!
//! Shared by the results table and the dialogs so that every scrollbar looks
//! and behaves the same.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Scrollbar position plus the split between content and bar.
pub struct ScrollbarHelper {
    state: ScrollbarState,
}

impl Default for ScrollbarHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollbarHelper {
    pub fn new() -> Self {
        Self {
            state: ScrollbarState::new(0),
        }
    }

    /// `position` is the 0-based selected row or scroll offset.
    pub fn update_state(&mut self, total_items: usize, position: usize, viewport_height: usize) {
        self.state = self
            .state
            .content_length(total_items)
            .viewport_content_length(viewport_height)
            .position(position);
    }

    pub fn needs_scrollbar(total_items: usize, available_height: usize) -> bool {
        total_items > available_height
    }

    /// Split a bordered rectangle into content and scrollbar areas.
    ///
    /// `header_rows` are lines inside the border that do not scroll (a table
    /// header, for instance). Returns `(content_area, optional_scrollbar_area)`.
    pub fn calculate_areas(rect: Rect, total_items: usize, header_rows: u16) -> (Rect, Option<Rect>) {
        // Exclude borders and fixed header rows
        let available_height = rect.height.saturating_sub(2 + header_rows) as usize;

        if Self::needs_scrollbar(total_items, available_height) {
            let bar_x = rect.x + rect.width.saturating_sub(1);
            let content = Rect::new(rect.x, rect.y, rect.width.saturating_sub(1), rect.height);
            let bar = Rect::new(bar_x, rect.y + 1 + header_rows, 1, available_height as u16);
            (content, Some(bar))
        } else {
            (rect, None)
        }
    }

    pub fn render(&mut self, f: &mut Frame, scrollbar_area: Option<Rect>) {
        if let Some(area) = scrollbar_area {
            f.render_stateful_widget(Self::widget(), area, &mut self.state);
        }
    }

    /// The scrollbar style used across the application
    pub fn widget() -> Scrollbar<'static> {
        Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("▐")
            .style(Style::default().fg(Color::DarkGray))
            .thumb_style(Style::default().fg(Color::Gray))
    }
}
