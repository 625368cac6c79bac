//! Status bar component

use crate::ui::core::Focus;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// Bottom line with the shortcuts that apply to the focused panel
pub struct StatusBar;

impl StatusBar {
    pub fn hints(focus: Focus, loading: bool) -> &'static str {
        match (focus, loading) {
            (_, true) => "Waiting for analysis • Tab: switch focus • F1: help • Ctrl+C: quit",
            (Focus::Input, false) => {
                "Ctrl+R: analyze • Ctrl+L: clear • Ctrl+X/Ctrl+S: export • Tab: results • F1: help • Ctrl+C: quit"
            }
            (Focus::Results, false) => "j/k: scroll • a: analyze • x/c: export • i: edit text • ?: help • q: quit",
        }
    }

    pub fn render(f: &mut Frame, area: Rect, focus: Focus, loading: bool) {
        let color = if loading { Color::Yellow } else { Color::Gray };

        let status_bar = Paragraph::new(Self::hints(focus, loading))
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(color));

        f.render_widget(status_bar, area);
    }
}
