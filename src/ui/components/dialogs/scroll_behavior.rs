use crate::ui::core::ScrollDirection;
use ratatui::widgets::ScrollbarState;

/// Lines moved by PageUp/PageDown inside dialogs
const PAGE_SIZE: usize = 10;

/// Scroll offset of a dialog body, clamped when rendered
#[derive(Debug, Default)]
pub struct DialogScroll {
    pub offset: usize,
    pub state: ScrollbarState,
}

impl DialogScroll {
    pub fn apply(&mut self, direction: ScrollDirection) {
        self.offset = match direction {
            ScrollDirection::Up => self.offset.saturating_sub(1),
            ScrollDirection::Down => self.offset.saturating_add(1),
            ScrollDirection::PageUp => self.offset.saturating_sub(PAGE_SIZE),
            ScrollDirection::PageDown => self.offset.saturating_add(PAGE_SIZE),
            ScrollDirection::Top => 0,
            ScrollDirection::Bottom => usize::MAX,
        };
        self.state = self.state.position(self.offset);
    }

    pub fn reset(&mut self) {
        self.offset = 0;
        self.state = ScrollbarState::new(0);
    }

    /// Pick the window of `lines` to show in `visible_height` rows and sync the
    /// scrollbar. The stored offset is pulled back to the last valid position.
    pub fn visible<'a>(&mut self, lines: &[&'a str], visible_height: usize) -> Vec<&'a str> {
        let max_scroll = lines.len().saturating_sub(visible_height);
        self.offset = self.offset.min(max_scroll);

        self.state = self
            .state
            .content_length(lines.len())
            .viewport_content_length(visible_height)
            .position(self.offset);

        lines.iter().skip(self.offset).take(visible_height).copied().collect()
    }
}
