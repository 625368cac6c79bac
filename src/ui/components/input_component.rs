//! Multi-line text editor for the analysis input.
//!
//! The editor keeps a working copy of the text so it can move the cursor, but
//! the app owns the value: every edit is reported as [`Action::TextChanged`]
//! carrying the full new text, and the app pushes its value back with
//! [`InputComponent::set_text`].

use crate::constants::{INPUT_PLACEHOLDER, INPUT_TITLE};
use crate::icons::IconService;
use crate::ui::core::{Action, Component, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct InputComponent {
    text: String,
    /// Cursor position in chars, `0..=text.chars().count()`
    cursor: usize,
    scroll_row: u16,
    scroll_col: u16,
    focused: bool,
    pub icons: IconService,
}

impl Default for InputComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl InputComponent {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            scroll_row: 0,
            scroll_col: 0,
            focused: true,
            icons: IconService::default(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the text from outside, keeping the cursor in range
    pub fn set_text(&mut self, text: &str) {
        if self.text != text {
            self.text = text.to_string();
            self.cursor = self.char_count();
        }
    }

    /// Request an empty input
    pub fn clear(&mut self) -> Action {
        self.set_text("");
        Action::TextChanged(String::new())
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(index, _)| index)
    }

    /// Cursor as (row, column), both counted in chars
    fn cursor_row_col(&self) -> (usize, usize) {
        let before = &self.text[..self.byte_index(self.cursor)];
        let row = before.matches('\n').count();
        let col = before.rsplit('\n').next().map_or(0, |line| line.chars().count());
        (row, col)
    }

    /// Char index of the start of `row`, and that row's length
    fn row_bounds(&self, row: usize) -> (usize, usize) {
        let mut start = 0;
        for (index, line) in self.text.split('\n').enumerate() {
            let len = line.chars().count();
            if index == row {
                return (start, len);
            }
            start += len + 1;
        }
        (self.char_count(), 0)
    }

    fn insert_str(&mut self, s: &str) -> Action {
        let index = self.byte_index(self.cursor);
        self.text.insert_str(index, s);
        self.cursor += s.chars().count();
        Action::TextChanged(self.text.clone())
    }

    fn delete_before_cursor(&mut self) -> Action {
        if self.cursor == 0 {
            return Action::None;
        }
        self.cursor -= 1;
        let index = self.byte_index(self.cursor);
        self.text.remove(index);
        Action::TextChanged(self.text.clone())
    }

    fn delete_at_cursor(&mut self) -> Action {
        if self.cursor >= self.char_count() {
            return Action::None;
        }
        let index = self.byte_index(self.cursor);
        self.text.remove(index);
        Action::TextChanged(self.text.clone())
    }

    fn move_vertical(&mut self, down: bool) {
        let (row, col) = self.cursor_row_col();
        let last_row = self.text.matches('\n').count();
        let target = match (down, row) {
            (false, 0) => return,
            (false, row) => row - 1,
            (true, row) if row >= last_row => return,
            (true, row) => row + 1,
        };
        let (start, len) = self.row_bounds(target);
        self.cursor = start + col.min(len);
    }

    /// Keep the cursor inside the visible text area
    fn follow_cursor(&mut self, width: u16, height: u16) {
        let (row, col) = self.cursor_row_col();
        let (row, col) = (row as u16, col as u16);

        if row < self.scroll_row {
            self.scroll_row = row;
        } else if height > 0 && row >= self.scroll_row + height {
            self.scroll_row = row + 1 - height;
        }

        if col < self.scroll_col {
            self.scroll_col = col;
        } else if width > 0 && col >= self.scroll_col + width {
            self.scroll_col = col + 1 - width;
        }
    }
}

impl Component for InputComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // Windows reports AltGr characters as Ctrl+Alt
        let alt_gr = key.modifiers.contains(KeyModifiers::CONTROL | KeyModifiers::ALT);
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
            && !(alt_gr && matches!(key.code, KeyCode::Char(_)))
        {
            return Action::None;
        }

        match key.code {
            KeyCode::Char(c) => self.insert_str(c.encode_utf8(&mut [0; 4])),
            KeyCode::Enter => self.insert_str("\n"),
            KeyCode::Tab => Action::ToggleFocus,
            KeyCode::Backspace => self.delete_before_cursor(),
            KeyCode::Delete => self.delete_at_cursor(),
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                Action::None
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.char_count());
                Action::None
            }
            KeyCode::Up => {
                self.move_vertical(false);
                Action::None
            }
            KeyCode::Down => {
                self.move_vertical(true);
                Action::None
            }
            KeyCode::Home => {
                let (row, _) = self.cursor_row_col();
                self.cursor = self.row_bounds(row).0;
                Action::None
            }
            KeyCode::End => {
                let (row, _) = self.cursor_row_col();
                let (start, len) = self.row_bounds(row);
                self.cursor = start + len;
                Action::None
            }
            KeyCode::Esc => Action::SetFocus(Focus::Results),
            _ => Action::None,
        }
    }

    fn handle_paste(&mut self, text: String) -> Action {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        if normalized.is_empty() {
            return Action::None;
        }
        self.insert_str(&normalized)
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                action
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let border_color = if self.focused { Color::Cyan } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("{} {}", self.icons.input_title(), INPUT_TITLE))
            .border_style(Style::default().fg(border_color));

        let inner = block.inner(rect);
        self.follow_cursor(inner.width, inner.height);

        let paragraph = if self.text.is_empty() {
            Paragraph::new(INPUT_PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(self.text.as_str())
                .style(Style::default().fg(Color::White))
                .scroll((self.scroll_row, self.scroll_col))
        };

        f.render_widget(paragraph.block(block), rect);

        if self.focused && inner.width > 0 && inner.height > 0 {
            let (row, col) = self.cursor_row_col();
            let x = inner.x + (col as u16).saturating_sub(self.scroll_col);
            let y = inner.y + (row as u16).saturating_sub(self.scroll_row);
            f.set_cursor_position(Position::new(x, y));
        }
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
