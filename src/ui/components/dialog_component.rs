//! Modal dialog component.
//!
//! Shows one popup at a time on top of the main view: short info and error
//! messages (export outcomes, for instance), the key binding help and the
//! in-memory log buffer. While a dialog is open it receives every key press.

use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::components::dialogs::{system_dialogs, DialogScroll};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component, ScrollDirection,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub icons: IconService,
    scroll: DialogScroll,
    logger: Option<Logger>,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            icons: IconService::default(),
            scroll: DialogScroll::default(),
            logger: None,
        }
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn scroll_key(key: &KeyEvent) -> Option<ScrollDirection> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(ScrollDirection::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(ScrollDirection::Down),
            KeyCode::PageUp => Some(ScrollDirection::PageUp),
            KeyCode::PageDown => Some(ScrollDirection::PageDown),
            KeyCode::Home => Some(ScrollDirection::Top),
            KeyCode::End => Some(ScrollDirection::Bottom),
            _ => None,
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(dialog_type) = &self.dialog_type else {
            return Action::None;
        };

        if let Some(direction) = Self::scroll_key(&key) {
            self.scroll.apply(direction);
            return Action::None;
        }

        match dialog_type {
            // Any other key dismisses short messages
            DialogType::Info(_) | DialogType::Error(_) => Action::HideDialog,
            DialogType::Help => match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::F(1) => Action::HideDialog,
                _ => Action::None,
            },
            DialogType::Logs => match key.code {
                KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::HideDialog,
                _ => Action::None,
            },
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.dialog_type = Some(dialog_type);
                self.scroll.reset();
                Action::None
            }
            Action::HideDialog => {
                self.dialog_type = None;
                self.scroll.reset();
                Action::None
            }
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                action
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(dialog_type) = &self.dialog_type else {
            return;
        };

        match dialog_type {
            DialogType::Info(message) => {
                system_dialogs::render_info_dialog(f, rect, &self.icons, message, &mut self.scroll);
            }
            DialogType::Error(message) => {
                system_dialogs::render_error_dialog(f, rect, &self.icons, message, &mut self.scroll);
            }
            DialogType::Help => system_dialogs::render_help_dialog(f, rect, &self.icons, &mut self.scroll),
            DialogType::Logs => system_dialogs::render_logs_dialog(f, rect, self.logger.as_ref(), &mut self.scroll),
        }
    }
}
