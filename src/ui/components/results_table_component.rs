//! Results table: one row per analyzed sentence.

use crate::analysis::ResultSet;
use crate::constants::{RESULTS_EMPTY, RESULTS_TITLE};
use crate::export::ExportFormat;
use crate::icons::IconService;
use crate::report::{report_rows, ReportRow};
use crate::ui::components::ScrollbarHelper;
use crate::ui::core::{Action, Component, DialogType, Focus, ScrollDirection};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

/// Header row inside the border
const HEADER_ROWS: u16 = 1;

pub struct ResultsTableComponent {
    rows: Vec<ReportRow>,
    state: TableState,
    scrollbar: ScrollbarHelper,
    /// Rows that fit in the last rendered frame, used for paging
    viewport_rows: usize,
    focused: bool,
    pub icons: IconService,
}

impl Default for ResultsTableComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultsTableComponent {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            state: TableState::default(),
            scrollbar: ScrollbarHelper::new(),
            viewport_rows: 1,
            focused: false,
            icons: IconService::default(),
        }
    }

    /// Show a new result set, selecting its first row
    pub fn set_results(&mut self, results: &ResultSet) {
        self.rows = report_rows(results);
        self.state = TableState::default();
        if !self.rows.is_empty() {
            self.state.select(Some(0));
        }
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn scroll(&mut self, direction: ScrollDirection) {
        let Some(last) = self.rows.len().checked_sub(1) else {
            return;
        };
        let current = self.state.selected().unwrap_or(0);
        let page = self.viewport_rows.max(1);

        let next = match direction {
            ScrollDirection::Up => current.saturating_sub(1),
            ScrollDirection::Down => current.saturating_add(1).min(last),
            ScrollDirection::PageUp => current.saturating_sub(page),
            ScrollDirection::PageDown => current.saturating_add(page).min(last),
            ScrollDirection::Top => 0,
            ScrollDirection::Bottom => last,
        };
        self.state.select(Some(next));
    }

    fn widths() -> [Constraint; 4] {
        [
            Constraint::Min(20),
            Constraint::Length(15),
            Constraint::Length(9),
            Constraint::Length(19),
        ]
    }
}

impl Component for ResultsTableComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::ScrollResults(ScrollDirection::Up),
            KeyCode::Down | KeyCode::Char('j') => Action::ScrollResults(ScrollDirection::Down),
            KeyCode::PageUp => Action::ScrollResults(ScrollDirection::PageUp),
            KeyCode::PageDown => Action::ScrollResults(ScrollDirection::PageDown),
            KeyCode::Home | KeyCode::Char('g') => Action::ScrollResults(ScrollDirection::Top),
            KeyCode::End => Action::ScrollResults(ScrollDirection::Bottom),
            KeyCode::Char('a') => Action::Analyze,
            KeyCode::Char('x') => Action::Export(ExportFormat::Xlsx),
            KeyCode::Char('c') => Action::Export(ExportFormat::Csv),
            KeyCode::Char('i') | KeyCode::Tab | KeyCode::Esc => Action::SetFocus(Focus::Input),
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('T') => Action::CycleIconTheme,
            KeyCode::Char('q') => Action::Quit,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ScrollResults(direction) => {
                self.scroll(direction);
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
        let border_color = if self.focused { Color::Cyan } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("{} {}", self.icons.results_title(), RESULTS_TITLE))
            .title_bottom(format!(
                " {} Ctrl+X: XLSX • {} Ctrl+S: CSV ",
                self.icons.export_xlsx(),
                self.icons.export_csv()
            ))
            .border_style(Style::default().fg(border_color));

        if self.rows.is_empty() {
            let paragraph = Paragraph::new(RESULTS_EMPTY)
                .block(block)
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center);
            f.render_widget(paragraph, rect);
            return;
        }

        let (table_area, scrollbar_area) = ScrollbarHelper::calculate_areas(rect, self.rows.len(), HEADER_ROWS);
        self.viewport_rows = rect.height.saturating_sub(2 + HEADER_ROWS) as usize;

        let header = Row::new(ReportRow::header().into_iter().map(Cell::from))
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

        let rows = self
            .rows
            .iter()
            .map(|row| Row::new(row.cells().into_iter().map(|cell| Cell::from(cell.to_string()))));

        let highlight = if self.focused {
            Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let table = Table::new(rows, Self::widths())
            .header(header)
            .block(block)
            .column_spacing(2)
            .row_highlight_style(highlight)
            .style(Style::default().fg(Color::White));

        f.render_stateful_widget(table, table_area, &mut self.state);

        let selected = self.state.selected().unwrap_or(0);
        self.scrollbar.update_state(self.rows.len(), selected, self.viewport_rows);
        self.scrollbar.render(f, scrollbar_area);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
