use super::scroll_behavior::DialogScroll;
use crate::constants::DIALOG_TITLE_LOGS;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::components::ScrollbarHelper;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const HELP_CONTENT: &str = r"
SENTENCELENS - Sentence Sentiment Analysis
==========================================

Paste or type text, run the analysis, then browse or export
one row per sentence: sentiment score, magnitude and
aggregated salience, each rounded to two decimals.

ANYWHERE
--------
Ctrl+R      Analyze the current text
Ctrl+L      Clear the text
Ctrl+X      Export results to XLSX
Ctrl+S      Export results to CSV
Tab         Switch focus between text and results
F1          Toggle this help panel
Ctrl+C      Quit application

TEXT INPUT
----------
Enter       New line
←→ Home End Move the cursor
Backspace   Delete before the cursor
Delete      Delete under the cursor
Esc         Move focus to the results (after an analysis)

RESULTS
-------
j/k ↑↓      Scroll rows
PageUp/Down Page through rows
g/Home      Jump to first row
End         Jump to last row
a           Analyze the current text
x           Export results to XLSX
c           Export results to CSV
i           Back to the text input
T           Change icon theme
G           Show logs
?           Toggle help panel
q           Quit application

NOTES
-----
Missing values are shown and exported as N/A.
Exports are written to the configured export directory.
Exports do nothing until an analysis has succeeded.

Press 'Esc', '?' or F1 to close this help panel
";

/// Shared layout for the small info and error popups
fn render_message_dialog(
    f: &mut Frame,
    area: Rect,
    title: String,
    color: Color,
    message: &str,
    scroll: &mut DialogScroll,
) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 10, area);
    f.render_widget(Clear, dialog_area);

    let instructions = "Press any key to continue • j/k to scroll if needed";

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(color));

    let content_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(2),
        dialog_area.height.saturating_sub(4),
    );

    let instructions_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + dialog_area.height.saturating_sub(2),
        dialog_area.width.saturating_sub(2),
        1,
    );

    let lines: Vec<&str> = message.lines().collect();
    let visible_height = content_area.height as usize;
    let overflow = lines.len() > visible_height;
    let message_text = scroll.visible(&lines, visible_height).join("\n");

    let message_paragraph = Paragraph::new(message_text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    let instructions_paragraph = Paragraph::new(instructions)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    f.render_widget(block, dialog_area);
    f.render_widget(message_paragraph, content_area);
    f.render_widget(instructions_paragraph, instructions_area);

    if overflow {
        f.render_stateful_widget(ScrollbarHelper::widget(), content_area, &mut scroll.state);
    }
}

pub fn render_info_dialog(f: &mut Frame, area: Rect, icons: &IconService, message: &str, scroll: &mut DialogScroll) {
    let title = format!("{} Info", icons.info());
    render_message_dialog(f, area, title, Color::Blue, message, scroll);
}

pub fn render_error_dialog(f: &mut Frame, area: Rect, icons: &IconService, message: &str, scroll: &mut DialogScroll) {
    let title = format!("{} Error", icons.warning());
    render_message_dialog(f, area, title, Color::Red, message, scroll);
}

/// Full-screen panel with a scrollable body
fn render_panel(f: &mut Frame, area: Rect, title: String, content: &str, scroll: &mut DialogScroll) {
    let (width, height) = LayoutManager::help_panel_dimensions(area.width, area.height);
    let panel_area = LayoutManager::centered_rect(width, height, area);
    f.render_widget(Clear, panel_area);

    let lines: Vec<&str> = content.lines().collect();
    let visible_height = panel_area.height.saturating_sub(2) as usize;
    let overflow = lines.len() > visible_height;
    let text = scroll.visible(&lines, visible_height).join("\n");

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);

    f.render_widget(paragraph, panel_area);

    if overflow {
        f.render_stateful_widget(ScrollbarHelper::widget(), panel_area, &mut scroll.state);
    }
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, icons: &IconService, scroll: &mut DialogScroll) {
    let title = format!("{} Help - Press 'Esc', '?' or F1 to close", icons.info());
    render_panel(f, area, title, HELP_CONTENT, scroll);
}

pub fn render_logs_dialog(f: &mut Frame, area: Rect, logger: Option<&Logger>, scroll: &mut DialogScroll) {
    let content = match logger {
        Some(logger) if !logger.is_empty() => logger.get_logs().join("\n"),
        Some(_) => "No logs yet".to_string(),
        None => "No logger available".to_string(),
    };

    render_panel(f, area, DIALOG_TITLE_LOGS.to_string(), &content, scroll);
}
