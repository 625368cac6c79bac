use crate::analysis::{AnalysisSession, RequestState, SentimentClient};
use crate::config::Config;
use crate::constants::{ANALYZING_LABEL, APP_TITLE};
use crate::export::{ExportFormat, ExportedFile, Exporter};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::components::{DialogComponent, InputComponent, ResultsTableComponent, StatusBar};
use crate::ui::core::{
    actions::{Action, DialogType, Focus},
    event_handler::EventType,
    task_manager::TaskManager,
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};
use std::sync::Arc;
use tokio::sync::mpsc;

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// What the application owns: the text, the analysis session and which panel has focus
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The analysis input. Only [`Action::TextChanged`] writes it.
    pub text: String,
    pub session: AnalysisSession,
    pub focus: Focus,
    pub last_export: Option<ExportedFile>,
}

pub struct AppComponent {
    // Panels
    input: InputComponent,
    results_table: ResultsTableComponent,
    dialog: DialogComponent,

    state: AppState,

    // Analysis and export
    client: Arc<dyn SentimentClient>,
    exporter: Exporter,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,

    // View
    icons: IconService,
    input_height: u16,
    ticks: usize,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: &Config, client: Arc<dyn SentimentClient>, logger: Logger) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();
        let icons = IconService::new(config.ui.icon_theme);

        let mut input = InputComponent::new();
        input.icons = icons.clone();
        let mut results_table = ResultsTableComponent::new();
        results_table.icons = icons.clone();
        let mut dialog = DialogComponent::new();
        dialog.icons = icons.clone();
        dialog.set_logger(logger);

        Self {
            input,
            results_table,
            dialog,
            state: AppState::default(),
            client,
            exporter: Exporter::from_config(&config.export),
            task_manager,
            background_action_rx,
            icons,
            input_height: config.ui.input_height,
            ticks: 0,
            should_quit: false,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Analyses still in flight
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    pub fn dialog_type(&self) -> Option<&DialogType> {
        self.dialog.dialog_type.as_ref()
    }

    pub fn input(&self) -> &InputComponent {
        &self.input
    }

    pub fn results_table(&self) -> &ResultsTableComponent {
        &self.results_table
    }

    /// Replace the input text, as if the editor had requested it
    pub fn set_text(&mut self, text: &str) {
        self.dispatch(Action::TextChanged(text.replace("\r\n", "\n")));
    }

    fn set_focus(&mut self, focus: Focus) {
        // The results panel is not drawn until the first analysis completes
        if focus == Focus::Results && self.state.session.results().is_none() {
            log::debug!("No results yet, keeping focus on the input");
            return;
        }
        self.state.focus = focus;
        match focus {
            Focus::Input => {
                self.results_table.on_blur();
                self.input.on_focus();
            }
            Focus::Results => {
                self.input.on_blur();
                self.results_table.on_focus();
            }
        }
    }

    /// Bindings that work regardless of focus
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::F(1) {
            return Action::ShowDialog(DialogType::Help);
        }
        if !key.modifiers.contains(KeyModifiers::CONTROL) || key.modifiers.contains(KeyModifiers::ALT) {
            return Action::None;
        }

        match key.code {
            KeyCode::Char('c') => {
                log::debug!("Global key: Ctrl+C - quitting application");
                Action::Quit
            }
            KeyCode::Char('r') => Action::Analyze,
            KeyCode::Char('l') => Action::ClearInput,
            KeyCode::Char('x') => Action::Export(ExportFormat::Xlsx),
            KeyCode::Char('s') => Action::Export(ExportFormat::Csv),
            _ => Action::None,
        }
    }

    /// Apply an action that reached the application. The returned action is dispatched next.
    ///
    /// Returns a follow-up action, or [`Action::None`] when the action is fully handled.
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::TextChanged(text) => {
                self.state.text = text;
                self.input.set_text(&self.state.text);
                Action::None
            }
            Action::ClearInput => self.input.clear(),
            Action::SetFocus(focus) => {
                self.set_focus(focus);
                Action::None
            }
            Action::ToggleFocus => {
                let next = match self.state.focus {
                    Focus::Input => Focus::Results,
                    Focus::Results => Focus::Input,
                };
                self.set_focus(next);
                Action::None
            }
            Action::Analyze => {
                self.start_analysis();
                Action::None
            }
            Action::AnalysisSucceeded { request_id, results } => {
                log::info!("Analysis request {} returned {} sentences", request_id, results.len());
                self.results_table.set_results(&results);
                self.state.session.complete(Ok(results));
                Action::None
            }
            Action::AnalysisFailed { request_id, error } => {
                log::warn!("Analysis request {} failed: {}", request_id, error);
                self.state.session.complete(Err(error));
                Action::None
            }
            Action::Export(format) => self.export(format),
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                log::debug!("Icon theme changed to {:?}", self.icons.theme());
                Action::None
            }
            // Consumed by components before reaching the app
            Action::ScrollResults(_) | Action::ShowDialog(_) | Action::HideDialog | Action::None => Action::None,
        }
    }

    fn start_analysis(&mut self) {
        if self.state.session.is_loading() {
            log::debug!("Analyze ignored: a request is already in flight");
            return;
        }

        if let Err(error) = self.state.session.begin(&self.state.text) {
            log::info!("Analysis not started: {}", error);
            return;
        }

        let request_id = self
            .task_manager
            .spawn_analysis(Arc::clone(&self.client), self.state.text.clone());
        log::info!(
            "Analysis request {} started ({} chars)",
            request_id,
            self.state.text.chars().count()
        );
    }

    fn export(&mut self, format: ExportFormat) -> Action {
        match self.exporter.export(format, self.state.session.results()) {
            Ok(Some(file)) => {
                log::info!("Exported {} rows to {}", file.rows, file.path.display());
                let message = format!(
                    "Exported {} rows as {} to\n{}\n({})",
                    file.rows,
                    file.format.label(),
                    file.path.display(),
                    file.mime_type()
                );
                self.state.last_export = Some(file);
                Action::ShowDialog(DialogType::Info(message))
            }
            Ok(None) => {
                log::debug!("{} export skipped: no results yet", format.label());
                Action::None
            }
            Err(error) => {
                log::error!("{} export failed: {}", format.label(), error);
                Action::ShowDialog(DialogType::Error(format!("Export failed: {}", error)))
            }
        }
    }

    /// Run an action through the component hierarchy and the app until it settles
    pub fn dispatch(&mut self, action: Action) {
        let mut action = action;
        while !matches!(action, Action::None) {
            let processed = self.update(action);
            action = self.handle_app_action(processed);
        }
    }

    /// Drain outcomes reported by finished analysis tasks
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }

        for task in self.task_manager.cleanup_finished_tasks() {
            log::debug!(
                "Background: task {} finished after {:?} ({})",
                task.id,
                task.elapsed(),
                task.description
            );
        }

        actions
    }

    /// Advance the loading spinner. Returns whether a redraw is needed.
    pub fn tick(&mut self) -> bool {
        self.ticks = self.ticks.wrapping_add(1);
        self.state.session.is_loading()
    }

    /// Route one terminal event and apply whatever actions it produces
    pub fn handle_event(&mut self, event_type: EventType) {
        let action = match event_type {
            EventType::Key(key) => {
                if self.dialog.is_visible() {
                    // An open dialog swallows every key
                    self.dialog.handle_key_events(key)
                } else {
                    match self.handle_global_key(key) {
                        Action::None => match self.state.focus {
                            Focus::Input => self.input.handle_key_events(key),
                            Focus::Results => self.results_table.handle_key_events(key),
                        },
                        action => action,
                    }
                }
            }
            EventType::Paste(text) => {
                if !self.dialog.is_visible() && self.state.focus == Focus::Input {
                    self.input.handle_paste(text)
                } else {
                    Action::None
                }
            }
            EventType::Tick => {
                self.tick();
                Action::None
            }
            EventType::Resize(_, _) | EventType::Other => Action::None,
        };

        self.dispatch(action);
    }

    fn render_feedback(&self, f: &mut Frame, rect: Rect) {
        let session = &self.state.session;
        let (text, style) = match session.state() {
            RequestState::Loading => (
                format!(
                    "{} {} {}",
                    self.icons.analyzing(),
                    ANALYZING_LABEL,
                    SPINNER_FRAMES[self.ticks % SPINNER_FRAMES.len()]
                ),
                Style::default().fg(Color::Yellow),
            ),
            RequestState::Failed(error) => (
                format!("{} {}", self.icons.error(), error),
                Style::default().fg(Color::Red),
            ),
            RequestState::Succeeded => (
                format!(
                    "{} {} sentences analyzed",
                    self.icons.success(),
                    session.results().map_or(0, |results| results.len())
                ),
                Style::default().fg(Color::Green),
            ),
            RequestState::Idle => (
                format!(
                    "{} Ctrl+R to analyze • {} Ctrl+L to clear",
                    self.icons.analyze(),
                    self.icons.clear()
                ),
                Style::default().fg(Color::Gray),
            ),
        };

        f.render_widget(Paragraph::new(text).style(style), rect);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // Only global bindings; panel keys are routed by handle_event
        self.handle_global_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        // Dialog first, then the panels, then the application itself
        let action = self.dialog.update(action);
        let action = self.input.update(action);

        self.results_table.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let layout = LayoutManager::main_layout(rect, self.input_height);

        let title = Paragraph::new(APP_TITLE)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
        f.render_widget(title, layout.title);

        self.input.render(f, layout.input);
        self.render_feedback(f, layout.feedback);

        // The results section only exists once an analysis has succeeded
        if self.state.session.results().is_some() {
            self.results_table.render(f, layout.results);
        }

        StatusBar::render(f, layout.status, self.state.focus, self.state.session.is_loading());

        // Render dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
