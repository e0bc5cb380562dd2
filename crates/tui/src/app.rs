//! Application state and event loop.
//!
//! `App` owns all screen state and drives the `tokio::select!` loop
//! over simulation events and terminal input. Rendering is delegated
//! to the widget functions in [`crate::widgets`].

use std::time::Duration;
use std::time::Instant;

use anyhow::Result;
use apg_core::catalog::Catalog;
use apg_core::codegen;
use apg_core::contact::ContactField;
use apg_core::contact::ContactStep;
use apg_core::contact::ContactWizard;
use apg_core::contact::INQUIRY_TYPES;
use apg_core::editor::ConfigEditor;
use apg_core::simulation::Simulation;
use apg_core::simulation::Timings;
use apg_protocol::ChatMessage;
use apg_protocol::SimulationEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;
use ratatui::layout::Constraint;
use ratatui::layout::Direction;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tokio::select;
use tokio::sync::mpsc::unbounded_channel;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;
use tokio_stream::StreamExt;

use crate::clipboard;
use crate::tui::FrameRequester;
use crate::tui::Tui;
use crate::tui::TuiEvent;
use crate::widgets::chat_panel;
use crate::widgets::code_view;
use crate::widgets::config_panel;
use crate::widgets::config_panel::FIXED_ROWS;
use crate::widgets::contact_form;
use crate::widgets::contact_form::CONTINUE_ROW;
use crate::widgets::gallery;
use crate::widgets::pages;

/// How long the copy confirmation stays visible.
const COPY_FEEDBACK: Duration = Duration::from_secs(2);

/// Top-level screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    GettingStarted,
    Playground,
    Contact,
}

/// Whether the playground shows the gallery or an opened template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaygroundMode {
    Gallery,
    Editor,
}

/// Whether keystrokes navigate or edit the focused text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// Main application state.
pub struct App {
    catalog: Catalog,
    timings: Timings,
    screen: Screen,
    mode: PlaygroundMode,
    input_mode: InputMode,
    gallery_index: usize,
    editor: ConfigEditor,
    transcript: Vec<ChatMessage>,
    generated: String,
    focus: usize,
    simulation: Simulation,
    sim_tx: UnboundedSender<SimulationEvent>,
    sim_rx: UnboundedReceiver<SimulationEvent>,
    copied_at: Option<Instant>,
    wizard: ContactWizard,
    contact_focus: usize,
    should_exit: bool,
}

impl App {
    pub fn new(catalog: Catalog, timings: Timings) -> Self {
        let (sim_tx, sim_rx) = unbounded_channel();
        let mut app = Self {
            catalog,
            timings,
            screen: Screen::Home,
            mode: PlaygroundMode::Gallery,
            input_mode: InputMode::Normal,
            gallery_index: 0,
            editor: ConfigEditor::new(),
            transcript: Vec::new(),
            generated: String::new(),
            focus: 0,
            simulation: Simulation::new(),
            sim_tx,
            sim_rx,
            copied_at: None,
            wizard: ContactWizard::new(),
            contact_focus: 0,
            should_exit: false,
        };
        app.regenerate();
        app
    }

    /// Main event loop over simulation events and terminal input.
    pub async fn run(&mut self, tui: &mut Tui) -> Result<()> {
        let mut tui_events = tui.event_stream();

        tui.frame_requester().schedule_frame();

        while !self.should_exit {
            select! {
                Some(event) = self.sim_rx.recv() => {
                    self.simulation.apply(event);
                    tui.frame_requester().schedule_frame();
                }
                Some(tui_event) = tui_events.next() => {
                    self.handle_tui_event(tui, tui_event)?;
                }
            }
        }

        Ok(())
    }

    fn handle_tui_event(&mut self, tui: &mut Tui, event: TuiEvent) -> Result<()> {
        match event {
            TuiEvent::Key(key_event) => {
                self.handle_key_event(key_event, &tui.frame_requester());
                tui.frame_requester().schedule_frame();
            }
            TuiEvent::Paste(pasted) => {
                if self.input_mode == InputMode::Editing {
                    self.edit_active_field(|text| text.push_str(&pasted));
                    tui.frame_requester().schedule_frame();
                }
            }
            TuiEvent::Draw => {
                tui.draw(|frame| {
                    self.render(frame);
                })?;
            }
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent, requester: &FrameRequester) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_exit = true;
            return;
        }

        if self.input_mode == InputMode::Editing {
            self.handle_editing_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => {
                self.should_exit = true;
            }
            KeyCode::Char('1') => self.switch_screen(Screen::Home),
            KeyCode::Char('2') => self.switch_screen(Screen::GettingStarted),
            KeyCode::Char('3') => self.switch_screen(Screen::Playground),
            KeyCode::Char('4') => self.switch_screen(Screen::Contact),
            _ => match self.screen {
                Screen::Playground => self.handle_playground_key(key, requester),
                Screen::Contact => self.handle_contact_key(key),
                Screen::Home | Screen::GettingStarted => {}
            },
        }
    }

    /// Switch the active screen. Leaving the playground cancels any
    /// running simulation so no timer fires behind another screen.
    fn switch_screen(&mut self, target: Screen) {
        if self.screen == Screen::Playground && target != Screen::Playground {
            self.simulation.reset();
        }
        self.screen = target;
    }

    fn handle_editing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Backspace => {
                self.edit_active_field(|text| {
                    text.pop();
                });
            }
            KeyCode::Char(c) => {
                self.edit_active_field(|text| text.push(c));
            }
            _ => {}
        }
    }

    /// Apply a closure to the currently focused text field.
    fn edit_active_field(&mut self, edit: impl FnOnce(&mut String)) {
        match self.screen {
            Screen::Playground => {
                let (value, apply): (&str, fn(&mut ConfigEditor, String)) = match self.focus {
                    0 => (&self.editor.config().name, ConfigEditor::set_name),
                    2 => (&self.editor.config().instructions, ConfigEditor::set_instructions),
                    _ => return,
                };
                let mut value = value.to_string();
                edit(&mut value);
                apply(&mut self.editor, value);
                self.regenerate();
            }
            Screen::Contact => {
                let Some(field) = contact_text_field(self.contact_focus) else {
                    return;
                };
                let mut value = match field {
                    ContactField::CompanyName => self.wizard.form().company_name.clone(),
                    ContactField::Name => self.wizard.form().name.clone(),
                    ContactField::Email => self.wizard.form().email.clone(),
                    ContactField::Phone => self.wizard.form().phone.clone(),
                    ContactField::Challenge => self.wizard.form().challenge.clone(),
                    ContactField::InquiryType => return,
                };
                edit(&mut value);
                self.wizard.update_field(field, value);
            }
            Screen::Home | Screen::GettingStarted => {}
        }
    }

    fn handle_playground_key(&mut self, key: KeyEvent, requester: &FrameRequester) {
        match self.mode {
            PlaygroundMode::Gallery => match key.code {
                KeyCode::Up => {
                    self.gallery_index = self.gallery_index.saturating_sub(1);
                }
                KeyCode::Down => {
                    let last = self.catalog.templates().len().saturating_sub(1);
                    self.gallery_index = (self.gallery_index + 1).min(last);
                }
                KeyCode::Enter => self.open_selected_template(),
                _ => {}
            },
            PlaygroundMode::Editor => match key.code {
                KeyCode::Esc => {
                    self.simulation.reset();
                    self.mode = PlaygroundMode::Gallery;
                }
                KeyCode::Up | KeyCode::BackTab => {
                    self.focus = self.focus.saturating_sub(1);
                }
                KeyCode::Down | KeyCode::Tab => {
                    let last = FIXED_ROWS + self.catalog.tools().len() - 1;
                    self.focus = (self.focus + 1).min(last);
                }
                KeyCode::Left if self.focus == 1 => self.cycle_model(-1),
                KeyCode::Right if self.focus == 1 => self.cycle_model(1),
                KeyCode::Enter | KeyCode::Char(' ') if self.focus >= FIXED_ROWS => {
                    self.toggle_focused_tool();
                }
                KeyCode::Enter if self.focus == 1 => self.cycle_model(1),
                KeyCode::Enter => {
                    self.input_mode = InputMode::Editing;
                }
                KeyCode::Char('s') => {
                    self.simulation.start(
                        self.transcript.clone(),
                        self.timings,
                        self.sim_tx.clone(),
                    );
                }
                KeyCode::Char('r') => self.reset_to_template_defaults(),
                KeyCode::Char('y') => self.copy_generated(requester),
                _ => {}
            },
        }
    }

    fn open_selected_template(&mut self) {
        let Some(template) = self.catalog.templates().get(self.gallery_index) else {
            return;
        };
        self.transcript = template.example_messages.clone();
        self.editor.seed(template);
        self.simulation.reset();
        self.focus = 0;
        self.copied_at = None;
        self.mode = PlaygroundMode::Editor;
        self.regenerate();
    }

    /// Discard all edits, reseed from the opened template, and stop
    /// any running simulation.
    fn reset_to_template_defaults(&mut self) {
        if let Some(template) = self.catalog.templates().get(self.gallery_index) {
            self.editor.seed(template);
            self.transcript = template.example_messages.clone();
            self.regenerate();
        }
        self.simulation.reset();
    }

    fn cycle_model(&mut self, step: isize) {
        let models = self.catalog.models();
        if models.is_empty() {
            return;
        }
        let current = models
            .iter()
            .position(|m| m.id == self.editor.config().model)
            .unwrap_or(0);
        let len = models.len() as isize;
        let next = (current as isize + step).rem_euclid(len) as usize;
        self.editor.set_model(models[next].id.clone());
        self.regenerate();
    }

    fn toggle_focused_tool(&mut self) {
        let Some(tool) = self.catalog.tools().get(self.focus - FIXED_ROWS) else {
            return;
        };
        let id = tool.id.clone();
        self.editor.toggle_tool(&id);
        self.regenerate();
    }

    fn copy_generated(&mut self, requester: &FrameRequester) {
        if clipboard::copy_to_clipboard(&self.generated).is_ok() {
            self.copied_at = Some(Instant::now());
            // Redraw once the confirmation expires.
            requester.schedule_frame_in(COPY_FEEDBACK + Duration::from_millis(50));
        }
    }

    fn handle_contact_key(&mut self, key: KeyEvent) {
        match self.wizard.step() {
            ContactStep::Input => match key.code {
                KeyCode::Up | KeyCode::BackTab => {
                    self.contact_focus = self.contact_focus.saturating_sub(1);
                }
                KeyCode::Down | KeyCode::Tab => {
                    self.contact_focus = (self.contact_focus + 1).min(CONTINUE_ROW);
                }
                KeyCode::Left if self.contact_focus == 0 => self.cycle_inquiry(-1),
                KeyCode::Right if self.contact_focus == 0 => self.cycle_inquiry(1),
                KeyCode::Enter if self.contact_focus == CONTINUE_ROW => {
                    self.wizard.advance();
                }
                KeyCode::Enter if self.contact_focus == 0 => self.cycle_inquiry(1),
                KeyCode::Enter => {
                    self.input_mode = InputMode::Editing;
                }
                _ => {}
            },
            ContactStep::Confirm => match key.code {
                KeyCode::Enter => {
                    self.wizard.submit();
                }
                KeyCode::Esc => {
                    self.wizard.back();
                }
                _ => {}
            },
            ContactStep::Complete => {
                if key.code == KeyCode::Char('r') {
                    self.wizard.restart();
                    self.contact_focus = 0;
                }
            }
        }
    }

    fn cycle_inquiry(&mut self, step: isize) {
        let current = INQUIRY_TYPES
            .iter()
            .position(|(value, _)| *value == self.wizard.form().inquiry_type);
        let len = INQUIRY_TYPES.len() as isize;
        let next = match current {
            Some(i) => (i as isize + step).rem_euclid(len) as usize,
            None => 0,
        };
        self.wizard
            .update_field(ContactField::InquiryType, INQUIRY_TYPES[next].0);
    }

    fn regenerate(&mut self) {
        self.generated = codegen::generate(
            self.editor.config(),
            self.catalog.models(),
            self.catalog.tools(),
        );
    }

    fn copied(&self) -> bool {
        self.copied_at
            .is_some_and(|at| at.elapsed() < COPY_FEEDBACK)
    }

    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.area());

        self.render_tabs(frame, chunks[0]);
        self.render_body(frame, chunks[1]);
        self.render_hints(frame, chunks[2]);
    }

    fn render_tabs(&self, frame: &mut Frame, area: Rect) {
        let tabs = [
            (Screen::Home, "1 Home"),
            (Screen::GettingStarted, "2 Getting Started"),
            (Screen::Playground, "3 Playground"),
            (Screen::Contact, "4 Contact"),
        ];
        let mut spans = Vec::new();
        for (i, (screen, label)) in tabs.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            let style = if *screen == self.screen {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(*label, style));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_body(&self, frame: &mut Frame, area: Rect) {
        match self.screen {
            Screen::Home => pages::render_home(frame, area, self.catalog.home()),
            Screen::GettingStarted => pages::render_guide(frame, area, self.catalog.guide()),
            Screen::Playground => match self.mode {
                PlaygroundMode::Gallery => gallery::render_gallery(
                    frame,
                    area,
                    self.catalog.templates(),
                    self.gallery_index,
                ),
                PlaygroundMode::Editor => self.render_editor(frame, area),
            },
            Screen::Contact => contact_form::render_contact(
                frame,
                area,
                &self.wizard,
                self.contact_focus,
                self.input_mode == InputMode::Editing,
            ),
        }
    }

    fn render_editor(&self, frame: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);

        config_panel::render_config(
            frame,
            columns[0],
            self.editor.config(),
            self.catalog.models(),
            self.catalog.tools(),
            self.focus,
            self.input_mode == InputMode::Editing,
        );

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[1]);

        code_view::render_code(frame, right[0], &self.generated, self.copied());
        chat_panel::render_chat(
            frame,
            right[1],
            self.simulation.revealed(),
            self.simulation.typing().map(|(_, role)| role),
            self.simulation.phase(),
        );
    }

    fn render_hints(&self, frame: &mut Frame, area: Rect) {
        let hints = if self.input_mode == InputMode::Editing {
            "type to edit | Enter/Esc done"
        } else {
            match self.screen {
                Screen::Home | Screen::GettingStarted => "1-4 switch screen | q quit",
                Screen::Playground => match self.mode {
                    PlaygroundMode::Gallery => {
                        "Up/Down select | Enter open | 1-4 switch screen | q quit"
                    }
                    PlaygroundMode::Editor => {
                        "Tab focus | Enter edit/toggle | s simulate | r reset | y copy | Esc back"
                    }
                },
                Screen::Contact => "Tab focus | Enter edit/confirm | 1-4 switch screen | q quit",
            }
        };
        frame.render_widget(
            Paragraph::new(Span::styled(hints, Style::default().fg(Color::DarkGray))),
            area,
        );
    }
}

/// Map a contact focus row to its editable field. Row 0 is the
/// inquiry-type selector, row 6 the Continue button; neither takes
/// text input.
fn contact_text_field(focus: usize) -> Option<ContactField> {
    match focus {
        1 => Some(ContactField::CompanyName),
        2 => Some(ContactField::Name),
        3 => Some(ContactField::Email),
        4 => Some(ContactField::Phone),
        5 => Some(ContactField::Challenge),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apg_core::simulation::SimulationPhase;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn test_app() -> App {
        let catalog = Catalog::load().expect("embedded catalog loads");
        App::new(catalog, Timings::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::from(code), &FrameRequester::noop());
    }

    fn render_to_string(app: &App) -> String {
        let backend = TestBackend::new(120, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[tokio::test]
    async fn test_starts_on_home_screen() {
        let app = test_app();
        let content = render_to_string(&app);
        assert!(content.contains("Build production-grade AI agents"));
    }

    #[tokio::test]
    async fn test_digit_keys_switch_screens() {
        let mut app = test_app();

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.screen, Screen::Playground);
        assert!(render_to_string(&app).contains("Templates"));

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.screen, Screen::GettingStarted);
        assert!(render_to_string(&app).contains("Create a project"));

        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.screen, Screen::Contact);
    }

    #[tokio::test]
    async fn test_q_quits() {
        let mut app = test_app();
        assert!(!app.should_exit);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_exit);
    }

    #[tokio::test]
    async fn test_opening_template_seeds_editor() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, PlaygroundMode::Editor);
        let expected = &app.catalog.templates()[1];
        assert_eq!(app.editor.config().name, expected.default_config.name);
        assert!(app.generated.contains(&expected.default_config.name));
    }

    #[tokio::test]
    async fn test_tool_toggle_regenerates_code() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Enter);

        // Focus the first tool row and flip it twice.
        let was_enabled = app.editor.tool_enabled("web-search");
        for _ in 0..FIXED_ROWS {
            press(&mut app, KeyCode::Down);
        }
        press(&mut app, KeyCode::Enter);
        assert_ne!(app.editor.tool_enabled("web-search"), was_enabled);
        assert_eq!(
            app.generated.contains("web_searchTool"),
            app.editor.tool_enabled("web-search")
        );
    }

    #[tokio::test]
    async fn test_editing_name_flows_into_generated_code() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Editing);
        press(&mut app, KeyCode::Char('!'));
        press(&mut app, KeyCode::Esc);

        assert!(app.editor.config().name.ends_with('!'));
        assert!(app
            .generated
            .contains(&format!("name: '{}',", app.editor.config().name)));
    }

    #[tokio::test]
    async fn test_editing_instructions_flows_into_generated_code() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Enter);

        // Focus the instructions row.
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        type_text(&mut app, "!");

        assert!(app.editor.config().instructions.ends_with('!'));
        assert!(app
            .generated
            .contains(&app.editor.config().instructions));
    }

    #[tokio::test]
    async fn test_model_cycling_wraps() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Down);

        let model_count = app.catalog.models().len();
        let start = app.editor.config().model.clone();
        for _ in 0..model_count {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.editor.config().model, start, "full cycle returns home");
    }

    #[tokio::test]
    async fn test_simulate_key_starts_run() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.simulation.phase(), SimulationPhase::Running);

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.simulation.phase(), SimulationPhase::Idle);
    }

    #[tokio::test]
    async fn test_leaving_playground_screen_cancels_simulation() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.simulation.phase(), SimulationPhase::Running);

        press(&mut app, KeyCode::Char('1'));
        assert_eq!(
            app.simulation.phase(),
            SimulationPhase::Idle,
            "leaving the playground screen must reset the simulation"
        );
        assert!(app.simulation.revealed().is_empty());
    }

    #[tokio::test]
    async fn test_reset_key_restores_template_defaults() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Enter);

        let defaults = app.catalog.templates()[0].default_config.clone();
        type_text(&mut app, " edited");
        assert_ne!(*app.editor.config(), defaults);

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(*app.editor.config(), defaults);
        assert!(app.generated.contains(&format!("name: '{}',", defaults.name)));
    }

    #[tokio::test]
    async fn test_escape_returns_to_gallery_and_resets_simulation() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('s'));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, PlaygroundMode::Gallery);
        assert_eq!(app.simulation.phase(), SimulationPhase::Idle);
    }

    fn type_text(app: &mut App, text: &str) {
        press(app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Editing);
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Esc);
    }

    #[tokio::test]
    async fn test_contact_wizard_keyboard_flow() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('4'));

        // Inquiry type selector on the first row.
        press(&mut app, KeyCode::Right);
        assert_eq!(app.wizard.form().inquiry_type, "document");

        press(&mut app, KeyCode::Down);
        type_text(&mut app, "Acme Inc.");
        press(&mut app, KeyCode::Down);
        type_text(&mut app, "Taro");
        press(&mut app, KeyCode::Down);
        type_text(&mut app, "taro@example.com");

        // Skip phone, fill the challenge field.
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        type_text(&mut app, "Hello");

        // Continue, then submit from the confirm step.
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.wizard.step(), ContactStep::Confirm);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.wizard.step(), ContactStep::Complete);
        assert!(render_to_string(&app).contains("Thank you for your inquiry!"));
    }

    #[tokio::test]
    async fn test_contact_continue_blocked_by_validation() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('4'));

        for _ in 0..CONTINUE_ROW {
            press(&mut app, KeyCode::Down);
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.wizard.step(), ContactStep::Input);
        assert!(render_to_string(&app).contains("Name is required"));
    }
}
