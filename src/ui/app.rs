//! Main TUI application state and logic

use crate::pipeline::{self, RunOutcome};
use crate::session::{InputHistory, Transcript};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Rows moved by PageUp/PageDown
const PAGE: usize = 5;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Input,
    Tokens,
    Tree,
    Transcript,
}

impl FocusedPane {
    /// Move focus to the next pane (input -> tokens -> tree -> transcript)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Input => FocusedPane::Tokens,
            FocusedPane::Tokens => FocusedPane::Tree,
            FocusedPane::Tree => FocusedPane::Transcript,
            FocusedPane::Transcript => FocusedPane::Input,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Input => FocusedPane::Transcript,
            FocusedPane::Tokens => FocusedPane::Input,
            FocusedPane::Tree => FocusedPane::Tokens,
            FocusedPane::Transcript => FocusedPane::Tree,
        }
    }
}

/// The main application state
pub struct App {
    /// Line being edited
    pub input: String,

    /// Cursor position in `input`, in chars
    pub cursor: usize,

    pub history: InputHistory,
    pub transcript: Transcript,

    /// Outcome of the most recent run
    pub last_run: Option<RunOutcome>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub tokens_scroll: usize,
    pub tree_scroll: usize,
    pub transcript_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        App {
            input: String::new(),
            cursor: 0,
            history: InputHistory::new(),
            transcript: Transcript::new(),
            last_run: None,
            focused_pane: FocusedPane::Input,
            tokens_scroll: 0,
            tree_scroll: 0,
            transcript_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Input line, panes, status bar
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(main_chunks[1]);

        // Left column: Transcript | Right column: Tokens (top) and Tree (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(columns[1]);

        super::panes::render_input_pane(
            frame,
            main_chunks[0],
            &self.input,
            self.cursor,
            self.focused_pane == FocusedPane::Input,
        );

        super::panes::render_transcript_pane(
            frame,
            columns[0],
            &self.transcript,
            self.focused_pane == FocusedPane::Transcript,
            &mut self.transcript_scroll,
        );

        super::panes::render_tokens_pane(
            frame,
            right_rows[0],
            self.last_run.as_ref().map(|run| run.tokens.as_slice()),
            self.focused_pane == FocusedPane::Tokens,
            &mut self.tokens_scroll,
        );

        super::panes::render_tree_pane(
            frame,
            right_rows[1],
            self.last_run.as_ref().map(|run| &run.tree),
            self.focused_pane == FocusedPane::Tree,
            &mut self.tree_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[2],
            &self.status_message,
            self.transcript.runs(),
            self.transcript.successes(),
            self.last_run.as_ref().map(RunOutcome::is_success),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.focused_pane = self.focused_pane.next(),
            KeyCode::BackTab => self.focused_pane = self.focused_pane.prev(),
            KeyCode::Enter => self.submit(),
            KeyCode::PageUp => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(PAGE);
            }
            KeyCode::PageDown => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(PAGE);
            }
            KeyCode::Up => {
                if let Some(line) = self.history.older().map(str::to_string) {
                    self.set_input(line);
                }
            }
            KeyCode::Down => {
                let line = self.history.newer().map(str::to_string).unwrap_or_default();
                self.set_input(line);
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.input_len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.input_len(),
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let index = self.byte_index(self.cursor);
                    self.input.remove(index);
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.input_len() {
                    let index = self.byte_index(self.cursor);
                    self.input.remove(index);
                }
            }
            KeyCode::Char(c) => {
                let index = self.byte_index(self.cursor);
                self.input.insert(index, c);
                self.cursor += 1;
            }
            _ => {}
        }
    }

    /// Run the pipeline on the current input line
    fn submit(&mut self) {
        if self.input.trim().is_empty() {
            self.status_message = "Nothing to run".to_string();
            return;
        }

        let line = std::mem::take(&mut self.input);
        self.cursor = 0;
        self.history.push(&line);

        let outcome = pipeline::run(&line);
        self.status_message = match &outcome.result {
            Some(Ok(value)) => format!("= {}", value),
            Some(Err(err)) => format!("Evaluation failed: {}", err),
            None => format!("{} diagnostic(s)", outcome.diagnostics.len()),
        };
        self.transcript.record(&outcome);
        self.last_run = Some(outcome);

        // Auto-scroll transcript to bottom, reset the per-run panes
        self.transcript_scroll = usize::MAX;
        self.tokens_scroll = 0;
        self.tree_scroll = 0;
    }

    fn focused_scroll(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Tokens => &mut self.tokens_scroll,
            FocusedPane::Tree => &mut self.tree_scroll,
            FocusedPane::Input | FocusedPane::Transcript => &mut self.transcript_scroll,
        }
    }

    fn set_input(&mut self, line: String) {
        self.input = line;
        self.cursor = self.input_len();
    }

    fn input_len(&self) -> usize {
        self.input.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_index)
            .map_or(self.input.len(), |(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_line(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_submit_records_result() {
        let mut app = App::new();
        type_line(&mut app, "2 + 3 * 4");
        press(&mut app, KeyCode::Enter);

        assert!(app.input.is_empty());
        assert_eq!(app.status_message, "= 14");
        assert_eq!(app.transcript.runs(), 1);
        assert!(app.last_run.as_ref().is_some_and(RunOutcome::is_success));
    }

    #[test]
    fn test_editing_and_history() {
        let mut app = App::new();
        type_line(&mut app, "1+2");
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input, "12");
        press(&mut app, KeyCode::Home);
        press(&mut app, KeyCode::Char('('));
        press(&mut app, KeyCode::End);
        press(&mut app, KeyCode::Char(')'));
        assert_eq!(app.input, "(12)");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Up);
        assert_eq!(app.input, "(12)");
        assert_eq!(app.cursor, 4);
        press(&mut app, KeyCode::Down);
        assert!(app.input.is_empty());
    }

    #[test]
    fn test_focus_and_quit() {
        let mut app = App::new();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Tokens);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focused_pane, FocusedPane::Input);

        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_render_after_error() {
        let mut app = App::new();
        type_line(&mut app, "10 / 0");
        press(&mut app, KeyCode::Enter);

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Division by zero"));
        assert!(text.contains("Syntax Tree"));
    }
}
