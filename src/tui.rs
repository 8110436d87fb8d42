//! TUI (Terminal User Interface) module for Hangman
//!
//! This module provides a full-screen interface using Ratatui.
//!
//! # State Machine
//! The UI follows these state transitions:
//! - `ChoosingDifficulty` → `Guessing` → `RoundOver` → back to `ChoosingDifficulty`
//! - `Esc` while guessing abandons the round and returns to the menu

use crate::difficulty::Difficulty;
use crate::drawing::{gallows, mood};
use crate::engine::{GuessOutcome, Round, RoundStatus};
use crate::game_state::{GameInterface, SessionSummary, UserAction};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const KEYBOARD_ROWS: [&str; 4] = ["abcdefg", "hijklmn", "opqrstu", "vwxyz"];

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

#[derive(Clone, Copy, PartialEq, Debug)]
enum KeyState {
    Unused,
    Hit,
    Miss,
}

impl KeyState {
    fn colors(self) -> (Color, Color) {
        match self {
            Self::Unused => (Color::DarkGray, Color::White),
            Self::Hit => (Color::Green, Color::Black),
            Self::Miss => (Color::Red, Color::Black),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum TuiState {
    ChoosingDifficulty { selected: usize },
    Guessing,
    RoundOver,
}

/// Copy of everything the screen shows about the current round.
#[derive(Debug, Default)]
struct RoundView {
    difficulty: Option<Difficulty>,
    revealed: String,
    keys: Vec<(char, KeyState)>,
    wrong_guesses: u8,
    remaining: u8,
    status: Option<RoundStatus>,
    target: String,
}

impl RoundView {
    fn capture(round: &Round, difficulty: Difficulty) -> Self {
        let keys = ('a'..='z')
            .map(|c| {
                let state = if !round.is_letter_used(c) {
                    KeyState::Unused
                } else if round.target().as_str().contains(c) {
                    KeyState::Hit
                } else {
                    KeyState::Miss
                };
                (c, state)
            })
            .collect();
        Self {
            difficulty: Some(difficulty),
            revealed: round.revealed_form(),
            keys,
            wrong_guesses: round.wrong_guesses(),
            remaining: round.remaining_attempts(),
            status: Some(round.status()),
            target: round.target().to_string(),
        }
    }

    fn key_state(&self, letter: char) -> KeyState {
        self.keys
            .iter()
            .find(|(c, _)| *c == letter)
            .map_or(KeyState::Unused, |(_, state)| *state)
    }
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and round display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    state: TuiState,
    view: RoundView,
    message: String,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete: alternate screen, cursor hidden");

        Ok(Self {
            terminal,
            state: TuiState::ChoosingDifficulty { selected: 0 },
            view: RoundView::default(),
            message: String::new(),
            error_message: String::new(),
            status: "Ready to start".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let state = self.state;
        let view = &self.view;
        let message = &self.message;
        let error_message = &self.error_message;
        let status = &self.status;
        self.terminal.draw(|f| {
            Self::render(f, state, view, message, error_message, status);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render(
        f: &mut Frame,
        state: TuiState,
        view: &RoundView,
        message: &str,
        error_message: &str,
        status: &str,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(11),   // Board or menu
                Constraint::Length(6), // Keyboard
                Constraint::Length(3), // Status line
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        match state {
            TuiState::ChoosingDifficulty { selected } => {
                Self::render_menu(f, chunks[1], selected, message, error_message);
            }
            TuiState::Guessing | TuiState::RoundOver => {
                Self::render_board(f, chunks[1], view, message, error_message);
            }
        }
        Self::render_keyboard(f, chunks[2], view);
        Self::render_status(f, chunks[3], status);
        Self::render_instructions(f, chunks[4], state);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("HANGMAN CHALLENGE")
            .style(HEADER_STYLE)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_menu(f: &mut Frame, area: Rect, selected: usize, message: &str, error: &str) {
        let mut lines = vec![
            Line::from(Span::styled("Choose a difficulty:", HEADER_STYLE)),
            Line::from(""),
        ];
        for (i, difficulty) in Difficulty::ALL.iter().enumerate() {
            let marker = if i == selected { "> " } else { "  " };
            let style = if i == selected {
                INFO_STYLE
            } else {
                Style::default()
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{marker}{}. {difficulty}", i + 1), style),
                Span::raw(format!("  ({})", difficulty.description())),
            ]));
        }
        lines.push(Line::from(""));
        if !message.is_empty() {
            lines.push(Line::from(Span::styled(message, MESSAGE_STYLE)));
        }
        if !error.is_empty() {
            lines.push(Line::from(Span::styled(error, ERROR_STYLE)));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("New Game").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_board(f: &mut Frame, area: Rect, view: &RoundView, message: &str, error: &str) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(24), Constraint::Min(20)])
            .split(area);

        let status = view.status.unwrap_or(RoundStatus::Playing);
        let mut drawing: Vec<Line> = gallows(view.wrong_guesses)
            .into_iter()
            .map(Line::from)
            .collect();
        drawing.push(Line::from(""));
        drawing.push(Line::from(Span::styled(
            mood(view.wrong_guesses, status),
            INFO_STYLE,
        )));
        f.render_widget(
            Paragraph::new(drawing).block(Block::default().borders(Borders::ALL)),
            halves[0],
        );

        let mut lines = Vec::new();
        if let Some(difficulty) = view.difficulty {
            lines.push(Line::from(Span::styled(
                format!("{difficulty} - {}", difficulty.description()),
                HEADER_STYLE,
            )));
            lines.push(Line::from(""));
        }

        let mut word_spans = Vec::new();
        for (revealed, actual) in view.revealed.chars().zip(view.target.chars()) {
            // After a loss every letter is shown; the ones never guessed stand out.
            let style = if status == RoundStatus::Lost && view.key_state(actual) == KeyState::Unused
            {
                ERROR_STYLE.add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            word_spans.push(Span::styled(
                format!(" {} ", revealed.to_ascii_uppercase()),
                style,
            ));
        }
        lines.push(Line::from(word_spans));
        lines.push(Line::from(""));
        lines.push(Line::from(format!("Attempts left: {}", view.remaining)));
        lines.push(Line::from(""));

        match status {
            RoundStatus::Won => {
                lines.push(Line::from(Span::styled(
                    "Congratulations! You won!",
                    SUCCESS_STYLE,
                )));
            }
            RoundStatus::Lost => {
                lines.push(Line::from(Span::styled("Game Over!", ERROR_STYLE)));
                lines.push(Line::from(Span::styled(
                    format!("The word was: {}", view.target.to_uppercase()),
                    ERROR_STYLE,
                )));
            }
            RoundStatus::Playing => {}
        }
        if !message.is_empty() {
            lines.push(Line::from(Span::styled(message, MESSAGE_STYLE)));
        }
        if !error.is_empty() {
            lines.push(Line::from(Span::styled(error, ERROR_STYLE)));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Word").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, halves[1]);
    }

    fn render_keyboard(f: &mut Frame, area: Rect, view: &RoundView) {
        let lines: Vec<Line> = KEYBOARD_ROWS
            .iter()
            .map(|row| {
                let mut spans = Vec::new();
                for letter in row.chars() {
                    let (bg, fg) = view.key_state(letter).colors();
                    spans.push(Span::styled(
                        format!(" {} ", letter.to_ascii_uppercase()),
                        Style::default().fg(fg).bg(bg),
                    ));
                    spans.push(Span::raw(" "));
                }
                Line::from(spans)
            })
            .collect();

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().title("Letters").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let text = match state {
            TuiState::ChoosingDifficulty { .. } => "UP/DOWN or 1-3: Select | ENTER: Start | ESC: Quit",
            TuiState::Guessing => "Type a letter to guess | ESC: New Game | CTRL-C: Quit",
            TuiState::RoundOver => "N/ENTER: New Game | ESC: Quit",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    /// Waits briefly for a key press. Releases, repeats and non-key events
    /// come back as `None`.
    fn next_key(&mut self) -> Result<Option<KeyEvent>, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                debug_log!(
                    "next_key() - Key event received: code={:?}, modifiers={:?}",
                    key.code,
                    key.modifiers
                );
                Ok(Some(key))
            }
            other => {
                debug_log!("next_key() - Ignoring event: {:?}", other);
                Ok(None)
            }
        }
    }

    fn is_ctrl_c(key: &KeyEvent) -> bool {
        key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
    }

    /// Menu key handling. `Some(None)` means quit.
    fn handle_menu_input(&mut self, key: KeyEvent, selected: usize) -> Option<Option<Difficulty>> {
        self.error_message.clear();
        let count = Difficulty::ALL.len();
        match key.code {
            KeyCode::Up => {
                self.state = TuiState::ChoosingDifficulty {
                    selected: (selected + count - 1) % count,
                };
            }
            KeyCode::Down | KeyCode::Tab => {
                self.state = TuiState::ChoosingDifficulty {
                    selected: (selected + 1) % count,
                };
            }
            KeyCode::Enter => return Some(Some(Difficulty::ALL[selected])),
            KeyCode::Esc => return Some(None),
            _ if Self::is_ctrl_c(&key) => return Some(None),
            KeyCode::Char(c) => match Difficulty::from_menu_input(&c.to_string()) {
                Some(difficulty) => return Some(Some(difficulty)),
                None if c == 'q' => return Some(None),
                None => self.error_message = format!("'{c}' is not a menu option"),
            },
            _ => {}
        }
        None
    }

    fn handle_guess_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        self.error_message.clear();
        if Self::is_ctrl_c(&key) {
            return Some(UserAction::Exit);
        }
        match key.code {
            KeyCode::Esc => {
                info_log!("handle_guess_input() - ESC pressed, abandoning round");
                Some(UserAction::NewGame)
            }
            KeyCode::Char(c) if Self::has_modifier_keys(&key) => {
                debug_log!("handle_guess_input() - Ignoring '{}' with modifier", c);
                None
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                Some(UserAction::Guess(c.to_ascii_lowercase()))
            }
            KeyCode::Char(c) => {
                self.error_message = format!("Only letters are allowed! ('{c}' is not a letter)");
                None
            }
            _ => None,
        }
    }

    fn handle_round_over_input(key: &KeyEvent) -> Option<UserAction> {
        if Self::is_ctrl_c(key) {
            return Some(UserAction::Exit);
        }
        match key.code {
            KeyCode::Char('n' | 'N') | KeyCode::Enter => Some(UserAction::NewGame),
            KeyCode::Esc | KeyCode::Char('q' | 'Q') => Some(UserAction::Exit),
            _ => None,
        }
    }
}

impl GameInterface for TuiInterface {
    fn choose_difficulty(&mut self) -> Option<Difficulty> {
        let selected = match self.state {
            TuiState::ChoosingDifficulty { selected } => selected,
            _ => 0,
        };
        self.state = TuiState::ChoosingDifficulty { selected };
        self.view = RoundView::default();
        self.status = "Choose a difficulty".to_string();

        loop {
            if self.draw().is_err() {
                return None;
            }
            let key = match self.next_key() {
                Ok(Some(key)) => key,
                Ok(None) => continue,
                Err(e) => {
                    debug_log!("choose_difficulty() - Input error: {}", e);
                    return None;
                }
            };
            let TuiState::ChoosingDifficulty { selected } = self.state else {
                return None;
            };
            if let Some(choice) = self.handle_menu_input(key, selected) {
                info_log!("choose_difficulty() - Choice: {:?}", choice);
                return choice;
            }
        }
    }

    fn display_round(&mut self, round: &Round, difficulty: Difficulty) {
        self.view = RoundView::capture(round, difficulty);
        self.state = if round.is_over() {
            TuiState::RoundOver
        } else {
            TuiState::Guessing
        };
        self.status = format!(
            "{} wrong, {} attempts left",
            round.wrong_guesses(),
            round.remaining_attempts()
        );
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }
            match self.next_key() {
                Ok(Some(key)) => {
                    if let Some(action) = self.handle_guess_input(key) {
                        info_log!("read_action() - Action received: {:?}", action);
                        return Some(action);
                    }
                }
                Ok(None) => {}
                Err(_e) => {
                    info_log!("read_action() - Error handling input, returning Exit");
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_outcome(&mut self, outcome: GuessOutcome, letter: char) {
        let letter = letter.to_ascii_uppercase();
        self.message = match outcome {
            GuessOutcome::Hit => format!("Yes! {letter} is in the word."),
            GuessOutcome::Miss => format!("No {letter} in this word."),
            GuessOutcome::Repeated => format!("{letter} was already used."),
            GuessOutcome::Won | GuessOutcome::Lost | GuessOutcome::RoundOver => String::new(),
            GuessOutcome::Invalid => format!("{letter} is not a letter."),
        };
    }

    fn display_round_over(&mut self, round: &Round) -> UserAction {
        self.state = TuiState::RoundOver;
        self.message.clear();
        self.status = match round.status() {
            RoundStatus::Won => "You won! Press N for a new game".to_string(),
            _ => "Game over. Press N for a new game".to_string(),
        };

        loop {
            if self.draw().is_err() {
                return UserAction::Exit;
            }
            match self.next_key() {
                Ok(Some(key)) => {
                    if let Some(action) = Self::handle_round_over_input(&key) {
                        return action;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    debug_log!("display_round_over() - Input error: {}", e);
                    return UserAction::Exit;
                }
            }
        }
    }

    fn display_new_game_message(&mut self, difficulty: Difficulty) {
        self.state = TuiState::Guessing;
        self.message = format!("New {difficulty} game: {}", difficulty.description());
        self.error_message.clear();
        self.status = "New game - guess a letter".to_string();
        self.draw_or_log();
    }

    fn display_exit_message(&mut self, summary: &SessionSummary) {
        self.message = format!("Won {}, lost {}. Exiting...", summary.won, summary.lost);
        self.status = "Exiting application...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordbank::Word;

    #[test]
    fn test_round_view_key_states() {
        let mut round = Round::new(Word::parse("cat").unwrap());
        round.guess('c');
        round.guess('z');
        let view = RoundView::capture(&round, Difficulty::Novice);
        assert_eq!(view.key_state('c'), KeyState::Hit);
        assert_eq!(view.key_state('z'), KeyState::Miss);
        assert_eq!(view.key_state('a'), KeyState::Unused);
        assert_eq!(view.revealed, "c__");
        assert_eq!(view.remaining, 5);
    }

    #[test]
    fn test_round_over_keys() {
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(
            TuiInterface::handle_round_over_input(&press(KeyCode::Char('n'))),
            Some(UserAction::NewGame)
        );
        assert_eq!(
            TuiInterface::handle_round_over_input(&press(KeyCode::Esc)),
            Some(UserAction::Exit)
        );
        assert_eq!(
            TuiInterface::handle_round_over_input(&press(KeyCode::Char('x'))),
            None
        );
        assert_eq!(
            TuiInterface::handle_round_over_input(&KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            )),
            Some(UserAction::Exit)
        );
    }
}
