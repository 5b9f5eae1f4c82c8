//! Input driver: raw terminal events to session commands.
//!
//! Two timing disciplines meet here. Gravity inside the session is tick
//! counted; directional auto-repeat is wall-clock measured through
//! [`RepeatGate`], which allows at most one directional command per
//! debounce window no matter how fast the terminal repeats key events.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{Command, MOVE_REPEAT_MS};

/// Map a key event to a session command.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('h') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('l') => Some(Command::MoveRight),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('j') => Some(Command::SoftDrop),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('k') => Some(Command::Rotate),
        KeyCode::Char(' ') => Some(Command::HardDrop),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::Hold),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reset),
        _ => None,
    }
}

/// Whether a key event should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Wall-clock debounce for directional commands.
///
/// One shared gate covers all three directions, matching the single
/// repeat timer of the movement handling this models: at most one
/// directional command passes per window, whichever direction it is.
#[derive(Debug, Clone)]
pub struct RepeatGate {
    window: Duration,
    last_pass: Option<Instant>,
}

impl RepeatGate {
    pub fn new() -> Self {
        Self::with_window(Duration::from_millis(MOVE_REPEAT_MS))
    }

    pub fn with_window(window: Duration) -> Self {
        Self {
            window,
            last_pass: None,
        }
    }

    /// Whether a directional command may fire at `now`. Passing consumes
    /// the window; blocked calls leave the gate untouched.
    pub fn try_pass(&mut self, now: Instant) -> bool {
        match self.last_pass {
            Some(last) if now.duration_since(last) < self.window => false,
            _ => {
                self.last_pass = Some(now);
                true
            }
        }
    }

    /// Forget the last pass (session reset).
    pub fn clear(&mut self) {
        self.last_pass = None;
    }
}

impl Default for RepeatGate {
    fn default() -> Self {
        Self::new()
    }
}
