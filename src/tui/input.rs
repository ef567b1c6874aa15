//! Discrete input events and their mapping from terminal events.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// One input event, independent of the terminal library.
///
/// Each screen decides what an event means; for example `Char('q')` quits
/// from the main menu but is typed text in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A printable character, including space.
    Char(char),
    Enter,
    Tab,
    Backspace,
    Up,
    Down,
    Esc,
    /// Ctrl+S.
    Save,
    /// Ctrl+C.
    Interrupt,
    /// The terminal was resized.
    Resize { width: u16, height: u16 },
}

impl Input {
    /// Maps a terminal event to an input, or `None` for events the app ignores.
    pub fn from_event(event: &Event) -> Option<Self> {
        match event {
            Event::Key(key) => Self::from_key(key),
            Event::Resize(width, height) => Some(Self::Resize {
                width: *width,
                height: *height,
            }),
            _ => None,
        }
    }

    /// Maps a key press. Releases and unbound keys yield `None`.
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('C') => Some(Self::Interrupt),
                KeyCode::Char('s') | KeyCode::Char('S') => Some(Self::Save),
                KeyCode::Char('h') => Some(Self::Backspace),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c) => Some(Self::Char(c)),
            KeyCode::Enter => Some(Self::Enter),
            KeyCode::Tab => Some(Self::Tab),
            KeyCode::Backspace => Some(Self::Backspace),
            KeyCode::Up => Some(Self::Up),
            KeyCode::Down => Some(Self::Down),
            KeyCode::Esc => Some(Self::Esc),
            _ => None,
        }
    }
}
