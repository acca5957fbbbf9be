//! Terminal input backend.
//!
//! Wraps crossterm raw-mode key polling behind a small event vocabulary so
//! the runtime never sees crossterm types directly.

use std::io::{self, stdout};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode as CrosstermKeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

/// Key codes for keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Char(char),
    Escape,
}

/// Modifier key state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const fn none() -> Self {
        Self { ctrl: false, alt: false }
    }

    #[allow(dead_code)]
    pub const fn ctrl() -> Self {
        Self { ctrl: true, alt: false }
    }
}

/// Input event from the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub key: KeyCode,
    pub modifiers: Modifiers,
}

impl InputEvent {
    pub fn new(key: KeyCode, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    #[allow(dead_code)]
    pub fn key(key: KeyCode) -> Self {
        Self { key, modifiers: Modifiers::none() }
    }
}

/// Top-level input event: a key press or a terminal resize
#[derive(Debug, Clone, Copy)]
pub enum AppEvent {
    Key(InputEvent),
    Resize,
}

/// Trait for reading input events
pub trait InputSource {
    /// Poll for an input event with a timeout.
    /// Returns None if no event is available within the timeout.
    fn poll_event(&mut self, timeout: Duration) -> Option<AppEvent>;
}

/// Crossterm-backed input source
pub struct CrosstermInput;

impl CrosstermInput {
    pub fn new() -> Self {
        Self
    }

    /// Enter raw mode and the alternate screen
    pub fn start(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, cursor::Hide)?;
        Ok(())
    }

    /// Leave raw mode and the alternate screen
    pub fn stop(&mut self) -> io::Result<()> {
        execute!(stdout(), cursor::Show, LeaveAlternateScreen)?;
        disable_raw_mode()
    }
}

impl Default for CrosstermInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for CrosstermInput {
    fn poll_event(&mut self, timeout: Duration) -> Option<AppEvent> {
        if !event::poll(timeout).ok()? {
            return None;
        }
        match event::read().ok()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let code = match key.code {
                    CrosstermKeyCode::Char(c) => KeyCode::Char(c),
                    CrosstermKeyCode::Esc => KeyCode::Escape,
                    _ => return None,
                };
                let modifiers = Modifiers {
                    ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
                    alt: key.modifiers.contains(KeyModifiers::ALT),
                };
                Some(AppEvent::Key(InputEvent::new(code, modifiers)))
            }
            Event::Resize(_, _) => Some(AppEvent::Resize),
            _ => None,
        }
    }
}
