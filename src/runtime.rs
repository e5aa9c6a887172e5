//! Key sources and the loop that drains them into a [`KeyHandler`]

use std::collections::VecDeque;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode as TermKey, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use crate::keys::{char_key_code, KeyCode, KEY_DEL, KEY_ESC, KEY_LEFT, KEY_RIGHT, KEY_UNMAPPED};
use crate::session::{Flow, KeyHandler};

/// A blocking supply of key codes
pub trait KeySource {
    /// Next key code, or None when input has ended
    fn next_key(&mut self) -> Result<Option<KeyCode>>;
}

/// Feed keys from `source` to `handler` until it stops or input runs out
///
/// Returns `Flow::Stop` if the handler asked to stop, `Flow::Continue` if the
/// source ran dry first.
pub fn run<H, S>(handler: &mut H, source: &mut S) -> Result<Flow>
where
    H: KeyHandler + ?Sized,
    S: KeySource + ?Sized,
{
    while let Some(code) = source.next_key()? {
        if handler.handle(code) == Flow::Stop {
            return Ok(Flow::Stop);
        }
    }
    tracing::debug!("Input ended");
    Ok(Flow::Continue)
}

/// Replays a fixed sequence of codes
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    codes: VecDeque<KeyCode>,
}

impl ScriptedKeys {
    pub fn new(codes: impl IntoIterator<Item = KeyCode>) -> Self {
        Self {
            codes: codes.into_iter().collect(),
        }
    }

    /// One code per character of `text`; non-ASCII characters are unmapped
    pub fn from_text(text: &str) -> Self {
        Self::new(text.chars().map(char_key_code))
    }

    pub fn remaining(&self) -> usize {
        self.codes.len()
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> Result<Option<KeyCode>> {
        Ok(self.codes.pop_front())
    }
}

/// Puts the terminal in raw mode for as long as it lives
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn enable() -> Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            tracing::warn!("Failed to restore terminal: {}", e);
        }
    }
}

/// Key presses from the controlling terminal
///
/// Ctrl+C ends the input instead of being passed on.
pub struct TerminalKeys {
    _raw: RawModeGuard,
}

impl TerminalKeys {
    pub fn open() -> Result<Self> {
        Ok(Self {
            _raw: RawModeGuard::enable()?,
        })
    }
}

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> Result<Option<KeyCode>> {
        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == TermKey::Char('c') {
                return Ok(None);
            }
            return Ok(Some(key_code_from_event(&key)));
        }
    }
}

/// Translate a terminal key event into the curses numbering the editor uses
pub fn key_code_from_event(key: &KeyEvent) -> KeyCode {
    match key.code {
        TermKey::Left => KEY_LEFT,
        TermKey::Right => KEY_RIGHT,
        TermKey::Backspace => KEY_DEL,
        TermKey::Esc => KEY_ESC,
        TermKey::Enter => '\n' as KeyCode,
        TermKey::Tab => '\t' as KeyCode,
        TermKey::Char(ch) if key.modifiers.contains(KeyModifiers::CONTROL) && ch.is_ascii_alphabetic() => {
            // raw-mode control codes, 1..=26
            (ch.to_ascii_lowercase() as KeyCode) & 0x1f
        }
        TermKey::Char(ch) => char_key_code(ch),
        _ => KEY_UNMAPPED,
    }
}
