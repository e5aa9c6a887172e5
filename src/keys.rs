//! Key code classification
//!
//! Input arrives as bare integer codes (curses numbering). Each code is
//! classified exactly once into a [`KeyClass`] and the session matches on that.

use serde::{Deserialize, Serialize};

/// Integer key code as produced by the input source
pub type KeyCode = i32;

/// ASCII ESC
pub const KEY_ESC: KeyCode = 27;
/// ASCII DEL, sent by the backspace key
pub const KEY_DEL: KeyCode = 127;
/// curses `KEY_LEFT`
pub const KEY_LEFT: KeyCode = 260;
/// curses `KEY_RIGHT`
pub const KEY_RIGHT: KeyCode = 261;
/// Code for input with no curses-style equivalent; always unrecognized
pub const KEY_UNMAPPED: KeyCode = -1;

/// Key code for a typed character
///
/// Only ASCII maps to its own value. Wider code points would otherwise land
/// on special keys (U+0104 is 260, `KEY_LEFT`), so they become [`KEY_UNMAPPED`].
pub fn char_key_code(ch: char) -> KeyCode {
    if ch.is_ascii() {
        ch as KeyCode
    } else {
        KEY_UNMAPPED
    }
}

/// Cursor direction for navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// What a key code means to the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyClass {
    Quit,
    Navigate(Direction),
    Delete,
    /// ASCII letter, inserted silently
    AlphaPrintable(char),
    /// Any other printable or whitespace ASCII character
    OtherPrintable(char),
    Unrecognized,
}

/// The codes bound to the editor's special keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub quit: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
    pub delete: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: KEY_ESC,
            left: KEY_LEFT,
            right: KEY_RIGHT,
            delete: KEY_DEL,
        }
    }
}

impl KeyBindings {
    /// Classify a code; special keys win over character classes, in
    /// quit / left / right / delete order
    pub fn classify(&self, code: KeyCode) -> KeyClass {
        if code == self.quit {
            return KeyClass::Quit;
        }
        if code == self.left {
            return KeyClass::Navigate(Direction::Left);
        }
        if code == self.right {
            return KeyClass::Navigate(Direction::Right);
        }
        if code == self.delete {
            return KeyClass::Delete;
        }

        let Some(byte) = u8::try_from(code).ok().filter(u8::is_ascii) else {
            return KeyClass::Unrecognized;
        };

        if byte.is_ascii_alphabetic() {
            KeyClass::AlphaPrintable(char::from(byte))
        } else if is_print(byte) || is_space(byte) {
            KeyClass::OtherPrintable(char::from(byte))
        } else {
            KeyClass::Unrecognized
        }
    }
}

/// curses `isprint`: space through tilde
fn is_print(byte: u8) -> bool {
    (0x20..=0x7e).contains(&byte)
}

/// curses `isspace`: tab, newline, vertical tab, form feed, carriage return, space
///
/// Differs from `u8::is_ascii_whitespace`, which leaves out vertical tab.
fn is_space(byte: u8) -> bool {
    (0x09..=0x0d).contains(&byte) || byte == b' '
}
