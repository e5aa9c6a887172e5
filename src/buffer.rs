//! The document being edited and its single cursor
//!
//! `TextBuffer` is deliberately silent: every primitive reports what happened
//! and leaves the announcing to the session.

use ropey::Rope;
use std::borrow::Cow;
use std::ops::Range;

/// Outcome of a cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The cursor moved; carries the character that should be announced
    Moved(char),
    /// The cursor is already at the edge and nothing changed
    AtBoundary,
}

/// Character sequence plus an insertion point in `0..=len_chars()`
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    contents: Rope,
    cursor: usize,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a buffer with existing text; the cursor starts at 0
    pub fn with_text(text: &str) -> Self {
        Self {
            contents: Rope::from_str(text),
            cursor: 0,
        }
    }

    /// Current insertion point
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Length in characters
    #[inline]
    pub fn len_chars(&self) -> usize {
        self.contents.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    /// Character at `idx`, None past the end
    pub fn char_at(&self, idx: usize) -> Option<char> {
        self.contents.get_char(idx)
    }

    /// Text in a character range, clamped to the buffer
    pub fn slice(&self, range: Range<usize>) -> Cow<'_, str> {
        let end = range.end.min(self.len_chars());
        let start = range.start.min(end);
        Cow::from(self.contents.slice(start..end))
    }

    /// Full content as a String
    pub fn content(&self) -> String {
        self.contents.to_string()
    }

    /// Step the cursor back over one character
    ///
    /// Reports the character now under the cursor, i.e. the one just passed.
    pub fn move_left(&mut self) -> Step {
        if self.cursor == 0 {
            return Step::AtBoundary;
        }
        self.cursor -= 1;
        Step::Moved(self.contents.char(self.cursor))
    }

    /// Step the cursor forward over one character
    ///
    /// Reports the character that was under the cursor before advancing.
    pub fn move_right(&mut self) -> Step {
        if self.cursor >= self.len_chars() {
            return Step::AtBoundary;
        }
        let ch = self.contents.char(self.cursor);
        self.cursor += 1;
        Step::Moved(ch)
    }

    /// Insert at the cursor and advance past the new character
    pub fn insert_char(&mut self, ch: char) {
        self.contents.insert_char(self.cursor, ch);
        self.cursor += 1;
    }

    /// Delete the character before the cursor
    ///
    /// Returns None (and changes nothing) when the cursor is at the start.
    pub fn remove_char(&mut self) -> Option<char> {
        if self.cursor == 0 {
            return None;
        }
        let removed = self.contents.char(self.cursor - 1);
        self.contents.remove(self.cursor - 1..self.cursor);
        self.cursor -= 1;
        Some(removed)
    }
}
