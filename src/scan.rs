//! Backward scans for the word or sentence that was just completed
//!
//! Both scans walk left from the character before `ending_at` and stop on the
//! first character that breaks the run (or at index 0). The stopping character
//! itself is included in the slice and removed again by trimming, so a word
//! ending at index 11 of `"hello world "` is read as `" world "` and spoken as
//! `"world"`.
//!
//! While the cursor is still at 0 or 1 both scans return the first character
//! of the buffer, whatever `ending_at` says.

use crate::buffer::TextBuffer;

/// The word ending just before the cursor
pub fn last_word(buffer: &TextBuffer) -> String {
    last_word_ending_at(buffer, buffer.cursor().saturating_sub(1))
}

/// The word whose last character is at `ending_at`
pub fn last_word_ending_at(buffer: &TextBuffer, ending_at: usize) -> String {
    match scan_back(buffer, ending_at, char::is_alphabetic) {
        Scan::Short(first) => first,
        Scan::Span(text) => text.trim().to_string(),
    }
}

/// The sentence ending just before the cursor
pub fn last_sentence(buffer: &TextBuffer) -> String {
    last_sentence_ending_at(buffer, buffer.cursor().saturating_sub(1))
}

/// The sentence whose last character is at `ending_at`, without its dots
pub fn last_sentence_ending_at(buffer: &TextBuffer, ending_at: usize) -> String {
    match scan_back(buffer, ending_at, |ch| ch != '.') {
        Scan::Short(first) => first,
        Scan::Span(text) => text.trim_matches(|ch| ch == '.' || ch == ' ').to_string(),
    }
}

enum Scan {
    /// Cursor below 2: just the first character, untrimmed
    Short(String),
    /// Raw slice from the stopping point through `ending_at`
    Span(String),
}

fn scan_back(buffer: &TextBuffer, ending_at: usize, continues: impl Fn(char) -> bool) -> Scan {
    if buffer.cursor() < 2 {
        let first = buffer.char_at(0).map(String::from).unwrap_or_default();
        return Scan::Short(first);
    }

    let mut start = ending_at.saturating_sub(1);
    while start > 0 && buffer.char_at(start).is_some_and(&continues) {
        start -= 1;
    }

    Scan::Span(buffer.slice(start..ending_at + 1).into_owned())
}
