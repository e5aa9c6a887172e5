//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use earshot::feedback::Cue;
use earshot::keys::{KeyCode, KEY_DEL, KEY_ESC, KEY_LEFT, KEY_RIGHT};
use earshot::{EditingSession, Flow, KeyHandler, TextBuffer, Transcript};

pub const LEFT: KeyCode = KEY_LEFT;
pub const RIGHT: KeyCode = KEY_RIGHT;
pub const DEL: KeyCode = KEY_DEL;
pub const ESC: KeyCode = KEY_ESC;

/// A session over `text` (cursor at 0) that records its cues into `transcript`
pub fn session_with<'a>(text: &str, transcript: &'a Transcript) -> EditingSession<'a> {
    EditingSession::new(TextBuffer::with_text(text), transcript, transcript)
}

/// Send `code` `times` times
pub fn press(session: &mut EditingSession<'_>, code: KeyCode, times: usize) -> Flow {
    let mut flow = Flow::Continue;
    for _ in 0..times {
        flow = session.handle(code);
    }
    flow
}

/// Last cue, lowercased if it was speech, `[tone]` if it was a tone
pub fn last_said(transcript: &Transcript) -> String {
    match transcript.last() {
        Some(Cue::Speech(phrase)) => phrase.to_lowercase(),
        Some(Cue::Tone(_)) => "[tone]".to_string(),
        None => String::new(),
    }
}

/// Type `text` into a fresh, unsaved session and return it
pub fn typed<'a>(text: &str, transcript: &'a Transcript) -> EditingSession<'a> {
    let mut session = session_with("", transcript);
    session.type_text(text);
    session
}
