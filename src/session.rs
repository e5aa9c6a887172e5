//! The editing session: one key code in, one buffer change and one cue out
//!
//! Letters are typed silently. Any other printable character reads back the
//! word just finished, or the whole sentence when it is a `.`. Moving the
//! cursor says the character stepped over, deleting says what was deleted,
//! and anything refused at the edge of the document plays the boundary tone.

use std::io;
use std::path::Path;

use crate::buffer::{Step, TextBuffer};
use crate::feedback::{Interval, Narrator, ToneGenerator};
use crate::keys::{char_key_code, Direction, KeyBindings, KeyClass, KeyCode};
use crate::persist::{self, OutputFile};
use crate::scan;
use crate::speakable::speakable_form;

/// Whether the input loop should keep feeding keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Anything that consumes key codes
pub trait KeyHandler {
    fn handle(&mut self, code: KeyCode) -> Flow;

    /// Feed every character of `text` as its key code, stopping early on `Stop`
    fn type_text(&mut self, text: &str) -> Flow {
        for ch in text.chars() {
            if self.handle(char_key_code(ch)) == Flow::Stop {
                return Flow::Stop;
            }
        }
        Flow::Continue
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// Owns the buffer and the output file; borrows the audio backends
///
/// If the session is dropped while still running, the buffer is written to
/// the output file on the way out.
pub struct EditingSession<'a> {
    buffer: TextBuffer,
    keys: KeyBindings,
    narrator: &'a dyn Narrator,
    tones: &'a dyn ToneGenerator,
    output: Option<OutputFile>,
    boundary: Interval,
    state: SessionState,
    save_error: Option<io::Error>,
}

impl<'a> EditingSession<'a> {
    /// A session over `buffer` with default keys and nowhere to save
    pub fn new(buffer: TextBuffer, narrator: &'a dyn Narrator, tones: &'a dyn ToneGenerator) -> Self {
        Self {
            buffer,
            keys: KeyBindings::default(),
            narrator,
            tones,
            output: None,
            boundary: Interval::boundary(),
            state: SessionState::Running,
            save_error: None,
        }
    }

    /// Start a session on `path`
    ///
    /// An existing file seeds the buffer, then the same path is truncated and
    /// kept open for the final write. Without a path nothing is saved.
    pub fn open(
        path: Option<&Path>,
        narrator: &'a dyn Narrator,
        tones: &'a dyn ToneGenerator,
    ) -> io::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::new(TextBuffer::new(), narrator, tones));
        };

        let seed = persist::read_seed(path)?;
        let output = OutputFile::create(path)?;
        Ok(Self::new(TextBuffer::with_text(&seed), narrator, tones).with_output(output))
    }

    pub fn with_keys(mut self, keys: KeyBindings) -> Self {
        self.keys = keys;
        self
    }

    pub fn with_output(mut self, output: OutputFile) -> Self {
        self.output = Some(output);
        self
    }

    /// Replace the interval played when a move or delete is refused
    pub fn with_boundary_tone(mut self, tone: Interval) -> Self {
        self.boundary = tone;
        self
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn content(&self) -> String {
        self.buffer.content()
    }

    pub fn cursor(&self) -> usize {
        self.buffer.cursor()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_terminated(&self) -> bool {
        self.state == SessionState::Terminated
    }

    // ========================================================================
    // Editing operations
    // ========================================================================

    /// Move back one character and say it, or play the boundary tone
    pub fn move_left(&mut self) -> bool {
        let step = self.buffer.move_left();
        self.announce_step(step)
    }

    /// Say the character under the cursor and move past it, or play the
    /// boundary tone
    pub fn move_right(&mut self) -> bool {
        let step = self.buffer.move_right();
        self.announce_step(step)
    }

    pub fn insert_char(&mut self, ch: char) {
        self.buffer.insert_char(ch);
    }

    /// Delete the character before the cursor; at the start, play the tone
    pub fn remove_char(&mut self) -> Option<char> {
        let removed = self.buffer.remove_char();
        if removed.is_none() {
            self.boundary_tone();
        }
        removed
    }

    /// Delete the character before the cursor and say what it was
    pub fn backspace(&mut self) {
        if let Some(ch) = self.remove_char() {
            self.announce(ch);
        }
    }

    /// Write the buffer out and stop accepting keys
    pub fn quit(&mut self) {
        self.state = SessionState::Terminated;
        if let Some(output) = self.output.as_mut() {
            if let Err(e) = output.commit(&self.buffer.content()) {
                tracing::error!("Failed to save {}: {}", output.path().display(), e);
                self.save_error = Some(e);
            }
        }
    }

    /// End the session, writing the buffer if that has not happened yet
    ///
    /// Returns the error from the save, if it failed.
    pub fn finish(mut self) -> io::Result<()> {
        if !self.is_terminated() {
            self.quit();
        }
        match self.save_error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    // ========================================================================
    // Feedback
    // ========================================================================

    fn announce_step(&self, step: Step) -> bool {
        match step {
            Step::Moved(ch) => {
                self.announce(ch);
                true
            }
            Step::AtBoundary => {
                self.boundary_tone();
                false
            }
        }
    }

    fn announce(&self, ch: char) {
        self.say(&speakable_form(ch));
    }

    fn say(&self, phrase: &str) {
        if let Err(e) = self.narrator.speak(phrase) {
            tracing::warn!("Failed to speak {:?}: {:#}", phrase, e);
        }
    }

    fn boundary_tone(&self) {
        if let Err(e) = self.tones.play_interval(&self.boundary) {
            tracing::warn!("Failed to play boundary tone: {:#}", e);
        }
    }
}

impl KeyHandler for EditingSession<'_> {
    fn handle(&mut self, code: KeyCode) -> Flow {
        if self.is_terminated() {
            tracing::debug!(code, "key after quit ignored");
            return Flow::Stop;
        }

        let class = self.keys.classify(code);
        tracing::debug!(code, ?class, cursor = self.buffer.cursor(), "key");

        match class {
            KeyClass::Quit => {
                self.quit();
                return Flow::Stop;
            }
            KeyClass::Navigate(Direction::Left) => {
                self.move_left();
            }
            KeyClass::Navigate(Direction::Right) => {
                self.move_right();
            }
            KeyClass::Delete => self.backspace(),
            KeyClass::AlphaPrintable(ch) => self.insert_char(ch),
            KeyClass::OtherPrintable(ch) => {
                self.insert_char(ch);
                let phrase = if ch == '.' {
                    scan::last_sentence(&self.buffer)
                } else {
                    scan::last_word(&self.buffer)
                };
                self.say(&phrase);
            }
            KeyClass::Unrecognized => {}
        }

        Flow::Continue
    }
}

impl Drop for EditingSession<'_> {
    fn drop(&mut self) {
        let Some(output) = self.output.as_mut() else {
            return;
        };
        if output.is_committed() {
            return;
        }
        tracing::info!("Session ended without quitting, saving {}", output.path().display());
        if let Err(e) = output.commit(&self.buffer.content()) {
            tracing::error!("Failed to save {}: {}", output.path().display(), e);
        }
    }
}
