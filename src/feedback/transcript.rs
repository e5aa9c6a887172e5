//! In-memory record of every cue issued

use std::cell::RefCell;

use super::{Interval, Narrator, ToneGenerator};

/// One auditory cue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cue {
    Speech(String),
    Tone(Interval),
}

impl Cue {
    pub fn is_tone(&self) -> bool {
        matches!(self, Cue::Tone(_))
    }
}

/// Records cues instead of playing them
///
/// Implements both capabilities so one transcript can stand in for the
/// narrator and the tone generator at once.
#[derive(Debug, Default)]
pub struct Transcript {
    cues: RefCell<Vec<Cue>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, oldest first
    pub fn cues(&self) -> Vec<Cue> {
        self.cues.borrow().clone()
    }

    pub fn last(&self) -> Option<Cue> {
        self.cues.borrow().last().cloned()
    }

    /// The most recent phrase, if the most recent cue was speech
    pub fn last_spoken(&self) -> Option<String> {
        match self.last()? {
            Cue::Speech(phrase) => Some(phrase),
            Cue::Tone(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.cues.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.cues.borrow_mut().clear();
    }
}

impl Narrator for Transcript {
    fn speak(&self, phrase: &str) -> anyhow::Result<()> {
        self.cues.borrow_mut().push(Cue::Speech(phrase.to_string()));
        Ok(())
    }
}

impl ToneGenerator for Transcript {
    fn play_interval(&self, interval: &Interval) -> anyhow::Result<()> {
        self.cues.borrow_mut().push(Cue::Tone(*interval));
        Ok(())
    }
}
