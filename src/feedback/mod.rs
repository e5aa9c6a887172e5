//! Auditory feedback: the only output the editor has
//!
//! The session talks to two capabilities:
//! - [`Narrator`] speaks a phrase and returns once it has been said
//! - [`ToneGenerator`] plays a two-note [`Interval`] and returns once it is over
//!
//! Backends:
//! - [`CommandNarrator`] / [`SoxToneGenerator`] drive external programs
//! - [`LoggingFeedback`] stays silent and writes each cue to the log
//! - [`Transcript`] records cues in memory for inspection

mod process;
mod transcript;

use std::fmt;
use std::time::Duration;

pub use process::{CommandNarrator, SoxToneGenerator};
pub use transcript::{Cue, Transcript};

/// MIDI note the lower voice of an interval sits on unless told otherwise
pub const DEFAULT_ROOT: u8 = 80;
/// MIDI velocity used unless told otherwise
pub const DEFAULT_INTENSITY: u8 = 30;

/// Speech synthesis
pub trait Narrator {
    /// Say `phrase`, blocking until playback has finished
    fn speak(&self, phrase: &str) -> anyhow::Result<()>;
}

/// Tone synthesis
pub trait ToneGenerator {
    /// Play `interval`, blocking until both notes have ended
    fn play_interval(&self, interval: &Interval) -> anyhow::Result<()>;
}

/// Two notes `semitones` apart, the upper one entering after `delay`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub semitones: i32,
    pub duration: Duration,
    /// MIDI note number of the lower voice
    pub root: u8,
    pub delay: Duration,
    /// MIDI velocity, 0..=127
    pub intensity: u8,
    /// MIDI channel
    pub channel: u8,
}

impl Interval {
    /// An interval with the default root, intensity and channel and no delay
    pub fn new(semitones: i32, duration: Duration) -> Self {
        Self {
            semitones,
            duration,
            root: DEFAULT_ROOT,
            delay: Duration::ZERO,
            intensity: DEFAULT_INTENSITY,
            channel: 0,
        }
    }

    /// The cue for a refused move or delete: a semitone for a tenth of a second
    pub fn boundary() -> Self {
        Self::new(1, Duration::from_millis(100))
    }

    /// The same interval on another root note, velocity and channel
    pub fn voiced(self, root: u8, intensity: u8, channel: u8) -> Self {
        Self {
            root,
            intensity,
            channel,
            ..self
        }
    }

    /// MIDI note number of the upper voice, clamped to the MIDI range
    pub fn upper(&self) -> u8 {
        (i32::from(self.root) + self.semitones).clamp(0, 127) as u8
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}+{} for {:?} (delay {:?}, intensity {}, channel {})",
            self.root, self.semitones, self.duration, self.delay, self.intensity, self.channel
        )
    }
}

/// Frequency in Hz of a MIDI note number (A4 = 69 = 440 Hz)
pub fn midi_to_hz(note: u8) -> f64 {
    440.0 * 2f64.powf((f64::from(note) - 69.0) / 12.0)
}

/// Silent backend that reports every cue through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingFeedback;

impl Narrator for LoggingFeedback {
    fn speak(&self, phrase: &str) -> anyhow::Result<()> {
        tracing::info!(target: "cue", "speak {:?}", phrase);
        Ok(())
    }
}

impl ToneGenerator for LoggingFeedback {
    fn play_interval(&self, interval: &Interval) -> anyhow::Result<()> {
        tracing::info!(target: "cue", "tone {}", interval);
        Ok(())
    }
}
