//! Editor configuration persistence
//!
//! Stores user preferences in `~/.config/earshot/config.yaml`. Every field is
//! optional in the file; anything missing takes its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::feedback::{Interval, DEFAULT_INTENSITY, DEFAULT_ROOT};
use crate::keys::KeyBindings;

/// Speech synthesizer invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// Program that reads a phrase on stdin and speaks it
    pub program: String,
    /// Speaking rate in words per minute
    pub rate: u32,
    /// Flag placed before the rate; None to not pass a rate at all
    pub rate_flag: Option<String>,
    /// Extra arguments, passed before the rate
    pub args: Vec<String>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            program: "espeak".to_string(),
            rate: 500,
            rate_flag: Some("-s".to_string()),
            args: Vec::new(),
        }
    }
}

/// Tone synthesizer invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneConfig {
    /// sox's `play`, or anything accepting the same arguments
    pub program: String,
    /// MIDI note of the lower voice
    pub root_pitch: u8,
    /// MIDI velocity, 0..=127
    pub intensity: u8,
    pub channel: u8,
}

impl Default for ToneConfig {
    fn default() -> Self {
        Self {
            program: "play".to_string(),
            root_pitch: DEFAULT_ROOT,
            intensity: DEFAULT_INTENSITY,
            channel: 0,
        }
    }
}

impl ToneConfig {
    /// The boundary tone in the configured voice
    pub fn boundary_interval(&self) -> Interval {
        Interval::boundary().voiced(self.root_pitch, self.intensity, self.channel)
    }
}

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub speech: SpeechConfig,
    pub tones: ToneConfig,
    pub keys: KeyBindings,
    /// Write cues to the log instead of playing them
    pub log_cues: bool,
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, or return defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
