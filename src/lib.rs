//! earshot - an eyes-free text editor
//!
//! Every keystroke edits a single in-memory buffer and the only output is
//! sound: spoken words, sentences and characters, plus a short two-note tone
//! whenever the cursor hits the edge of the document.
//!
//! ```text
//! KeySource → EditingSession::handle() → TextBuffer + scan → Narrator / ToneGenerator
//!                                      ↘ (on quit) OutputFile
//! ```

pub mod buffer;
pub mod cli;
pub mod config;
pub mod config_paths;
pub mod feedback;
pub mod keys;
pub mod persist;
pub mod runtime;
pub mod scan;
pub mod session;
pub mod speakable;
pub mod tracing;

// Re-export commonly used types
pub use buffer::TextBuffer;
pub use config::EditorConfig;
pub use feedback::{Cue, Interval, Narrator, ToneGenerator, Transcript};
pub use keys::{KeyBindings, KeyClass, KeyCode};
pub use session::{EditingSession, Flow, KeyHandler};
