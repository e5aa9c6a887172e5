//! Command-line argument parsing for the editor
//!
//! Supports:
//! - Opening (or creating) the file to edit
//! - Overriding the speaking rate
//! - Silent mode that logs cues instead of playing them
//! - Pre-typing text before the interactive loop, or instead of it

use clap::Parser;
use std::path::PathBuf;

use crate::config::EditorConfig;

/// An editor you listen to
#[derive(Parser, Debug)]
#[command(name = "earshot", version, about = "An editor you listen to")]
pub struct CliArgs {
    /// File to edit; created on quit if it does not exist
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Speaking rate in words per minute
    #[arg(long, value_name = "WPM")]
    pub rate: Option<u32>,

    /// Log cues instead of playing them
    #[arg(long)]
    pub log_cues: bool,

    /// Type TEXT as if it had been entered at the keyboard before reading keys
    #[arg(long = "type", value_name = "TEXT")]
    pub type_text: Option<String>,

    /// Do not read the keyboard; stop after --type
    #[arg(long, requires = "type_text")]
    pub no_interactive: bool,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, Default)]
pub struct StartupConfig {
    pub path: Option<PathBuf>,
    /// Text fed to the session before the keyboard
    pub script: Option<String>,
    /// Whether to read the terminal at all
    pub interactive: bool,
    pub rate: Option<u32>,
    pub log_cues: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        if self.rate == Some(0) {
            return Err("Speaking rate must be positive".to_string());
        }
        if self.no_interactive && self.type_text.is_none() {
            return Err("--no-interactive needs --type".to_string());
        }

        Ok(StartupConfig {
            path: self.path,
            script: self.type_text,
            interactive: !self.no_interactive,
            rate: self.rate,
            log_cues: self.log_cues,
        })
    }
}

impl StartupConfig {
    /// Layer command-line overrides on top of the loaded config
    pub fn apply(&self, config: &mut EditorConfig) {
        if let Some(rate) = self.rate {
            config.speech.rate = rate;
        }
        if self.log_cues {
            config.log_cues = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> CliArgs {
        CliArgs {
            path: None,
            rate: None,
            log_cues: false,
            type_text: None,
            no_interactive: false,
        }
    }

    #[test]
    fn test_no_args_is_interactive_without_path() {
        let config = args().into_config().unwrap();
        assert!(config.path.is_none());
        assert!(config.interactive);
        assert!(config.script.is_none());
    }

    #[test]
    fn test_parse_from_command_line() {
        let parsed = CliArgs::try_parse_from([
            "earshot",
            "notes.txt",
            "--rate",
            "250",
            "--type",
            "hello ",
            "--no-interactive",
        ])
        .unwrap();
        let config = parsed.into_config().unwrap();
        assert_eq!(config.path, Some(PathBuf::from("notes.txt")));
        assert_eq!(config.rate, Some(250));
        assert_eq!(config.script.as_deref(), Some("hello "));
        assert!(!config.interactive);
    }

    #[test]
    fn test_no_interactive_requires_type() {
        assert!(CliArgs::try_parse_from(["earshot", "--no-interactive"]).is_err());

        let args = CliArgs {
            no_interactive: true,
            ..args()
        };
        assert!(args.into_config().is_err());
    }

    #[test]
    fn test_zero_rate_is_rejected() {
        let args = CliArgs {
            rate: Some(0),
            ..args()
        };
        assert!(args.into_config().is_err());
    }

    #[test]
    fn test_overrides_apply_to_config() {
        let startup = CliArgs {
            rate: Some(180),
            log_cues: true,
            ..args()
        }
        .into_config()
        .unwrap();

        let mut config = EditorConfig::default();
        startup.apply(&mut config);
        assert_eq!(config.speech.rate, 180);
        assert!(config.log_cues);
    }
}
