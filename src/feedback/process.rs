//! Backends that shell out to a speech synthesizer and to sox

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::Duration;

use anyhow::{bail, Context, Result};

use super::{midi_to_hz, Interval, Narrator, ToneGenerator};
use crate::config::{SpeechConfig, ToneConfig};

/// Pipes each phrase into a speech program (espeak by default) on stdin
///
/// Feeding stdin rather than argv keeps phrases such as `--` from being read
/// as options.
#[derive(Debug, Clone)]
pub struct CommandNarrator {
    program: PathBuf,
    args: Vec<String>,
}

impl CommandNarrator {
    pub fn from_config(config: &SpeechConfig) -> Result<Self> {
        let program = which::which(&config.program)
            .with_context(|| format!("speech program `{}` not found in PATH", config.program))?;

        let mut args = config.args.clone();
        if let Some(flag) = &config.rate_flag {
            args.push(flag.clone());
            args.push(config.rate.to_string());
        }

        tracing::info!("Speaking through {} {:?}", program.display(), args);
        Ok(Self { program, args })
    }
}

impl Narrator for CommandNarrator {
    fn speak(&self, phrase: &str) -> Result<()> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("failed to start {}", self.program.display()))?;

        // Dropping stdin closes it; the synthesizer speaks on EOF
        if let Some(mut stdin) = child.stdin.take() {
            writeln!(stdin, "{}", phrase).context("failed to send phrase to synthesizer")?;
        }

        let status = child.wait()?;
        if !status.success() {
            bail!("{} exited with {}", self.program.display(), status);
        }
        Ok(())
    }
}

/// Plays intervals through sox's `play`, one sine per voice
///
/// Intervals are played exactly as given; the configured voice is applied
/// where the interval is built (see `ToneConfig::boundary_interval`).
#[derive(Debug, Clone)]
pub struct SoxToneGenerator {
    program: PathBuf,
}

impl SoxToneGenerator {
    pub fn from_config(config: &ToneConfig) -> Result<Self> {
        let program = which::which(&config.program)
            .with_context(|| format!("tone program `{}` not found in PATH", config.program))?;

        tracing::info!("Playing tones through {}", program.display());
        Ok(Self { program })
    }
}

impl ToneGenerator for SoxToneGenerator {
    fn play_interval(&self, interval: &Interval) -> Result<()> {
        // sox has no notion of MIDI channels
        tracing::trace!(channel = interval.channel, "tone {}", interval);

        let status = Command::new(&self.program)
            .args(sox_args(interval))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .with_context(|| format!("failed to start {}", self.program.display()))?;

        if !status.success() {
            bail!("{} exited with {}", self.program.display(), status);
        }
        Ok(())
    }
}

fn seconds(duration: Duration) -> String {
    format!("{:.3}", duration.as_secs_f64())
}

/// Arguments for `play`: two sine voices on separate channels, the upper one
/// delayed, mixed down to mono
pub(crate) fn sox_args(interval: &Interval) -> Vec<String> {
    let total = interval.delay + interval.duration;
    let gain = f64::from(interval.intensity.min(127)) / 127.0;

    vec![
        "-q".into(),
        "-c".into(),
        "2".into(),
        "-n".into(),
        "synth".into(),
        seconds(total),
        "sine".into(),
        format!("{:.2}", midi_to_hz(interval.root)),
        "sine".into(),
        format!("{:.2}", midi_to_hz(interval.upper())),
        "delay".into(),
        "0".into(),
        seconds(interval.delay),
        "trim".into(),
        "0".into(),
        seconds(total),
        "remix".into(),
        "-".into(),
        "vol".into(),
        format!("{:.3}", gain),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sox_args_for_boundary_tone() {
        let args = sox_args(&Interval::boundary());
        let joined = args.join(" ");
        // note 80 and 81
        assert!(joined.contains("sine 830.61 sine 880.00"), "{}", joined);
        assert!(joined.contains("synth 0.100"), "{}", joined);
        assert!(joined.contains("delay 0 0.000"), "{}", joined);
        assert!(joined.ends_with("vol 0.236"), "{}", joined);
    }

    #[test]
    fn test_sox_args_include_delay_in_length() {
        let mut interval = Interval::new(7, Duration::from_millis(200));
        interval.delay = Duration::from_millis(50);
        let joined = sox_args(&interval).join(" ");
        assert!(joined.contains("synth 0.250"), "{}", joined);
        assert!(joined.contains("trim 0 0.250"), "{}", joined);
    }

    #[test]
    fn test_sox_args_play_explicit_default_root() {
        // a root set to 80 on purpose is not swapped for anything else
        let explicit = Interval::boundary().voiced(80, 30, 0);
        assert_eq!(sox_args(&explicit), sox_args(&Interval::boundary()));

        let low = Interval::boundary().voiced(69, 127, 0);
        let joined = sox_args(&low).join(" ");
        assert!(joined.contains("sine 440.00 sine 466.16"), "{}", joined);
        assert!(joined.ends_with("vol 1.000"), "{}", joined);
    }
}
