//! Configuration system tests
//!
//! Tests for config paths and loading the editor config from YAML.

use earshot::config::EditorConfig;
use earshot::config_paths;
use earshot::keys::{KEY_ESC, KEY_LEFT};
use tempfile::tempdir;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("earshot"));
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.to_string_lossy().ends_with("config.yaml"));
    }
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    if let (Some(config), Some(logs)) = (config_paths::config_dir(), config_paths::logs_dir()) {
        assert!(logs.starts_with(&config));
    }
}

// ========================================================================
// Editor Config Tests
// ========================================================================

#[test]
fn test_load_full_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(
        &path,
        r#"
speech:
  program: espeak-ng
  rate: 320
  rate_flag: "-s"
  args: ["-v", "en-us"]
tones:
  program: play
  root_pitch: 72
  intensity: 64
  channel: 1
keys:
  quit: 17
log_cues: true
"#,
    )
    .unwrap();

    let config = EditorConfig::load_from(&path);
    assert_eq!(config.speech.program, "espeak-ng");
    assert_eq!(config.speech.rate, 320);
    assert_eq!(config.speech.args, ["-v", "en-us"]);
    assert_eq!(config.tones.root_pitch, 72);
    assert_eq!(config.tones.intensity, 64);
    assert_eq!(config.tones.channel, 1);
    assert_eq!(config.keys.quit, 17);
    assert_eq!(config.keys.left, KEY_LEFT);
    assert!(config.log_cues);
}

#[test]
fn test_rate_flag_can_be_disabled() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "speech:\n  program: say\n  rate_flag: null\n").unwrap();

    let config = EditorConfig::load_from(&path);
    assert_eq!(config.speech.program, "say");
    assert_eq!(config.speech.rate_flag, None);
}

#[test]
fn test_empty_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "{}").unwrap();

    let config = EditorConfig::load_from(&path);
    assert_eq!(config, EditorConfig::default());
    assert_eq!(config.keys.quit, KEY_ESC);
}
