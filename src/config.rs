//! Startup configuration: command line flags plus an optional `settings.toml`.
//!
//! Precedence is CLI > file > built-in default. The file is only ever read;
//! UI state (section, theme, playback) is not persisted.
//!
//! ```toml
//! audio_path = "/home/me/music/innocent-world.mp3"
//! start_dark = true
//! fade_ms = 300
//! window_width = 1280
//! window_height = 800
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::core::transition::DEFAULT_FADE;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Encore";

pub const DEFAULT_AUDIO_PATH: &str = "assets/sample.mp3";
pub const DEFAULT_WINDOW_SIZE: (f32, f32) = (1100.0, 720.0);

pub const HELP: &str = "\
encore - Mr.Children info panel

USAGE:
  encore [OPTIONS]

OPTIONS:
  --audio <path>     Sample track for the play button
  --dark             Start in dark mode
  --config <path>    Read settings from this file instead of the default
  --log <filter>     Log filter (ex: encore=debug), overrides RUST_LOG
  -h, --help         Print this help
";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid arguments: {0}")]
    Args(#[from] pico_args::Error),

    #[error("unexpected arguments: {0:?}")]
    Unexpected(Vec<String>),

    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Parsed command line.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Cli {
    pub help: bool,
    pub audio: Option<PathBuf>,
    pub dark: bool,
    pub config: Option<PathBuf>,
    pub log: Option<String>,
}

impl Cli {
    pub fn parse(mut args: pico_args::Arguments) -> Result<Self, ConfigError> {
        let cli = Cli {
            help: args.contains(["-h", "--help"]),
            audio: args.opt_value_from_str("--audio")?,
            dark: args.contains("--dark"),
            config: args.opt_value_from_str("--config")?,
            log: args.opt_value_from_str("--log")?,
        };

        let rest = args.finish();
        if !rest.is_empty() {
            return Err(ConfigError::Unexpected(
                rest.iter()
                    .map(|s| s.to_string_lossy().into_owned())
                    .collect(),
            ));
        }

        Ok(cli)
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::parse(pico_args::Arguments::from_env())
    }
}

/// Contents of `settings.toml`. Every key is optional.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub audio_path: Option<PathBuf>,
    pub start_dark: Option<bool>,
    pub fade_ms: Option<u64>,
    pub window_width: Option<f32>,
    pub window_height: Option<f32>,
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Read `explicit` if given (it must exist), else the per-user file if it
/// exists, else defaults.
pub fn load(explicit: Option<&Path>) -> Result<FileConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_from_path(path);
    }

    match default_config_path() {
        Some(path) if path.exists() => load_from_path(&path),
        _ => Ok(FileConfig::default()),
    }
}

pub fn load_from_path(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Final, resolved settings the app boots with.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub audio_path: PathBuf,
    pub start_dark: bool,
    pub fade: Duration,
    pub window_size: (f32, f32),
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            audio_path: PathBuf::from(DEFAULT_AUDIO_PATH),
            start_dark: false,
            fade: DEFAULT_FADE,
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

impl Settings {
    pub fn resolve(cli: &Cli, file: FileConfig) -> Self {
        let defaults = Settings::default();

        Self {
            audio_path: cli
                .audio
                .clone()
                .or(file.audio_path)
                .unwrap_or(defaults.audio_path),
            start_dark: cli.dark || file.start_dark.unwrap_or(defaults.start_dark),
            fade: file
                .fade_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.fade),
            window_size: (
                file.window_width.unwrap_or(defaults.window_size.0),
                file.window_height.unwrap_or(defaults.window_size.1),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use super::*;
    use tempfile::tempdir;

    fn args(list: &[&str]) -> pico_args::Arguments {
        pico_args::Arguments::from_vec(list.iter().map(OsString::from).collect())
    }

    #[test]
    fn no_flags_gives_empty_cli() {
        let cli = Cli::parse(args(&[])).expect("parse");
        assert_eq!(cli, Cli::default());
    }

    #[test]
    fn flags_are_parsed() {
        let cli = Cli::parse(args(&[
            "--audio",
            "song.mp3",
            "--dark",
            "--log",
            "encore=debug",
        ]))
        .expect("parse");

        assert_eq!(cli.audio, Some(PathBuf::from("song.mp3")));
        assert!(cli.dark);
        assert_eq!(cli.log.as_deref(), Some("encore=debug"));
        assert!(!cli.help);
    }

    #[test]
    fn stray_arguments_are_rejected() {
        let err = Cli::parse(args(&["--dark", "extra"])).expect_err("stray arg");
        assert!(matches!(err, ConfigError::Unexpected(rest) if rest == ["extra"]));
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let settings = Settings::resolve(&Cli::default(), FileConfig::default());
        assert_eq!(settings, Settings::default());
        assert!(!settings.start_dark);
    }

    #[test]
    fn cli_beats_file() {
        let cli = Cli {
            audio: Some("cli.mp3".into()),
            ..Cli::default()
        };
        let file = FileConfig {
            audio_path: Some("file.mp3".into()),
            start_dark: Some(true),
            fade_ms: Some(120),
            ..FileConfig::default()
        };

        let settings = Settings::resolve(&cli, file);
        assert_eq!(settings.audio_path, PathBuf::from("cli.mp3"));
        assert!(settings.start_dark);
        assert_eq!(settings.fade, Duration::from_millis(120));
    }

    #[test]
    fn load_reads_partial_file() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "start_dark = true\nwindow_width = 900.0\n").expect("write");

        let file = load(Some(&path)).expect("load");
        assert_eq!(file.start_dark, Some(true));
        assert_eq!(file.window_width, Some(900.0));
        assert_eq!(file.audio_path, None);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "fade_ms = \"slow\"").expect("write");

        assert!(matches!(
            load_from_path(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("missing.toml");

        assert!(matches!(load(Some(&path)), Err(ConfigError::Read { .. })));
    }
}
