//! TOML configuration for the `playerprefs` tool.
//!
//! Read from the platform-appropriate config file:
//! - Windows:  `%APPDATA%\playerprefs\config.toml`
//! - Linux:    `~/.config/playerprefs/config.toml`
//! - macOS:    `~/Library/Application Support/playerprefs/config.toml`
//!
//! ```toml
//! [prefs]
//! path = "/home/me/games/playerPrefs"
//!
//! [logging]
//! level = "debug"
//! ```
//!
//! Every key is optional.  A missing file is the same as an empty one.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    #[serde(default)]
    pub prefs: PrefsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the playerPrefs file lives.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PrefsConfig {
    /// Overrides the platform's default game location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `"warn"` or `"prefs_core=debug"`.
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Resolves the full path to the default config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot be
/// determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    platform_config_dir()
        .map(|dir| dir.join("config.toml"))
        .ok_or(ConfigError::NoPlatformConfigDir)
}

/// Loads the config from `path`, or from [`config_file_path`] when `path` is
/// `None`.  A file that does not exist yields [`CliConfig::default`].
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config(path: Option<&Path>) -> Result<CliConfig, ConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => config_file_path()?,
    };

    match std::fs::read_to_string(&path) {
        Ok(content) => Ok(toml::from_str(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(CliConfig::default()),
        Err(e) => Err(ConfigError::Io { path, source: e }),
    }
}

/// Resolves the platform config base directory, including the `playerprefs`
/// subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("playerprefs"))
    }

    #[cfg(target_os = "linux")]
    {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("playerprefs"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("playerprefs")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_no_path_and_warn_level() {
        let cfg = CliConfig::default();
        assert_eq!(cfg.prefs.path, None);
        assert_eq!(cfg.logging.level, "warn");
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let cfg: CliConfig = toml::from_str("").expect("empty is valid");
        assert_eq!(cfg, CliConfig::default());
    }

    #[test]
    fn test_partial_toml_overrides_only_given_keys() {
        // Arrange
        let toml_str = r#"
[prefs]
path = "/games/playerPrefs"
"#;

        // Act
        let cfg: CliConfig = toml::from_str(toml_str).expect("deserialize partial");

        // Assert
        assert_eq!(cfg.prefs.path, Some(PathBuf::from("/games/playerPrefs")));
        assert_eq!(cfg.logging.level, "warn");
    }

    #[test]
    fn test_round_trip_omits_absent_path() {
        let cfg = CliConfig::default();
        let toml_str = toml::to_string_pretty(&cfg).expect("serialize");
        assert!(!toml_str.contains("path"), "None path must be omitted");
        let restored: CliConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(restored, cfg);
    }

    #[test]
    fn test_load_config_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config(Some(&dir.path().join("config.toml"))).expect("missing is ok");
        assert_eq!(cfg, CliConfig::default());
    }

    #[test]
    fn test_load_config_reads_file() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nlevel = \"debug\"\n").unwrap();

        // Act
        let cfg = load_config(Some(&path)).expect("load");

        // Assert
        assert_eq!(cfg.logging.level, "debug");
    }

    #[test]
    fn test_load_config_invalid_toml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[[[ not valid toml").unwrap();
        assert!(matches!(load_config(Some(&path)), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_config_file_path_ends_with_config_toml() {
        // NoPlatformConfigDir is acceptable in a stripped CI environment.
        if let Ok(path) = config_file_path() {
            assert!(path.ends_with("config.toml"), "got {path:?}");
            let parent = path.parent().and_then(Path::file_name);
            assert_eq!(parent, Some(std::ffi::OsStr::new("playerprefs")));
        }
    }
}
