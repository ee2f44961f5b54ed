//! Where to find the playerPrefs file.
//!
//! Precedence, highest first:
//!
//! 1. `--file` on the command line (or `PLAYERPREFS_PATH`).
//! 2. `prefs.path` in the config file.
//! 3. The game's fixed location for this platform.
//!
//! Nothing is searched for; each step names exactly one path.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::CliConfig;

/// Path segments below `LocalLow` shared by every platform.
const GAME_SUBDIR: [&str; 3] = ["Innersloth", "Among Us", "playerPrefs"];

/// Steam app id of the game, naming its Proton prefix on Linux.
#[cfg(target_os = "linux")]
const STEAM_APP_ID: &str = "945360";

#[derive(Debug, Error, PartialEq, Eq)]
#[error("no playerPrefs path given and no default location on this platform; pass --file")]
pub struct NoPrefsPath;

/// Picks the file to operate on.
///
/// # Errors
///
/// Returns [`NoPrefsPath`] when neither `explicit` nor the config names a
/// path and the platform has no default location.
pub fn resolve_prefs_path(
    explicit: Option<&Path>,
    config: &CliConfig,
) -> Result<PathBuf, NoPrefsPath> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| config.prefs.path.clone())
        .or_else(default_prefs_path)
        .ok_or(NoPrefsPath)
}

/// The game's own location for the file on this platform.
pub fn default_prefs_path() -> Option<PathBuf> {
    platform_local_low().map(|dir| GAME_SUBDIR.iter().fold(dir, |p, seg| p.join(seg)))
}

fn platform_local_low() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("USERPROFILE")
            .map(|home| PathBuf::from(home).join("AppData").join("LocalLow"))
    }

    #[cfg(target_os = "linux")]
    {
        // The Windows build running under Steam Proton.
        std::env::var_os("HOME").map(|home| {
            PathBuf::from(home)
                .join(".local/share/Steam/steamapps/compatdata")
                .join(STEAM_APP_ID)
                .join("pfx/drive_c/users/steamuser/AppData/LocalLow")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux")))]
    {
        None
    }
}
