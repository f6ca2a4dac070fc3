//! Where keymatch looks for its files
//!
//! ```text
//! <config dir>/keymatch/
//!   shortcuts.yaml        default file for `keymatch dispatch`
//!   logs/keymatch.log.*   daily debug logs written by `tracing::init`
//! ```
//!
//! `<config dir>` is `$XDG_CONFIG_HOME` or `~/.config` on Unix and macOS, and
//! `%APPDATA%` on Windows. Nothing here creates the shortcut file; only the
//! logs directory is created on demand.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "keymatch";

/// `keymatch/` under the platform config directory, if one can be found
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// Shortcut file read by `keymatch dispatch` when `--config` is not given
pub fn shortcuts_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("shortcuts.yaml"))
}

/// Directory for the rolling log files
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    ensure_dir(&logs)?;
    Ok(logs)
}
