//! YAML configuration for shortcut files
//!
//! ```yaml
//! platform: auto          # auto | apple | other
//! bindings:
//!   - key: "CmdOrCtrl+S"
//!     command: save
//!   - key: "Option+F"
//!     command: find-word
//!     platform: apple     # only loaded on Apple platforms
//! ```
//!
//! Every accelerator is parsed when the file is loaded, so a typo such as
//! `"ctrl+"` fails the load instead of silently never matching.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::parser::{parse_accelerator, InvalidAccelerator};
use super::platform::{HostPlatform, Platform, PlatformDetector};
use super::types::{AcceleratorPattern, KeyEvent};

/// Root structure of a shortcut YAML file
#[derive(Debug, Deserialize)]
pub struct ShortcutFileConfig {
    #[serde(default)]
    pub platform: PlatformSetting,
    #[serde(default)]
    pub bindings: Vec<BindingConfig>,
}

/// A single binding entry from YAML
#[derive(Debug, Deserialize)]
pub struct BindingConfig {
    pub key: String,
    pub command: String,
    #[serde(default)]
    pub platform: Option<Platform>,
}

/// Which platform the Apple-only aliases resolve for
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformSetting {
    /// Ask the host
    #[default]
    Auto,
    Apple,
    Other,
}

impl PlatformSetting {
    pub fn resolve(self) -> Platform {
        match self {
            PlatformSetting::Auto => Platform::current(),
            PlatformSetting::Apple => Platform::Apple,
            PlatformSetting::Other => Platform::Other,
        }
    }
}

impl PlatformDetector for PlatformSetting {
    fn is_apple_platform(&self) -> bool {
        match self {
            PlatformSetting::Auto => HostPlatform.is_apple_platform(),
            PlatformSetting::Apple => true,
            PlatformSetting::Other => false,
        }
    }
}

impl FromStr for PlatformSetting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(PlatformSetting::Auto),
            "apple" | "mac" | "macos" => Ok(PlatformSetting::Apple),
            "other" | "linux" | "windows" => Ok(PlatformSetting::Other),
            _ => Err(format!(
                "unknown platform '{}', expected auto, apple or other",
                s
            )),
        }
    }
}

impl fmt::Display for PlatformSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlatformSetting::Auto => "auto",
            PlatformSetting::Apple => "apple",
            PlatformSetting::Other => "other",
        };
        write!(f, "{}", name)
    }
}

/// A validated binding: the accelerator as written, parsed, and its command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub key: String,
    pub accelerator: AcceleratorPattern,
    pub command: String,
}

/// A loaded shortcut file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutConfig {
    pub platform: Platform,
    pub bindings: Vec<Binding>,
}

impl ShortcutConfig {
    /// Commands whose accelerator matches `event`, in file order
    pub fn matching_commands<E: KeyEvent + ?Sized>(&self, event: &E) -> Vec<&str> {
        self.bindings
            .iter()
            .filter(|b| b.accelerator.matches(event))
            .map(|b| b.command.as_str())
            .collect()
    }
}

/// Load a shortcut file from disk
pub fn load_config_file(path: &Path) -> Result<ShortcutConfig, KeymapError> {
    let content = std::fs::read_to_string(path).map_err(|e| KeymapError::IoError(e.to_string()))?;

    parse_config_yaml(&content)
}

/// Parse a shortcut file from a YAML string
pub fn parse_config_yaml(yaml: &str) -> Result<ShortcutConfig, KeymapError> {
    let config: ShortcutFileConfig =
        serde_yaml::from_str(yaml).map_err(|e| KeymapError::ParseError(e.to_string()))?;

    let platform = config.platform.resolve();
    let mut bindings = Vec::with_capacity(config.bindings.len());

    for entry in config.bindings {
        // Skip if platform-specific and doesn't match the resolved platform
        if let Some(only) = entry.platform {
            if only != platform {
                tracing::debug!(key = %entry.key, "skipping binding for {:?}", only);
                continue;
            }
        }

        let accelerator = parse_accelerator(&entry.key, &platform)?;
        if accelerator.is_inert() {
            tracing::warn!(command = %entry.command, "binding can never fire on this platform");
        }
        bindings.push(Binding {
            key: entry.key,
            accelerator,
            command: entry.command,
        });
    }

    Ok(ShortcutConfig { platform, bindings })
}

/// Errors that can occur when loading shortcut files
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeymapError {
    IoError(String),
    ParseError(String),
    InvalidAccelerator(InvalidAccelerator),
}

impl From<InvalidAccelerator> for KeymapError {
    fn from(err: InvalidAccelerator) -> Self {
        KeymapError::InvalidAccelerator(err)
    }
}

impl fmt::Display for KeymapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeymapError::IoError(e) => write!(f, "IO error: {}", e),
            KeymapError::ParseError(e) => write!(f, "Parse error: {}", e),
            KeymapError::InvalidAccelerator(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for KeymapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KeymapError::InvalidAccelerator(e) => Some(e),
            _ => None,
        }
    }
}
