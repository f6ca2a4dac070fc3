//! Platform detection for the Apple-only modifier aliases
//!
//! `CmdOrCtrl` resolves to Meta on Apple platforms and Ctrl elsewhere, and
//! `Option` only means Alt on Apple platforms. Which answer applies is decided
//! by a [`PlatformDetector`] handed to the parser, so callers and tests pick
//! the platform explicitly instead of the parser consulting the environment.

use serde::{Deserialize, Serialize};

/// Decides whether the Apple modifier aliases apply
pub trait PlatformDetector {
    fn is_apple_platform(&self) -> bool;
}

/// A fixed platform answer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Apple,
    Other,
}

impl Platform {
    /// The platform this process is running on
    pub fn current() -> Self {
        if HostPlatform.is_apple_platform() {
            Platform::Apple
        } else {
            Platform::Other
        }
    }
}

impl PlatformDetector for Platform {
    fn is_apple_platform(&self) -> bool {
        matches!(self, Platform::Apple)
    }
}

/// Platform identification as reported by a host environment
///
/// `os` is a structured OS name (`"macos"`, `"linux"`, `"iOS"`...). `legacy`
/// is a free-form platform string (`"MacIntel"`, `"Win32"`, `"iPhone"`) that
/// is only consulted when no structured name is available.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlatformDescriptor {
    pub os: Option<String>,
    pub legacy: Option<String>,
}

const APPLE_OS_NAMES: &[&str] = &["macos", "ios", "tvos", "watchos", "visionos"];
const APPLE_LEGACY_MARKERS: &[&str] = &["mac", "iphone", "ipad", "ipod"];

impl PlatformDescriptor {
    pub fn structured(os: impl Into<String>) -> Self {
        Self {
            os: Some(os.into()),
            legacy: None,
        }
    }

    pub fn legacy(platform: impl Into<String>) -> Self {
        Self {
            os: None,
            legacy: Some(platform.into()),
        }
    }

    /// Descriptor for the compile target of this process
    pub fn host() -> Self {
        Self::structured(std::env::consts::OS)
    }
}

impl PlatformDetector for PlatformDescriptor {
    fn is_apple_platform(&self) -> bool {
        if let Some(os) = &self.os {
            let os = os.to_lowercase();
            return APPLE_OS_NAMES.contains(&os.as_str());
        }
        if let Some(legacy) = &self.legacy {
            let legacy = legacy.to_lowercase();
            return APPLE_LEGACY_MARKERS.iter().any(|m| legacy.contains(m));
        }
        false
    }
}

/// Queries the running host every time it is asked; nothing is cached
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HostPlatform;

impl PlatformDetector for HostPlatform {
    fn is_apple_platform(&self) -> bool {
        PlatformDescriptor::host().is_apple_platform()
    }
}

impl<F> PlatformDetector for F
where
    F: Fn() -> bool,
{
    fn is_apple_platform(&self) -> bool {
        self()
    }
}
