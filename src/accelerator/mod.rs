//! Accelerator matching
//!
//! This module decides whether a keyboard event satisfies a human-authored
//! accelerator string:
//! - Modifier aliases (`Ctrl`, `Cmd`, `Option`, `Super`...) resolve to four flags
//! - `CmdOrCtrl` is Cmd on Apple platforms and Ctrl elsewhere
//! - `"or"` joins alternatives: `"Ctrl+EnterOrSpace"`
//! - Modifiers must match exactly; extra held modifiers are a mismatch
//!
//! # Architecture
//!
//! ```text
//! "CmdOrCtrl+S" → parse_accelerator() → AcceleratorPattern ─┐
//!                                                           ├→ matches() → bool
//! winit key event → key_input_from_winit() → KeyInput ──────┘
//! ```
//!
//! # Matching
//!
//! ```ignore
//! let event = KeyInput::new("s", Modifiers::CTRL);
//! assert!(key_match(&event, "CmdOrCtrl+S", &Platform::Other)?);
//!
//! // Or parse once and reuse
//! let pattern = parse_accelerator("EnterOrSpace", &HostPlatform)?;
//! pattern.matches(&event);
//! ```

mod config;
mod matcher;
mod modifiers;
mod normalize;
mod parser;
mod platform;
mod types;
mod winit_adapter;

pub use config::{
    load_config_file, parse_config_yaml, Binding, BindingConfig, KeymapError, PlatformSetting,
    ShortcutConfig, ShortcutFileConfig,
};
pub use matcher::key_match;
pub use modifiers::{resolve_modifiers, ModifierToken};
pub use normalize::normalize_key;
pub use parser::{parse_accelerator, InvalidAccelerator};
pub use platform::{HostPlatform, Platform, PlatformDescriptor, PlatformDetector};
pub use types::{AcceleratorPattern, KeyEvent, KeyInput, Modifiers};
pub use winit_adapter::key_input_from_winit;
