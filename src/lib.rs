//! keymatch - keyboard accelerator matching
//!
//! This crate decides whether a keyboard event satisfies an accelerator
//! string such as `"CmdOrCtrl+Shift+S"` or `"EnterOrSpace"`, and provides a
//! small shortcut registry that dispatches callbacks from an event source.

pub mod accelerator;
pub mod config_paths;
pub mod shortcuts;
pub mod tracing;

// Re-export commonly used types
pub use accelerator::{
    key_match, parse_accelerator, AcceleratorPattern, HostPlatform, InvalidAccelerator, KeyEvent,
    KeyInput, Modifiers, Platform, PlatformDetector,
};
pub use shortcuts::{KeyboardBus, Shortcuts, Subscription};
