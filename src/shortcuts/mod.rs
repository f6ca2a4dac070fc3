//! Shortcut dispatch
//!
//! Wires accelerator matching to an event source: a [`Shortcuts`] registry
//! holds patterns and callbacks, and [`Shortcuts::subscribe`] attaches it to
//! a [`KeyboardBus`] for as long as the returned [`Subscription`] lives.
//!
//! ```ignore
//! let bus = KeyboardBus::new();
//! let mut shortcuts = Shortcuts::new(HostPlatform);
//! shortcuts.register("CmdOrCtrl+S", |_| save());
//! let _guard = shortcuts.subscribe(&bus);
//! bus.emit(&event);
//! ```

mod bus;
mod registry;

pub use bus::{KeyboardBus, ListenerId, Subscription};
pub use registry::Shortcuts;
