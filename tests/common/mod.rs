//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use keymatch::{KeyInput, Modifiers};

/// A key event with no modifiers held
pub fn key(label: &str) -> KeyInput {
    KeyInput::plain(label)
}

pub fn ctrl(label: &str) -> KeyInput {
    KeyInput::new(label, Modifiers::CTRL)
}

pub fn meta(label: &str) -> KeyInput {
    KeyInput::new(label, Modifiers::META)
}

pub fn alt(label: &str) -> KeyInput {
    KeyInput::new(label, Modifiers::ALT)
}

/// Every combination of the four modifier flags
pub fn all_modifier_sets() -> Vec<Modifiers> {
    (0u8..16)
        .map(|bits| Modifiers::new(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0))
        .collect()
}
