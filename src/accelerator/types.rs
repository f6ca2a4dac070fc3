//! Core types for accelerator matching: Modifiers, AcceleratorPattern, KeyEvent

use std::fmt::{self, Write as _};

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

/// Modifier keys as a bitfield for efficient storage and comparison
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(0b0001);
    pub const SHIFT: Modifiers = Modifiers(0b0010);
    pub const ALT: Modifiers = Modifiers(0b0100);
    pub const META: Modifiers = Modifiers(0b1000); // Cmd on macOS, Win/Super elsewhere

    /// Create modifiers from individual flags
    pub const fn new(ctrl: bool, shift: bool, alt: bool, meta: bool) -> Self {
        let mut bits = 0u8;
        if ctrl {
            bits |= 0b0001;
        }
        if shift {
            bits |= 0b0010;
        }
        if alt {
            bits |= 0b0100;
        }
        if meta {
            bits |= 0b1000;
        }
        Modifiers(bits)
    }

    #[inline]
    pub const fn ctrl(self) -> bool {
        self.0 & 0b0001 != 0
    }

    #[inline]
    pub const fn shift(self) -> bool {
        self.0 & 0b0010 != 0
    }

    /// Check if alt/option is held
    #[inline]
    pub const fn alt(self) -> bool {
        self.0 & 0b0100 != 0
    }

    /// Check if meta (cmd/win/super) is held
    #[inline]
    pub const fn meta(self) -> bool {
        self.0 & 0b1000 != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Combine two modifier sets
    #[inline]
    pub const fn union(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 | other.0)
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl std::ops::BitOrAssign for Modifiers {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.ctrl() {
            parts.push("Ctrl");
        }
        if self.shift() {
            parts.push("Shift");
        }
        if self.alt() {
            parts.push("Alt");
        }
        if self.meta() {
            parts.push("Meta");
        }
        write!(f, "{}", parts.join("+"))
    }
}

impl Serialize for Modifiers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Modifiers", 4)?;
        state.serialize_field("ctrl", &self.ctrl())?;
        state.serialize_field("alt", &self.alt())?;
        state.serialize_field("shift", &self.shift())?;
        state.serialize_field("meta", &self.meta())?;
        state.end()
    }
}

/// A parsed accelerator: the modifier flags every alternative shares plus the
/// accepted terminal keys, lowercased, in the order they were written.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AcceleratorPattern {
    #[serde(flatten)]
    pub mods: Modifiers,
    pub keys: Vec<String>,
}

impl AcceleratorPattern {
    pub fn new(mods: Modifiers, keys: Vec<String>) -> Self {
        Self { mods, keys }
    }

    /// The pattern produced for blank input. No event key normalizes to the
    /// empty string, so it never matches.
    pub fn inert() -> Self {
        Self {
            mods: Modifiers::NONE,
            keys: vec![String::new()],
        }
    }

    pub fn is_inert(&self) -> bool {
        self.mods.is_empty() && self.keys.iter().all(|k| k.is_empty())
    }

    #[inline]
    pub fn ctrl(&self) -> bool {
        self.mods.ctrl()
    }

    #[inline]
    pub fn alt(&self) -> bool {
        self.mods.alt()
    }

    #[inline]
    pub fn shift(&self) -> bool {
        self.mods.shift()
    }

    #[inline]
    pub fn meta(&self) -> bool {
        self.mods.meta()
    }

    /// Whether the terminal key list accepts this (already normalized) key
    ///
    /// The empty key of an inert pattern accepts nothing, not even an event
    /// whose label is empty.
    pub fn accepts_key(&self, normalized: &str) -> bool {
        self.keys.iter().any(|k| !k.is_empty() && k == normalized)
    }
}

impl fmt::Display for AcceleratorPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.mods.is_empty() {
            write!(f, "{}+", self.mods)?;
        }
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                f.write_str("Or")?;
            }
            write_capitalized(f, key)?;
        }
        Ok(())
    }
}

/// Keys are stored lowercased; `"pageup"` displays as `"Pageup"`
fn write_capitalized(f: &mut fmt::Formatter<'_>, key: &str) -> fmt::Result {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => {
            for upper in first.to_uppercase() {
                f.write_char(upper)?;
            }
            f.write_str(chars.as_str())
        }
        None => Ok(()),
    }
}

/// Read-only view of a keyboard event
///
/// The key label follows DOM `KeyboardEvent.key` conventions ("Enter", " ",
/// "ArrowUp", "a").
pub trait KeyEvent {
    fn key(&self) -> &str;
    fn ctrl_key(&self) -> bool;
    fn alt_key(&self) -> bool;
    fn shift_key(&self) -> bool;
    fn meta_key(&self) -> bool;

    fn modifiers(&self) -> Modifiers {
        Modifiers::new(
            self.ctrl_key(),
            self.shift_key(),
            self.alt_key(),
            self.meta_key(),
        )
    }
}

/// An owned key event: a key label with modifiers
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyInput {
    pub key: String,
    pub mods: Modifiers,
}

impl KeyInput {
    pub fn new(key: impl Into<String>, mods: Modifiers) -> Self {
        Self {
            key: key.into(),
            mods,
        }
    }

    /// Create an event with no modifiers held
    pub fn plain(key: impl Into<String>) -> Self {
        Self::new(key, Modifiers::NONE)
    }
}

impl KeyEvent for KeyInput {
    fn key(&self) -> &str {
        &self.key
    }

    fn ctrl_key(&self) -> bool {
        self.mods.ctrl()
    }

    fn alt_key(&self) -> bool {
        self.mods.alt()
    }

    fn shift_key(&self) -> bool {
        self.mods.shift()
    }

    fn meta_key(&self) -> bool {
        self.mods.meta()
    }

    fn modifiers(&self) -> Modifiers {
        self.mods
    }
}

impl fmt::Display for KeyInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = if self.key == " " { "Space" } else { &self.key };
        if !self.mods.is_empty() {
            write!(f, "{}+{}", self.mods, key)
        } else {
            write!(f, "{}", key)
        }
    }
}
