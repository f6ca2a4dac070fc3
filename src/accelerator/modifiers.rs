//! Modifier token resolution
//!
//! Turns the `+`-separated prefix of an accelerator ("CmdOrCtrl", "Shift")
//! into [`Modifiers`] flags. Two aliases depend on the platform:
//!
//! | token                           | Apple | elsewhere     |
//! |---------------------------------|-------|---------------|
//! | `cmdorctrl`, `commandorcontrol` | Meta  | Ctrl          |
//! | `option`                        | Alt   | unsatisfiable |
//!
//! A non-Apple keyboard has no Option key, so a combination naming it can
//! never be pressed there.

use super::platform::PlatformDetector;
use super::types::Modifiers;

/// The closed set of modifier spellings an accelerator may use
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModifierToken {
    /// `cmd`, `command`
    Command,
    /// `ctrl`, `control`
    Control,
    /// `cmdorctrl`, `commandorcontrol`
    CommandOrControl,
    Alt,
    Option,
    Shift,
    /// `meta`, `super`
    Meta,
}

impl ModifierToken {
    /// Look up an already-lowercased token. Unknown spellings yield `None`.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "cmd" | "command" => Some(ModifierToken::Command),
            "ctrl" | "control" => Some(ModifierToken::Control),
            "cmdorctrl" | "commandorcontrol" => Some(ModifierToken::CommandOrControl),
            "alt" => Some(ModifierToken::Alt),
            "option" => Some(ModifierToken::Option),
            "shift" => Some(ModifierToken::Shift),
            "meta" | "super" => Some(ModifierToken::Meta),
            _ => None,
        }
    }

    /// Whether resolution depends on the platform
    pub fn is_platform_dependent(self) -> bool {
        matches!(self, ModifierToken::CommandOrControl | ModifierToken::Option)
    }

    /// The flag this token sets on the given platform, or `None` when the
    /// key does not exist there
    pub fn resolve(self, is_apple: bool) -> Option<Modifiers> {
        let mods = match self {
            ModifierToken::Command | ModifierToken::Meta => Modifiers::META,
            ModifierToken::Control => Modifiers::CTRL,
            ModifierToken::CommandOrControl => {
                if is_apple {
                    Modifiers::META
                } else {
                    Modifiers::CTRL
                }
            }
            ModifierToken::Alt => Modifiers::ALT,
            ModifierToken::Option if is_apple => Modifiers::ALT,
            ModifierToken::Option => return None,
            ModifierToken::Shift => Modifiers::SHIFT,
        };
        Some(mods)
    }
}

/// Fold lowercased modifier tokens into a flag set
///
/// Order and repetition do not matter. Unknown tokens are dropped. Returns
/// `None` when a token names a key the platform lacks (`option` off Apple).
pub fn resolve_modifiers<'a, I, P>(tokens: I, platform: &P) -> Option<Modifiers>
where
    I: IntoIterator<Item = &'a str>,
    P: PlatformDetector + ?Sized,
{
    let mut mods = Modifiers::NONE;
    // Only queried for platform-dependent aliases
    let mut is_apple = None;

    for token in tokens {
        let Some(modifier) = ModifierToken::parse(token) else {
            tracing::trace!(token, "ignoring unknown modifier token");
            continue;
        };
        let apple = modifier.is_platform_dependent()
            && *is_apple.get_or_insert_with(|| platform.is_apple_platform());
        match modifier.resolve(apple) {
            Some(flag) => mods |= flag,
            None => {
                tracing::trace!(token, "modifier unavailable on this platform");
                return None;
            }
        }
    }

    Some(mods)
}
