//! Matching key events against accelerators

use super::normalize::normalize_key;
use super::parser::{parse_accelerator, InvalidAccelerator};
use super::platform::PlatformDetector;
use super::types::{AcceleratorPattern, KeyEvent};

impl AcceleratorPattern {
    /// Check an event against this already-parsed pattern
    ///
    /// The event's modifiers must equal the pattern's exactly; holding an
    /// extra modifier is a mismatch.
    pub fn matches<E: KeyEvent + ?Sized>(&self, event: &E) -> bool {
        event.modifiers() == self.mods && self.accepts_key(&normalize_key(event.key()))
    }
}

/// Parse `pattern` and check whether `event` satisfies it
///
/// Blank patterns never match. An alternative without a terminal key is an
/// error.
pub fn key_match<E, P>(event: &E, pattern: &str, platform: &P) -> Result<bool, InvalidAccelerator>
where
    E: KeyEvent + ?Sized,
    P: PlatformDetector + ?Sized,
{
    let accelerator = parse_accelerator(pattern, platform)?;
    let matched = accelerator.matches(event);
    tracing::trace!(pattern, key = event.key(), matched, "key_match");
    Ok(matched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accelerator::platform::Platform;
    use crate::accelerator::types::{KeyInput, Modifiers};

    fn matches(pattern: &str, input: &KeyInput) -> bool {
        key_match(input, pattern, &Platform::Other).unwrap()
    }

    #[test]
    fn test_exact_modifiers_required() {
        let save = KeyInput::new("s", Modifiers::CTRL);
        assert!(matches("Ctrl+S", &save));

        let extra_shift = KeyInput::new("s", Modifiers::CTRL | Modifiers::SHIFT);
        assert!(!matches("Ctrl+S", &extra_shift));

        let missing_ctrl = KeyInput::plain("s");
        assert!(!matches("Ctrl+S", &missing_ctrl));
    }

    #[test]
    fn test_event_key_case_insensitive() {
        let upper = KeyInput::new("S", Modifiers::CTRL | Modifiers::SHIFT);
        assert!(matches("ctrl+shift+s", &upper));
    }

    #[test]
    fn test_event_key_normalized() {
        assert!(matches("Space", &KeyInput::plain(" ")));
        assert!(matches("Up", &KeyInput::plain("ArrowUp")));
        // Pattern keys are only lowercased
        assert!(!matches("ArrowUp", &KeyInput::plain("ArrowUp")));
    }

    #[test]
    fn test_matches_preparsed_pattern() {
        let pattern = parse_accelerator("EnterOrSpace", &Platform::Other).unwrap();
        assert!(pattern.matches(&KeyInput::plain("Enter")));
        assert!(pattern.matches(&KeyInput::plain(" ")));
        assert!(!pattern.matches(&KeyInput::plain("Escape")));
    }

    #[test]
    fn test_blank_never_matches() {
        for key in ["", " ", "a", "Enter"] {
            assert!(!matches("", &KeyInput::plain(key)));
            assert!(!matches("  ", &KeyInput::plain(key)));
        }
    }

    #[test]
    fn test_invalid_pattern_propagates() {
        let err = key_match(&KeyInput::plain("a"), "ctrl+", &Platform::Other).unwrap_err();
        assert_eq!(err.accelerator, "ctrl+");
    }
}
