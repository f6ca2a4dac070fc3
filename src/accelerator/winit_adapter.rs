//! Adapter to convert winit key events to our KeyInput type

use winit::keyboard::{Key, ModifiersState, NamedKey};

use super::types::{KeyInput, Modifiers};

/// Convert a winit logical key and modifier state to a [`KeyInput`]
///
/// Key labels follow DOM conventions so accelerators written for web
/// keyboard events ("Enter", "ArrowUp", "Space") match unchanged.
/// Returns None if the key cannot be mapped (e.g., dead keys).
pub fn key_input_from_winit(logical_key: &Key, modifiers: ModifiersState) -> Option<KeyInput> {
    let mods = Modifiers::new(
        modifiers.control_key(),
        modifiers.shift_key(),
        modifiers.alt_key(),
        modifiers.super_key(), // super = meta = cmd on macOS
    );

    let label = match logical_key {
        Key::Named(named) => named_key_label(*named)?.to_string(),
        Key::Character(s) => s.to_string(),
        _ => return None,
    };

    Some(KeyInput::new(label, mods))
}

fn named_key_label(named: NamedKey) -> Option<&'static str> {
    let label = match named {
        NamedKey::Enter => "Enter",
        NamedKey::Escape => "Escape",
        NamedKey::Tab => "Tab",
        NamedKey::Backspace => "Backspace",
        NamedKey::Delete => "Delete",
        NamedKey::Space => " ",

        // Arrows
        NamedKey::ArrowUp => "ArrowUp",
        NamedKey::ArrowDown => "ArrowDown",
        NamedKey::ArrowLeft => "ArrowLeft",
        NamedKey::ArrowRight => "ArrowRight",

        // Navigation
        NamedKey::Home => "Home",
        NamedKey::End => "End",
        NamedKey::PageUp => "PageUp",
        NamedKey::PageDown => "PageDown",
        NamedKey::Insert => "Insert",

        // Function keys
        NamedKey::F1 => "F1",
        NamedKey::F2 => "F2",
        NamedKey::F3 => "F3",
        NamedKey::F4 => "F4",
        NamedKey::F5 => "F5",
        NamedKey::F6 => "F6",
        NamedKey::F7 => "F7",
        NamedKey::F8 => "F8",
        NamedKey::F9 => "F9",
        NamedKey::F10 => "F10",
        NamedKey::F11 => "F11",
        NamedKey::F12 => "F12",

        _ => return None,
    };
    Some(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accelerator::platform::Platform;
    use crate::accelerator::{key_match, KeyEvent};

    #[test]
    fn test_character_key() {
        let input = key_input_from_winit(&Key::Character("s".into()), ModifiersState::CONTROL)
            .expect("should map");

        assert_eq!(input.key, "s");
        assert!(input.ctrl_key());
        assert!(!input.shift_key());
    }

    #[test]
    fn test_space_maps_to_space_character() {
        let input =
            key_input_from_winit(&Key::Named(NamedKey::Space), ModifiersState::empty())
                .expect("should map");
        assert_eq!(input.key, " ");
        assert!(key_match(&input, "EnterOrSpace", &Platform::Other).unwrap());
    }

    #[test]
    fn test_arrow_with_modifiers() {
        let input = key_input_from_winit(
            &Key::Named(NamedKey::ArrowLeft),
            ModifiersState::SHIFT | ModifiersState::ALT,
        )
        .expect("should map");

        assert_eq!(input.key, "ArrowLeft");
        assert!(input.shift_key());
        assert!(input.alt_key());
        assert!(!input.ctrl_key());
        assert!(key_match(&input, "Shift+Alt+Left", &Platform::Other).unwrap());
    }

    #[test]
    fn test_super_is_meta() {
        let input = key_input_from_winit(&Key::Character("n".into()), ModifiersState::SUPER)
            .expect("should map");
        assert!(input.meta_key());
        assert!(key_match(&input, "CmdOrCtrl+N", &Platform::Apple).unwrap());
        assert!(!key_match(&input, "CmdOrCtrl+N", &Platform::Other).unwrap());
    }

    #[test]
    fn test_function_keys() {
        let input = key_input_from_winit(&Key::Named(NamedKey::F5), ModifiersState::empty())
            .expect("should map");
        assert_eq!(input.key, "F5");
    }

    #[test]
    fn test_unmapped_keys() {
        assert!(
            key_input_from_winit(&Key::Named(NamedKey::F24), ModifiersState::empty()).is_none()
        );
        assert!(key_input_from_winit(&Key::Dead(None), ModifiersState::empty()).is_none());
    }
}
