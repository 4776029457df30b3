use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Result of feeding one key event to the shortcut recorder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capture {
    /// A bare modifier press; the pending shortcut is left alone.
    Ignored,
    /// Backspace; the shortcut is cleared.
    Cleared,
    /// Any other key, rendered as a canonical shortcut string.
    Shortcut(String),
}

/// Translate a raw key event into a shortcut capture.
///
/// A modifier key by itself (just Ctrl, Shift, Alt or Super) is ignored,
/// and Backspace clears the shortcut. Keypad state is deliberately not
/// encoded, so a key produces the same shortcut whether or not it came
/// from the numeric keypad.
pub fn capture(event: &KeyEvent) -> Capture {
    if matches!(event.code, KeyCode::Modifier(_)) {
        return Capture::Ignored;
    }

    if event.code == KeyCode::Backspace {
        return Capture::Cleared;
    }

    Capture::Shortcut(format_shortcut(event.code, event.modifiers))
}

/// Shortcut string for a pressed key, used to match against command
/// bindings. `None` for bare modifier presses, which never dispatch.
pub fn shortcut_for(event: &KeyEvent) -> Option<String> {
    if matches!(event.code, KeyCode::Modifier(_)) {
        return None;
    }

    Some(format_shortcut(event.code, event.modifiers))
}

/// Canonical display form of a key combination: modifier prefixes in
/// Ctrl, Alt, Shift, Super order, then the key name, joined with `+`.
pub fn format_shortcut(code: KeyCode, modifiers: KeyModifiers) -> String {
    let mut parts: Vec<String> = Vec::new();

    if modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }
    if modifiers.contains(KeyModifiers::SHIFT) {
        parts.push("Shift".to_string());
    }
    if modifiers.contains(KeyModifiers::SUPER) {
        parts.push("Super".to_string());
    }

    parts.push(key_name(code));
    parts.join("+")
}

fn key_name(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) if c.is_alphabetic() => c.to_uppercase().to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::F(n) => format!("F{n}"),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Backtab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Insert => "Insert".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        other => format!("{other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, ModifierKeyCode};

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn bare_modifiers_are_ignored() {
        let modifier_keys = [
            (ModifierKeyCode::LeftControl, KeyModifiers::CONTROL),
            (ModifierKeyCode::LeftShift, KeyModifiers::SHIFT),
            (ModifierKeyCode::LeftAlt, KeyModifiers::ALT),
            (ModifierKeyCode::LeftSuper, KeyModifiers::SUPER),
            (ModifierKeyCode::RightControl, KeyModifiers::CONTROL),
            (ModifierKeyCode::RightShift, KeyModifiers::SHIFT),
        ];

        for (key, modifiers) in modifier_keys {
            let event = press(KeyCode::Modifier(key), modifiers);
            assert_eq!(capture(&event), Capture::Ignored);
            assert_eq!(shortcut_for(&event), None);
        }
    }

    #[test]
    fn backspace_clears() {
        let event = press(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(capture(&event), Capture::Cleared);
    }

    #[test]
    fn backspace_clears_even_with_modifiers() {
        let event = press(KeyCode::Backspace, KeyModifiers::CONTROL);
        assert_eq!(capture(&event), Capture::Cleared);
    }

    #[test]
    fn ctrl_a_renders_as_ctrl_plus_a() {
        let event = press(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(
            capture(&event),
            Capture::Shortcut("Ctrl+A".to_string())
        );
    }

    #[test]
    fn modifier_prefixes_are_ordered() {
        let modifiers = KeyModifiers::SUPER
            | KeyModifiers::SHIFT
            | KeyModifiers::ALT
            | KeyModifiers::CONTROL;
        assert_eq!(
            format_shortcut(KeyCode::F(5), modifiers),
            "Ctrl+Alt+Shift+Super+F5"
        );
    }

    #[test]
    fn plain_keys_render_without_prefix() {
        assert_eq!(format_shortcut(KeyCode::Tab, KeyModifiers::NONE), "Tab");
        assert_eq!(format_shortcut(KeyCode::F(1), KeyModifiers::NONE), "F1");
        assert_eq!(
            format_shortcut(KeyCode::Char(' '), KeyModifiers::NONE),
            "Space"
        );
        assert_eq!(format_shortcut(KeyCode::Char('/'), KeyModifiers::NONE), "/");
    }

    #[test]
    fn capture_never_yields_an_empty_shortcut() {
        let combos = [
            (KeyCode::Char('x'), KeyModifiers::NONE),
            (KeyCode::Enter, KeyModifiers::SHIFT),
            (KeyCode::Delete, KeyModifiers::ALT),
            (KeyCode::PageDown, KeyModifiers::CONTROL | KeyModifiers::SHIFT),
        ];

        for (code, modifiers) in combos {
            match capture(&press(code, modifiers)) {
                Capture::Shortcut(s) => assert!(!s.is_empty()),
                other => panic!("expected a shortcut, got {other:?}"),
            }
        }
    }

    #[test]
    fn keypad_state_does_not_change_the_shortcut() {
        let plain = press(KeyCode::Char('5'), KeyModifiers::CONTROL);
        let keypad = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('5'),
            KeyModifiers::CONTROL,
            KeyEventKind::Press,
            KeyEventState::KEYPAD,
        );

        assert_eq!(capture(&plain), capture(&keypad));
        assert_eq!(capture(&keypad), Capture::Shortcut("Ctrl+5".to_string()));
    }

    #[test]
    fn dispatch_and_capture_agree() {
        let event = press(KeyCode::Char('k'), KeyModifiers::CONTROL);
        let Capture::Shortcut(captured) = capture(&event) else {
            panic!("expected a shortcut");
        };
        assert_eq!(shortcut_for(&event), Some(captured));
    }
}
