//! Keyboard Shortcuts
//!
//! Pure dispatch on key combination. Binding and DOM effects live in the
//! app and `leptos-keynav`.

use leptos_keynav::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl+Enter, honoured only while the add-input has focus
    AddFromInput,
    /// Ctrl+Backspace, anywhere
    ClearCompleted,
    /// ArrowUp / ArrowDown, anywhere
    MoveFocus(Direction),
}

/// Map a key (as in `KeyboardEvent.key`) and Ctrl state to a shortcut
pub fn classify(key: &str, ctrl: bool) -> Option<Shortcut> {
    match (key, ctrl) {
        ("Enter", true) => Some(Shortcut::AddFromInput),
        ("Backspace", true) => Some(Shortcut::ClearCompleted),
        ("ArrowUp", _) => Some(Shortcut::MoveFocus(Direction::Previous)),
        ("ArrowDown", _) => Some(Shortcut::MoveFocus(Direction::Next)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_combinations() {
        assert_eq!(classify("Enter", true), Some(Shortcut::AddFromInput));
        assert_eq!(classify("Backspace", true), Some(Shortcut::ClearCompleted));
        assert_eq!(classify("Enter", false), None);
        assert_eq!(classify("Backspace", false), None);
    }

    #[test]
    fn test_arrows_ignore_ctrl() {
        for ctrl in [false, true] {
            assert_eq!(classify("ArrowUp", ctrl), Some(Shortcut::MoveFocus(Direction::Previous)));
            assert_eq!(classify("ArrowDown", ctrl), Some(Shortcut::MoveFocus(Direction::Next)));
        }
    }

    #[test]
    fn test_other_keys() {
        assert_eq!(classify("a", true), None);
        assert_eq!(classify("Escape", false), None);
        assert_eq!(classify("ArrowLeft", false), None);
    }
}
