//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Cancel,
    ClosePopup,
    ReopenPopup,
    NextSection,
    PrevSection,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Activate,
    Continue,
    None,
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Cancel,
        KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Char('x') | KeyCode::Esc => KeyAction::ClosePopup,
        KeyCode::Char('o') => KeyAction::ReopenPopup,
        KeyCode::Char('c') => KeyAction::Continue,
        KeyCode::Tab => KeyAction::NextSection,
        KeyCode::BackTab => KeyAction::PrevSection,
        KeyCode::Left | KeyCode::Char('h') => KeyAction::MoveLeft,
        KeyCode::Right | KeyCode::Char('l') => KeyAction::MoveRight,
        KeyCode::Up | KeyCode::Char('k') => KeyAction::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => KeyAction::MoveDown,
        KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Activate,
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_keys() {
        let event = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::Quit);
    }

    #[test]
    fn ctrl_c_cancels() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(event), KeyAction::Cancel);
    }

    #[test]
    fn plain_c_continues() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::Continue);
    }

    #[test]
    fn popup_keys() {
        let event = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::ClosePopup);

        let event = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::ClosePopup);

        let event = KeyEvent::new(KeyCode::Char('o'), KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::ReopenPopup);
    }

    #[test]
    fn section_keys() {
        let event = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::NextSection);

        let event = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(map_key(event), KeyAction::PrevSection);
    }

    #[test]
    fn movement_keys() {
        let event = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::MoveLeft);

        let event = KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::MoveRight);

        let event = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::MoveUp);

        let event = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::MoveDown);
    }

    #[test]
    fn activate_keys() {
        let event = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::Activate);

        let event = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::Activate);
    }

    #[test]
    fn unknown_key() {
        let event = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::None);
    }
}
