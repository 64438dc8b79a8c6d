use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::DirectionKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Steer(DirectionKey),
    Restart,
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => KeyAction::Steer(DirectionKey::Up),
            KeyCode::Down => KeyAction::Steer(DirectionKey::Down),
            KeyCode::Left => KeyAction::Steer(DirectionKey::Left),
            KeyCode::Right => KeyAction::Steer(DirectionKey::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Steer(DirectionKey::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::Steer(DirectionKey::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::Steer(DirectionKey::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => KeyAction::Steer(DirectionKey::Right),

            // Controls
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Restart,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(code: KeyCode, modifiers: KeyModifiers) -> KeyAction {
        InputHandler::new().handle_key_event(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(
            action(KeyCode::Up, KeyModifiers::NONE),
            KeyAction::Steer(DirectionKey::Up)
        );
        assert_eq!(
            action(KeyCode::Down, KeyModifiers::NONE),
            KeyAction::Steer(DirectionKey::Down)
        );
        assert_eq!(
            action(KeyCode::Left, KeyModifiers::NONE),
            KeyAction::Steer(DirectionKey::Left)
        );
        assert_eq!(
            action(KeyCode::Right, KeyModifiers::NONE),
            KeyAction::Steer(DirectionKey::Right)
        );
    }

    #[test]
    fn test_wasd_keys() {
        assert_eq!(
            action(KeyCode::Char('w'), KeyModifiers::NONE),
            KeyAction::Steer(DirectionKey::Up)
        );
        assert_eq!(
            action(KeyCode::Char('a'), KeyModifiers::NONE),
            KeyAction::Steer(DirectionKey::Left)
        );
        assert_eq!(
            action(KeyCode::Char('s'), KeyModifiers::NONE),
            KeyAction::Steer(DirectionKey::Down)
        );
        assert_eq!(
            action(KeyCode::Char('D'), KeyModifiers::SHIFT),
            KeyAction::Steer(DirectionKey::Right)
        );
    }

    #[test]
    fn test_controls() {
        assert_eq!(action(KeyCode::Char('q'), KeyModifiers::NONE), KeyAction::Quit);
        assert_eq!(action(KeyCode::Esc, KeyModifiers::NONE), KeyAction::Quit);
        assert_eq!(action(KeyCode::Char('c'), KeyModifiers::CONTROL), KeyAction::Quit);
        assert_eq!(
            action(KeyCode::Char('R'), KeyModifiers::SHIFT),
            KeyAction::Restart
        );
        assert_eq!(action(KeyCode::Char('x'), KeyModifiers::NONE), KeyAction::None);
    }
}
