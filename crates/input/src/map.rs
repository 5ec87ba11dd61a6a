//! Key mapping from terminal events to bowling actions.

use crate::types::{BowlingAction, PINS_PER_RACK};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to bowling actions.
pub fn handle_key_event(key: KeyEvent) -> Option<BowlingAction> {
    match key.code {
        // Setup
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('+') => {
            Some(BowlingAction::AddPlayer)
        }

        // Bowling
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => {
            Some(BowlingAction::Roll)
        }
        KeyCode::Char(c @ '0'..='9') => Some(BowlingAction::Pins(c as u8 - b'0')),
        KeyCode::Char('x') | KeyCode::Char('X') => Some(BowlingAction::Pins(PINS_PER_RACK)),
        KeyCode::Char('/') => Some(BowlingAction::Spare),

        // Restart
        KeyCode::Char('n') | KeyCode::Char('N') => Some(BowlingAction::NewGame),

        _ => None,
    }
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_setup_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('a'))),
            Some(BowlingAction::AddPlayer)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('+'))),
            Some(BowlingAction::AddPlayer)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('N'))),
            Some(BowlingAction::NewGame)
        );
    }

    #[test]
    fn test_roll_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(BowlingAction::Roll)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(BowlingAction::Roll)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('R'))),
            Some(BowlingAction::Roll)
        );
    }

    #[test]
    fn test_pin_keys() {
        for d in 0..=9u8 {
            let key = KeyEvent::from(KeyCode::Char((b'0' + d) as char));
            assert_eq!(handle_key_event(key), Some(BowlingAction::Pins(d)));
        }
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('x'))),
            Some(BowlingAction::Pins(10))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('/'))),
            Some(BowlingAction::Spare)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
