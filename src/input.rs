//! Terminal input mapping.
//!
//! Turns crossterm events into the handful of actions the game screen
//! understands. Space, Up, Enter and a left click anywhere on screen all
//! mean "activate".

use crate::core::game_loop::Command;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// What the front end should do with an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Forward to the game loop.
    Game(Command),
    /// Leave the program.
    Quit,
    /// Nothing to do.
    Ignore,
}

pub fn map_event(event: &Event) -> InputAction {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse),
        _ => InputAction::Ignore,
    }
}

pub fn map_key(key: &KeyEvent) -> InputAction {
    // Windows reports releases too; only presses count
    if key.kind == KeyEventKind::Release {
        return InputAction::Ignore;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputAction::Quit,
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => {
            InputAction::Game(Command::Activate)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => InputAction::Game(Command::Reset),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputAction::Quit,
        _ => InputAction::Ignore,
    }
}

pub fn map_mouse(mouse: &MouseEvent) -> InputAction {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => InputAction::Game(Command::Activate),
        _ => InputAction::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn click(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 12,
            row: 7,
            modifiers: KeyModifiers::empty(),
        }
    }

    #[test]
    fn test_activate_keys() {
        for code in [KeyCode::Char(' '), KeyCode::Up, KeyCode::Enter] {
            assert_eq!(map_key(&press(code)), InputAction::Game(Command::Activate));
        }
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(&press(KeyCode::Char('q'))), InputAction::Quit);
        assert_eq!(map_key(&press(KeyCode::Esc)), InputAction::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(&ctrl_c), InputAction::Quit);
    }

    #[test]
    fn test_reset_key() {
        assert_eq!(
            map_key(&press(KeyCode::Char('r'))),
            InputAction::Game(Command::Reset)
        );
    }

    #[test]
    fn test_release_is_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(&release), InputAction::Ignore);
    }

    #[test]
    fn test_left_click_activates() {
        let event = Event::Mouse(click(MouseEventKind::Down(MouseButton::Left)));
        assert_eq!(map_event(&event), InputAction::Game(Command::Activate));
    }

    #[test]
    fn test_other_mouse_events_ignored() {
        assert_eq!(
            map_mouse(&click(MouseEventKind::Down(MouseButton::Right))),
            InputAction::Ignore
        );
        assert_eq!(map_mouse(&click(MouseEventKind::Moved)), InputAction::Ignore);
    }

    #[test]
    fn test_plain_c_is_ignored() {
        assert_eq!(map_key(&press(KeyCode::Char('c'))), InputAction::Ignore);
    }
}
