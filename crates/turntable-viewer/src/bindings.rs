//! Keyboard bindings.

use turntable_control::{Command, Direction};
use turntable_engine::input::Key;

/// What a key press asks the viewer to do.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Action {
    /// Forward to the view state.
    View(Command),
    /// Return the camera to the pose of the last reset.
    CameraHome,
    Close,
}

/// Maps a key-down (including auto-repeat) to an action.
pub fn action_for_key(key: Key) -> Option<Action> {
    let action = match key {
        Key::ArrowUp => Action::View(Command::Nudge(Direction::Up)),
        Key::ArrowDown => Action::View(Command::Nudge(Direction::Down)),
        Key::ArrowLeft => Action::View(Command::Nudge(Direction::Left)),
        Key::ArrowRight => Action::View(Command::Nudge(Direction::Right)),
        Key::PageUp => Action::View(Command::Nudge(Direction::Away)),
        Key::PageDown => Action::View(Command::Nudge(Direction::Toward)),
        Key::Q => Action::View(Command::ResetOrigin),
        Key::R => Action::View(Command::ResetHome),
        Key::Home => Action::CameraHome,
        Key::Escape => Action::Close,
        _ => return None,
    };
    Some(action)
}
