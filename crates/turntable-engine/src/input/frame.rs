use std::collections::HashSet;

use super::types::{GamepadButton, InputEvent, Key, KeyState, MouseButton};

/// Edges and accumulated motion since the last redraw.
///
/// Cleared by the runtime after every `on_frame`. Held state lives in
/// [`InputState`](super::InputState).
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Every event of the frame, oldest first.
    pub events:           Vec<InputEvent>,
    /// First press only; auto-repeats do not count.
    pub keys_pressed:     HashSet<Key>,
    pub keys_released:    HashSet<Key>,
    pub buttons_pressed:  HashSet<MouseButton>,
    pub buttons_released: HashSet<MouseButton>,
    pub gamepad_pressed:  HashSet<GamepadButton>,
    /// Logical pixels.
    pub pointer_delta:    (f32, f32),
    /// Positive away from the user.
    pub scroll_lines:     f32,
}

impl InputFrame {
    /// Resets for the next frame, keeping the event buffer's allocation.
    pub fn clear(&mut self) {
        let mut events = std::mem::take(&mut self.events);
        events.clear();
        *self = Self { events, ..Self::default() };
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }

    /// Keys in the order they went down, auto-repeats included.
    pub fn key_downs(&self) -> impl Iterator<Item = Key> + '_ {
        self.events.iter().filter_map(|ev| match ev {
            InputEvent::Key { key, state: KeyState::Pressed, .. } => Some(*key),
            _ => None,
        })
    }
}
