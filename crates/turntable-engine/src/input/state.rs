use std::collections::HashSet;
use std::hash::Hash;

use super::frame::InputFrame;
use super::types::{
    GamepadAxis, GamepadButton, GamepadButtonState, InputEvent, Key, KeyState, Modifiers,
    MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent,
};

/// Pixel wheel deltas are converted to lines at this rate.
const PIXELS_PER_LINE: f32 = 50.0;

/// The tracked gamepad. Sticks are `(x, y)` with Y positive down.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GamepadState {
    pub connected:    bool,
    pub left_stick:   (f32, f32),
    pub right_stick:  (f32, f32),
    pub buttons_down: HashSet<GamepadButton>,
}

impl GamepadState {
    pub fn button_down(&self, btn: GamepadButton) -> bool {
        self.buttons_down.contains(&btn)
    }

    fn set_axis(&mut self, axis: GamepadAxis, value: f32) {
        let value = if value.is_finite() { value.clamp(-1.0, 1.0) } else { 0.0 };
        let slot = match axis {
            GamepadAxis::LeftStickX => &mut self.left_stick.0,
            GamepadAxis::LeftStickY => &mut self.left_stick.1,
            GamepadAxis::RightStickX => &mut self.right_stick.0,
            GamepadAxis::RightStickY => &mut self.right_stick.1,
        };
        *slot = value;
    }
}

/// What is held right now: keys, mouse buttons, pad buttons and sticks,
/// plus where the cursor is.
///
/// [`apply_event`](Self::apply_event) keeps it current and records the
/// frame's edges into an [`InputFrame`].
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers:    Modifiers,
    pub focused:      bool,
    /// Logical pixels; `None` while the cursor is outside the window.
    pub pointer_pos:  Option<(f32, f32)>,
    pub keys_down:    HashSet<Key>,
    pub buttons_down: HashSet<MouseButton>,
    pub gamepad:      GamepadState,
}

/// Inserts into `held` and reports a press edge only if it was not held.
fn press<T: Copy + Eq + Hash>(held: &mut HashSet<T>, edges: &mut HashSet<T>, item: T) {
    if held.insert(item) {
        edges.insert(item);
    }
}

fn release<T: Copy + Eq + Hash>(held: &mut HashSet<T>, edges: &mut HashSet<T>, item: T) {
    if held.remove(&item) {
        edges.insert(item);
    }
}

impl InputState {
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match ev {
            InputEvent::ModifiersChanged(m) => self.modifiers = m,

            InputEvent::Focused(focused) => {
                self.focused = focused;
                // Releases happening while unfocused never reach us. The pad
                // is not tied to window focus.
                if !focused {
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                if let Some((px, py)) = self.pointer_pos.replace((x, y)) {
                    frame.pointer_delta.0 += x - px;
                    frame.pointer_delta.1 += y - py;
                }
            }
            InputEvent::PointerLeft => self.pointer_pos = None,

            InputEvent::Key { key, state, modifiers, .. } => {
                self.modifiers = modifiers;
                match state {
                    KeyState::Pressed => press(&mut self.keys_down, &mut frame.keys_pressed, key),
                    KeyState::Released => release(&mut self.keys_down, &mut frame.keys_released, key),
                }
            }

            InputEvent::PointerButton(PointerButtonEvent { button, state, x, y, modifiers }) => {
                self.pointer_pos = Some((x, y));
                self.modifiers = modifiers;
                match state {
                    MouseButtonState::Pressed => {
                        press(&mut self.buttons_down, &mut frame.buttons_pressed, button)
                    }
                    MouseButtonState::Released => {
                        release(&mut self.buttons_down, &mut frame.buttons_released, button)
                    }
                }
            }

            InputEvent::MouseWheel { delta, modifiers } => {
                self.modifiers = modifiers;
                frame.scroll_lines += delta.lines_y(PIXELS_PER_LINE);
            }

            // Both directions start from a neutral pad.
            InputEvent::GamepadConnected(connected) => {
                self.gamepad = GamepadState { connected, ..GamepadState::default() };
            }
            InputEvent::GamepadAxis { axis, value } => self.gamepad.set_axis(axis, value),
            InputEvent::GamepadButton { button, state } => match state {
                GamepadButtonState::Pressed => {
                    press(&mut self.gamepad.buttons_down, &mut frame.gamepad_pressed, button)
                }
                GamepadButtonState::Released => {
                    self.gamepad.buttons_down.remove(&button);
                }
            },
        }

        frame.push_event(ev);
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MouseWheelDelta;

    fn key(key: Key, state: KeyState, repeat: bool) -> InputEvent {
        InputEvent::Key { key, state, modifiers: Modifiers::default(), code: 0, repeat }
    }

    fn button(button: MouseButton, state: MouseButtonState) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button,
            state,
            x: 10.0,
            y: 20.0,
            modifiers: Modifiers::default(),
        })
    }

    #[test]
    fn key_press_and_release_transitions() {
        let mut s = InputState::default();
        let mut f = InputFrame::default();

        s.apply_event(&mut f, key(Key::ArrowUp, KeyState::Pressed, false));
        assert!(s.key_down(Key::ArrowUp));
        assert!(f.keys_pressed.contains(&Key::ArrowUp));

        f.clear();
        s.apply_event(&mut f, key(Key::ArrowUp, KeyState::Released, false));
        assert!(!s.key_down(Key::ArrowUp));
        assert!(f.keys_released.contains(&Key::ArrowUp));
        assert!(f.keys_pressed.is_empty());
    }

    #[test]
    fn repeats_show_up_in_key_downs_only() {
        let mut s = InputState::default();
        let mut f = InputFrame::default();

        s.apply_event(&mut f, key(Key::PageUp, KeyState::Pressed, false));
        s.apply_event(&mut f, key(Key::PageUp, KeyState::Pressed, true));
        s.apply_event(&mut f, key(Key::PageUp, KeyState::Pressed, true));

        assert_eq!(f.keys_pressed.len(), 1);
        assert_eq!(f.key_downs().count(), 3);
    }

    #[test]
    fn focus_loss_clears_held_sets_but_not_gamepad() {
        let mut s = InputState::default();
        let mut f = InputFrame::default();

        s.apply_event(&mut f, key(Key::Q, KeyState::Pressed, false));
        s.apply_event(&mut f, button(MouseButton::Left, MouseButtonState::Pressed));
        s.apply_event(&mut f, InputEvent::GamepadConnected(true));
        s.apply_event(&mut f, InputEvent::GamepadButton {
            button: GamepadButton::South,
            state: GamepadButtonState::Pressed,
        });

        s.apply_event(&mut f, InputEvent::Focused(false));
        assert!(s.keys_down.is_empty());
        assert!(s.buttons_down.is_empty());
        assert!(s.gamepad.button_down(GamepadButton::South));
    }

    #[test]
    fn pointer_delta_accumulates() {
        let mut s = InputState::default();
        let mut f = InputFrame::default();

        s.apply_event(&mut f, InputEvent::PointerMoved(PointerMoveEvent { x: 0.0, y: 0.0 }));
        assert_eq!(f.pointer_delta, (0.0, 0.0));
        s.apply_event(&mut f, InputEvent::PointerMoved(PointerMoveEvent { x: 3.0, y: 4.0 }));
        s.apply_event(&mut f, InputEvent::PointerMoved(PointerMoveEvent { x: 5.0, y: 1.0 }));
        assert_eq!(f.pointer_delta, (5.0, 1.0));
        assert_eq!(s.pointer_pos, Some((5.0, 1.0)));
    }

    #[test]
    fn wheel_accumulates_lines() {
        let mut s = InputState::default();
        let mut f = InputFrame::default();

        let m = Modifiers::default();
        s.apply_event(&mut f, InputEvent::MouseWheel { delta: MouseWheelDelta::Line { x: 0.0, y: 1.0 }, modifiers: m });
        s.apply_event(&mut f, InputEvent::MouseWheel { delta: MouseWheelDelta::Pixel { x: 0.0, y: -100.0 }, modifiers: m });
        assert_eq!(f.scroll_lines, -1.0);
    }

    #[test]
    fn gamepad_axes_are_clamped() {
        let mut s = InputState::default();
        let mut f = InputFrame::default();

        s.apply_event(&mut f, InputEvent::GamepadConnected(true));
        s.apply_event(&mut f, InputEvent::GamepadAxis { axis: GamepadAxis::RightStickX, value: 1.5 });
        s.apply_event(&mut f, InputEvent::GamepadAxis { axis: GamepadAxis::LeftStickY, value: -0.25 });
        s.apply_event(&mut f, InputEvent::GamepadAxis { axis: GamepadAxis::LeftStickX, value: f32::NAN });

        assert_eq!(s.gamepad.right_stick, (1.0, 0.0));
        assert_eq!(s.gamepad.left_stick, (0.0, -0.25));
    }

    #[test]
    fn gamepad_button_press_is_an_edge() {
        let mut s = InputState::default();
        let mut f = InputFrame::default();
        let press = InputEvent::GamepadButton {
            button: GamepadButton::South,
            state: GamepadButtonState::Pressed,
        };

        s.apply_event(&mut f, press.clone());
        assert!(f.gamepad_pressed.contains(&GamepadButton::South));

        f.clear();
        s.apply_event(&mut f, press);
        assert!(f.gamepad_pressed.is_empty());
    }

    #[test]
    fn gamepad_disconnect_resets_state() {
        let mut s = InputState::default();
        let mut f = InputFrame::default();

        s.apply_event(&mut f, InputEvent::GamepadConnected(true));
        s.apply_event(&mut f, InputEvent::GamepadAxis { axis: GamepadAxis::RightStickY, value: 0.9 });
        s.apply_event(&mut f, InputEvent::GamepadConnected(false));

        assert_eq!(s.gamepad, GamepadState::default());
    }
}
