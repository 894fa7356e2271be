//! gilrs → engine input translation.
//!
//! Only one gamepad is tracked at a time: the first one seen. When it
//! disconnects, the next event from any other pad adopts that pad.

use gilrs::{Axis, Button, EventType, GamepadId, Gilrs};

use crate::input::{GamepadAxis, GamepadButton, GamepadButtonState, InputEvent};

/// Polls the OS gamepad backend and emits engine `InputEvent`s.
pub(crate) struct GamepadSource {
    gilrs:  Gilrs,
    active: Option<GamepadId>,
}

impl GamepadSource {
    /// Opens the platform gamepad backend.
    ///
    /// Returns `None` (after logging) when no backend is available; the
    /// viewer then simply runs without gamepad support.
    pub(crate) fn open() -> Option<Self> {
        match Gilrs::new() {
            Ok(gilrs) => {
                let mut source = Self { gilrs, active: None };
                source.active = source
                    .gilrs
                    .gamepads()
                    .find(|(_, pad)| pad.is_connected())
                    .map(|(id, pad)| {
                        log::info!("gamepad connected: {}", pad.name());
                        id
                    });
                Some(source)
            }
            Err(e) => {
                log::warn!("gamepad support unavailable: {e}");
                None
            }
        }
    }

    /// Whether a pad was already connected when the backend opened.
    pub(crate) fn has_active(&self) -> bool {
        self.active.is_some()
    }

    /// Drains pending backend events into `out`.
    pub(crate) fn poll(&mut self, out: &mut Vec<InputEvent>) {
        while let Some(gilrs::Event { id, event, .. }) = self.gilrs.next_event() {
            match self.active {
                Some(active) if active != id => continue,
                Some(_) => {}
                None => {
                    if matches!(event, EventType::Disconnected) {
                        continue;
                    }
                    log::info!("gamepad connected: {}", self.gilrs.gamepad(id).name());
                    self.active = Some(id);
                    out.push(InputEvent::GamepadConnected(true));
                    if matches!(event, EventType::Connected) {
                        continue;
                    }
                }
            }

            if let Some(ev) = translate_event(event) {
                if ev == InputEvent::GamepadConnected(false) {
                    log::info!("gamepad disconnected");
                    self.active = None;
                }
                out.push(ev);
            }
        }
    }
}

/// Maps one gilrs event to an engine event.
///
/// gilrs reports stick Y as positive-up; it is negated here so that the
/// engine convention (positive-down) holds.
fn translate_event(event: EventType) -> Option<InputEvent> {
    match event {
        EventType::Connected => Some(InputEvent::GamepadConnected(true)),
        EventType::Disconnected => Some(InputEvent::GamepadConnected(false)),

        EventType::ButtonPressed(b, _) => Some(InputEvent::GamepadButton {
            button: map_button(b)?,
            state: GamepadButtonState::Pressed,
        }),
        EventType::ButtonReleased(b, _) => Some(InputEvent::GamepadButton {
            button: map_button(b)?,
            state: GamepadButtonState::Released,
        }),

        EventType::AxisChanged(axis, value, _) => {
            let (axis, value) = map_axis(axis, value)?;
            Some(InputEvent::GamepadAxis { axis, value })
        }

        _ => None,
    }
}

fn map_axis(axis: Axis, value: f32) -> Option<(GamepadAxis, f32)> {
    match axis {
        Axis::LeftStickX => Some((GamepadAxis::LeftStickX, value)),
        Axis::LeftStickY => Some((GamepadAxis::LeftStickY, -value)),
        Axis::RightStickX => Some((GamepadAxis::RightStickX, value)),
        Axis::RightStickY => Some((GamepadAxis::RightStickY, -value)),
        _ => None,
    }
}

fn map_button(b: Button) -> Option<GamepadButton> {
    let button = match b {
        Button::South => GamepadButton::South,
        Button::East => GamepadButton::East,
        Button::West => GamepadButton::West,
        Button::North => GamepadButton::North,
        Button::LeftTrigger => GamepadButton::LeftBumper,
        Button::RightTrigger => GamepadButton::RightBumper,
        Button::LeftTrigger2 => GamepadButton::LeftTrigger,
        Button::RightTrigger2 => GamepadButton::RightTrigger,
        Button::Select => GamepadButton::Select,
        Button::Start => GamepadButton::Start,
        Button::LeftThumb => GamepadButton::LeftStick,
        Button::RightThumb => GamepadButton::RightStick,
        Button::DPadUp => GamepadButton::DPadUp,
        Button::DPadDown => GamepadButton::DPadDown,
        Button::DPadLeft => GamepadButton::DPadLeft,
        Button::DPadRight => GamepadButton::DPadRight,
        Button::Unknown => return None,
        other => GamepadButton::Other(other as u32),
    };
    Some(button)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stick_y_is_flipped_to_positive_down() {
        assert_eq!(map_axis(Axis::RightStickY, 0.75), Some((GamepadAxis::RightStickY, -0.75)));
        assert_eq!(map_axis(Axis::LeftStickY, -0.2), Some((GamepadAxis::LeftStickY, 0.2)));
        assert_eq!(map_axis(Axis::LeftStickX, 0.5), Some((GamepadAxis::LeftStickX, 0.5)));
    }

    #[test]
    fn trigger_axes_are_ignored() {
        assert_eq!(map_axis(Axis::LeftZ, 1.0), None);
    }

    #[test]
    fn face_and_shoulder_buttons_map() {
        assert_eq!(map_button(Button::South), Some(GamepadButton::South));
        assert_eq!(map_button(Button::LeftTrigger), Some(GamepadButton::LeftBumper));
        assert_eq!(map_button(Button::RightTrigger2), Some(GamepadButton::RightTrigger));
        assert_eq!(map_button(Button::Unknown), None);
    }
}
