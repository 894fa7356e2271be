use glam::Vec2;

/// One frame's worth of gamepad input.
///
/// Stick axes follow the standard gamepad layout: `x` positive right, `y`
/// positive *down*, both in `[-1, 1]`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct GamepadSnapshot {
    pub left_stick:  Vec2,
    pub right_stick: Vec2,

    /// Whether the bottom face button (A / Cross) is currently held.
    pub south: bool,
}

impl GamepadSnapshot {
    /// Returns `value` when it lies strictly outside the deadzone, else `None`.
    #[inline]
    pub fn gated(value: f32, deadzone: f32) -> Option<f32> {
        (value.abs() > deadzone).then_some(value)
    }
}
