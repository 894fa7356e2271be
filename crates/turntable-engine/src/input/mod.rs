//! Keyboard, pointer and gamepad input.
//!
//! Nothing here exposes winit or gilrs types; `platform` converts their
//! events into [`InputEvent`]s for [`InputState::apply_event`].

mod frame;
pub(crate) mod platform;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::{GamepadState, InputState};
pub use types::{
    GamepadAxis, GamepadButton, GamepadButtonState, InputEvent, Key, KeyState, Modifiers,
    MouseButton, MouseButtonState, MouseWheelDelta, PointerButtonEvent, PointerMoveEvent,
};
