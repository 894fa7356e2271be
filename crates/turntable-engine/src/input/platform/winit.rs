//! winit → engine input translation.

use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, KeyEvent, MouseButton as WinitButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};
use winit::window::Window;

use crate::input::{
    InputEvent, InputState, Key, KeyState, Modifiers, MouseButton, MouseButtonState,
    MouseWheelDelta, PointerButtonEvent, PointerMoveEvent,
};

/// Converts the input-carrying subset of winit window events.
///
/// winit 0.30 attaches neither modifiers nor cursor position to button and
/// key events, so both are taken from `state`.
pub(crate) fn translate_window_event(
    window: &Window,
    state: &InputState,
    event: &WindowEvent,
) -> Option<InputEvent> {
    let mods = state.modifiers;
    Some(match event {
        WindowEvent::ModifiersChanged(m) => InputEvent::ModifiersChanged(modifiers(m.state())),
        WindowEvent::Focused(focused) => InputEvent::Focused(*focused),

        WindowEvent::CursorMoved { position, .. } => {
            let (x, y) = logical(window, *position);
            InputEvent::PointerMoved(PointerMoveEvent { x, y })
        }
        WindowEvent::CursorLeft { .. } => InputEvent::PointerLeft,

        WindowEvent::MouseInput { state: pressed, button, .. } => {
            let (x, y) = state.pointer_pos.unwrap_or_default();
            let state = match pressed {
                ElementState::Pressed => MouseButtonState::Pressed,
                ElementState::Released => MouseButtonState::Released,
            };
            InputEvent::PointerButton(PointerButtonEvent {
                button: mouse_button(*button),
                state,
                x,
                y,
                modifiers: mods,
            })
        }

        WindowEvent::MouseWheel { delta, .. } => InputEvent::MouseWheel {
            delta: wheel(window, delta),
            modifiers: mods,
        },

        WindowEvent::KeyboardInput { event, .. } => key_event(event, mods),

        _ => return None,
    })
}

fn key_event(event: &KeyEvent, modifiers: Modifiers) -> InputEvent {
    let (key, code) = map_key(event.physical_key);
    let state = if event.state.is_pressed() { KeyState::Pressed } else { KeyState::Released };
    InputEvent::Key { key, state, modifiers, code, repeat: event.repeat }
}

fn wheel(window: &Window, delta: &MouseScrollDelta) -> MouseWheelDelta {
    match *delta {
        MouseScrollDelta::LineDelta(x, y) => MouseWheelDelta::Line { x, y },
        MouseScrollDelta::PixelDelta(px) => {
            let (x, y) = logical(window, px);
            MouseWheelDelta::Pixel { x, y }
        }
    }
}

fn logical(window: &Window, pos: PhysicalPosition<f64>) -> (f32, f32) {
    let pos = pos.to_logical::<f64>(window.scale_factor());
    (pos.x as f32, pos.y as f32)
}

fn modifiers(m: ModifiersState) -> Modifiers {
    Modifiers {
        shift: m.shift_key(),
        ctrl:  m.control_key(),
        alt:   m.alt_key(),
        meta:  m.super_key(),
    }
}

fn mouse_button(b: WinitButton) -> MouseButton {
    match b {
        WinitButton::Left => MouseButton::Left,
        WinitButton::Right => MouseButton::Right,
        WinitButton::Middle => MouseButton::Middle,
        WinitButton::Back => MouseButton::Back,
        WinitButton::Forward => MouseButton::Forward,
        WinitButton::Other(n) => MouseButton::Other(n),
    }
}

const LETTERS: [(KeyCode, Key); 26] = [
    (KeyCode::KeyA, Key::A), (KeyCode::KeyB, Key::B), (KeyCode::KeyC, Key::C),
    (KeyCode::KeyD, Key::D), (KeyCode::KeyE, Key::E), (KeyCode::KeyF, Key::F),
    (KeyCode::KeyG, Key::G), (KeyCode::KeyH, Key::H), (KeyCode::KeyI, Key::I),
    (KeyCode::KeyJ, Key::J), (KeyCode::KeyK, Key::K), (KeyCode::KeyL, Key::L),
    (KeyCode::KeyM, Key::M), (KeyCode::KeyN, Key::N), (KeyCode::KeyO, Key::O),
    (KeyCode::KeyP, Key::P), (KeyCode::KeyQ, Key::Q), (KeyCode::KeyR, Key::R),
    (KeyCode::KeyS, Key::S), (KeyCode::KeyT, Key::T), (KeyCode::KeyU, Key::U),
    (KeyCode::KeyV, Key::V), (KeyCode::KeyW, Key::W), (KeyCode::KeyX, Key::X),
    (KeyCode::KeyY, Key::Y), (KeyCode::KeyZ, Key::Z),
];

/// Returns the engine key and the raw code it came from.
fn map_key(pk: PhysicalKey) -> (Key, u32) {
    let PhysicalKey::Code(code) = pk else {
        // NativeKeyCode has no stable numeric form.
        return (Key::Unknown(0), 0);
    };

    let key = match code {
        KeyCode::Escape => Key::Escape,
        KeyCode::Enter | KeyCode::NumpadEnter => Key::Enter,
        KeyCode::Space => Key::Space,

        KeyCode::Home => Key::Home,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,

        KeyCode::ArrowUp => Key::ArrowUp,
        KeyCode::ArrowDown => Key::ArrowDown,
        KeyCode::ArrowLeft => Key::ArrowLeft,
        KeyCode::ArrowRight => Key::ArrowRight,

        other => LETTERS
            .iter()
            .find(|(c, _)| *c == other)
            .map_or(Key::Unknown(other as u32), |(_, k)| *k),
    };

    (key, code as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_viewer_keys() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::ArrowLeft)).0, Key::ArrowLeft);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::PageDown)).0, Key::PageDown);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyQ)).0, Key::Q);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyR)).0, Key::R);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Home)).0, Key::Home);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Escape)).0, Key::Escape);
    }

    #[test]
    fn unmapped_code_is_unknown() {
        let (key, code) = map_key(PhysicalKey::Code(KeyCode::NumpadAdd));
        assert_eq!(key, Key::Unknown(code));
    }
}
