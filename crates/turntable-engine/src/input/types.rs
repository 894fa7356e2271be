// ── keyboard ──────────────────────────────────────────────────────────────

/// Physical key, independent of layout.
///
/// Only keys a viewer can bind get a variant. Anything else arrives as
/// `Unknown` carrying the platform key code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Space,

    Home,
    PageUp,
    PageDown,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Held modifier keys at the time of an event.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl:  bool,
    pub alt:   bool,
    pub meta:  bool,
}

// ── pointer ───────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseButtonState {
    Pressed,
    Released,
}

/// Wheel motion as reported by the platform: notched wheels send lines,
/// touchpads send pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MouseWheelDelta {
    Line { x: f32, y: f32 },
    Pixel { x: f32, y: f32 },
}

impl MouseWheelDelta {
    /// Vertical component in lines, converting pixels at `px_per_line`.
    pub fn lines_y(&self, px_per_line: f32) -> f32 {
        match *self {
            Self::Line { y, .. } => y,
            Self::Pixel { y, .. } => y / px_per_line.max(1.0),
        }
    }
}

/// Cursor position in logical pixels, origin top-left.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerMoveEvent {
    pub x: f32,
    pub y: f32,
}

/// Button transition together with the cursor position it happened at.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerButtonEvent {
    pub button:    MouseButton,
    pub state:     MouseButtonState,
    pub x:         f32,
    pub y:         f32,
    pub modifiers: Modifiers,
}

// ── gamepad ───────────────────────────────────────────────────────────────

/// Gamepad button, named by position in the standard layout.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GamepadButton {
    /// Bottom face button (A / Cross).
    South,
    East,
    West,
    North,
    LeftBumper,
    RightBumper,
    LeftTrigger,
    RightTrigger,
    Select,
    Start,
    LeftStick,
    RightStick,
    DPadUp,
    DPadDown,
    DPadLeft,
    DPadRight,
    Other(u32),
}

/// Analog stick axis.
///
/// Values are in `[-1, 1]`; X is positive right and Y is positive *down*,
/// matching the standard gamepad mapping used by browsers.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GamepadAxis {
    LeftStickX,
    LeftStickY,
    RightStickX,
    RightStickY,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GamepadButtonState {
    Pressed,
    Released,
}

// ── events ────────────────────────────────────────────────────────────────

/// Everything the runtime feeds into `InputState::apply_event`, already
/// stripped of winit and gilrs types.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    ModifiersChanged(Modifiers),
    Focused(bool),

    Key {
        key:       Key,
        state:     KeyState,
        modifiers: Modifiers,
        /// Raw platform key code; 0 when the platform gave none.
        code:      u32,
        /// Auto-repeat from a held key.
        repeat:    bool,
    },

    PointerMoved(PointerMoveEvent),
    PointerButton(PointerButtonEvent),
    PointerLeft,
    MouseWheel { delta: MouseWheelDelta, modifiers: Modifiers },

    /// `true` when a pad became the tracked one, `false` when it went away.
    GamepadConnected(bool),
    GamepadAxis { axis: GamepadAxis, value: f32 },
    GamepadButton { button: GamepadButton, state: GamepadButtonState },
}
