use glam::{Mat4, Vec2, Vec3};

use crate::bounds::Aabb;
use crate::config::ControlConfig;
use crate::gamepad::GamepadSnapshot;
use crate::palette::{Palette, Rgb};
use crate::transform::Transform;

/// Discrete nudge directions bound to the arrow and page keys.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    /// Away from the default camera (-Z).
    Away,
    /// Toward the default camera (+Z).
    Toward,
}

impl Direction {
    /// Unit vector for this direction.
    pub fn unit(self) -> Vec3 {
        match self {
            Direction::Up => Vec3::Y,
            Direction::Down => Vec3::NEG_Y,
            Direction::Left => Vec3::NEG_X,
            Direction::Right => Vec3::X,
            Direction::Away => Vec3::NEG_Z,
            Direction::Toward => Vec3::Z,
        }
    }
}

/// Discrete actions produced by the viewer's key bindings.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Command {
    Nudge(Direction),
    /// Object to the world origin, camera to its default placement.
    ResetOrigin,
    /// Object back to its centered load-time placement, camera to default.
    ResetHome,
    CycleColor,
}

#[derive(Debug, Copy, Clone, PartialEq)]
struct Placed {
    transform: Transform,
    home:      Vec3,
}

/// Mutable view state of a single displayed object.
///
/// The object is absent until [`attach_object`](Self::attach_object) is called
/// (the model viewer attaches once its asset arrives). Object-targeting input
/// received before that is ignored; camera resets still apply.
#[derive(Debug, Clone)]
pub struct ViewState {
    config:  ControlConfig,
    palette: Palette,
    object:  Option<Placed>,

    pointer_held: bool,
    south_held:   bool,

    camera_reset: Option<Vec3>,
}

impl ViewState {
    pub fn new(config: ControlConfig) -> Self {
        Self {
            config,
            palette: Palette::new(),
            object: None,
            pointer_held: false,
            south_held: false,
            camera_reset: None,
        }
    }

    pub fn config(&self) -> &ControlConfig {
        &self.config
    }

    /// Default camera eye position.
    pub fn camera_home(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, self.config.initial_camera_z)
    }

    // ── object lifecycle ──────────────────────────────────────────────────

    /// Places an object whose geometry spans `local_bounds` in model space.
    ///
    /// The object is scaled by `initial_scale` and translated so that its
    /// scaled bounds are centered on the origin. That position becomes the
    /// target of [`Command::ResetHome`].
    pub fn attach_object(&mut self, local_bounds: Aabb) {
        let scale = Vec3::splat(self.config.initial_scale);
        let center = local_bounds.transformed(Mat4::from_scale(scale)).center();
        let home = -center;

        self.object = Some(Placed {
            transform: Transform { position: home, rotation: Vec3::ZERO, scale },
            home,
        });
        self.camera_reset = Some(self.camera_home());

        log::debug!("object attached; home position {home:?}");
    }

    pub fn has_object(&self) -> bool {
        self.object.is_some()
    }

    pub fn object(&self) -> Option<&Transform> {
        self.object.as_ref().map(|p| &p.transform)
    }

    pub fn home_position(&self) -> Option<Vec3> {
        self.object.as_ref().map(|p| p.home)
    }

    // ── color ─────────────────────────────────────────────────────────────

    pub fn color(&self) -> Rgb {
        self.palette.current()
    }

    pub fn color_index(&self) -> usize {
        self.palette.index()
    }

    // ── commands ──────────────────────────────────────────────────────────

    pub fn apply(&mut self, cmd: Command) {
        match cmd {
            Command::Nudge(dir) => {
                let step = self.config.move_step;
                if let Some(obj) = self.object.as_mut() {
                    obj.transform.position += dir.unit() * step;
                }
            }

            // Resets move the object only; rotation and scale stay. Without
            // an object they do nothing, camera included.
            Command::ResetOrigin => {
                let Some(obj) = self.object.as_mut() else { return };
                obj.transform.position = Vec3::ZERO;
                self.camera_reset = Some(self.camera_home());
                log::debug!("reset to origin");
            }

            Command::ResetHome => {
                let Some(obj) = self.object.as_mut() else { return };
                obj.transform.position = obj.home;
                self.camera_reset = Some(self.camera_home());
                log::debug!("reset to home placement");
            }

            Command::CycleColor => {
                if self.object.is_some() {
                    let c = self.palette.advance();
                    log::debug!("color -> #{:06x} (index {})", c.to_hex(), self.palette.index());
                }
            }
        }
    }

    // ── gamepad ───────────────────────────────────────────────────────────

    /// Applies one frame of gamepad input.
    ///
    /// Right stick translates in the view plane, left stick X spins about Y,
    /// left stick Y tumbles about X and Z together. The south button cycles
    /// the color once per press.
    pub fn apply_gamepad(&mut self, pad: &GamepadSnapshot) {
        let rising = pad.south && !self.south_held;
        self.south_held = pad.south;

        let ControlConfig { move_step, rotate_step, deadzone, .. } = self.config;
        let Some(obj) = self.object.as_mut() else { return };
        let t = &mut obj.transform;

        if let Some(x) = GamepadSnapshot::gated(pad.right_stick.x, deadzone) {
            t.position.x += x * move_step;
        }
        if let Some(y) = GamepadSnapshot::gated(pad.right_stick.y, deadzone) {
            // Stick Y is positive-down; screen-up should move the object up.
            t.position.y -= y * move_step;
        }

        if let Some(x) = GamepadSnapshot::gated(pad.left_stick.x, deadzone) {
            t.rotation.y += x * rotate_step;
        }
        if let Some(y) = GamepadSnapshot::gated(pad.left_stick.y, deadzone) {
            t.rotation.x += y * rotate_step;
            t.rotation.z += y * rotate_step;
        }

        if rising {
            self.apply(Command::CycleColor);
        }
    }

    /// Forgets the held-button history, e.g. after the gamepad disconnects.
    pub fn release_gamepad(&mut self) {
        self.south_held = false;
    }

    // ── pointer ───────────────────────────────────────────────────────────

    pub fn set_pointer_held(&mut self, held: bool) {
        self.pointer_held = held;
    }

    pub fn pointer_held(&self) -> bool {
        self.pointer_held
    }

    /// Drags the object to follow the pointer while the drag button is held.
    ///
    /// `pos` and `viewport` are in the same (logical pixel) space with a
    /// top-left origin. Only X and Y are affected.
    pub fn pointer_moved(&mut self, pos: Vec2, viewport: Vec2) {
        if !self.pointer_held || viewport.x <= 0.0 || viewport.y <= 0.0 {
            return;
        }
        let extent = self.config.drag_extent;
        let Some(obj) = self.object.as_mut() else { return };

        let ndc = Vec2::new(pos.x / viewport.x * 2.0 - 1.0, -(pos.y / viewport.y) * 2.0 + 1.0);
        obj.transform.position.x = ndc.x * extent;
        obj.transform.position.y = ndc.y * extent;
    }

    // ── camera ────────────────────────────────────────────────────────────

    /// Returns the pending camera placement request, if any, and clears it.
    pub fn take_camera_reset(&mut self) -> Option<Vec3> {
        self.camera_reset.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn unit_cube() -> Aabb {
        Aabb::new(Vec3::splat(-0.5), Vec3::splat(0.5))
    }

    fn attached() -> ViewState {
        let mut v = ViewState::new(ControlConfig::default());
        v.attach_object(unit_cube());
        v.take_camera_reset();
        v
    }

    fn pos(v: &ViewState) -> Vec3 {
        v.object().unwrap().position
    }

    fn rot(v: &ViewState) -> Vec3 {
        v.object().unwrap().rotation
    }

    fn pad(left: (f32, f32), right: (f32, f32), south: bool) -> GamepadSnapshot {
        GamepadSnapshot {
            left_stick:  Vec2::new(left.0, left.1),
            right_stick: Vec2::new(right.0, right.1),
            south,
        }
    }

    // ── attach ────────────────────────────────────────────────────────────

    #[test]
    fn attach_scales_and_centers() {
        let mut v = ViewState::new(ControlConfig::default());
        v.attach_object(Aabb::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 4.0, 0.0)));

        let t = v.object().unwrap();
        assert_eq!(t.scale, Vec3::splat(5.0));
        // Scaled center is (5, 10, 0); home negates it.
        assert_eq!(t.position, Vec3::new(-5.0, -10.0, 0.0));
        assert_eq!(v.home_position(), Some(Vec3::new(-5.0, -10.0, 0.0)));
    }

    #[test]
    fn attach_requests_default_camera() {
        let mut v = ViewState::new(ControlConfig::default());
        v.attach_object(unit_cube());
        assert_eq!(v.take_camera_reset(), Some(Vec3::new(0.0, 0.0, 20.0)));
        assert_eq!(v.take_camera_reset(), None);
    }

    // ── nudges ────────────────────────────────────────────────────────────

    #[test]
    fn nudges_move_by_step() {
        let mut v = attached();
        let cases = [
            (Direction::Up, Vec3::new(0.0, 0.5, 0.0)),
            (Direction::Down, Vec3::new(0.0, -0.5, 0.0)),
            (Direction::Left, Vec3::new(-0.5, 0.0, 0.0)),
            (Direction::Right, Vec3::new(0.5, 0.0, 0.0)),
            (Direction::Away, Vec3::new(0.0, 0.0, -0.5)),
            (Direction::Toward, Vec3::new(0.0, 0.0, 0.5)),
        ];
        for (dir, expected) in cases {
            let before = pos(&v);
            v.apply(Command::Nudge(dir));
            assert!((pos(&v) - before - expected).length() < EPS, "{dir:?}");
        }
    }

    #[test]
    fn nudge_respects_configured_step() {
        let mut v = ViewState::new(ControlConfig { move_step: 2.0, ..Default::default() });
        v.attach_object(unit_cube());
        v.apply(Command::Nudge(Direction::Right));
        v.apply(Command::Nudge(Direction::Right));
        assert_eq!(pos(&v), Vec3::new(4.0, 0.0, 0.0));
    }

    #[test]
    fn nudge_without_object_is_ignored() {
        let mut v = ViewState::new(ControlConfig::default());
        v.apply(Command::Nudge(Direction::Up));
        assert!(v.object().is_none());
    }

    // ── resets ────────────────────────────────────────────────────────────

    #[test]
    fn reset_origin_moves_object_but_keeps_rotation() {
        let mut v = attached();
        v.apply(Command::Nudge(Direction::Up));
        v.apply_gamepad(&pad((0.5, 0.5), (0.0, 0.0), false));
        let turned = rot(&v);
        assert_ne!(turned, Vec3::ZERO);

        v.apply(Command::ResetOrigin);
        assert_eq!(pos(&v), Vec3::ZERO);
        assert_eq!(rot(&v), turned);
        assert_eq!(v.object().unwrap().scale, Vec3::splat(5.0));
        assert_eq!(v.take_camera_reset(), Some(Vec3::new(0.0, 0.0, 20.0)));
    }

    #[test]
    fn reset_home_restores_centered_placement() {
        let mut v = ViewState::new(ControlConfig::default());
        v.attach_object(Aabb::new(Vec3::ZERO, Vec3::splat(2.0)));
        v.take_camera_reset();
        let home = pos(&v);

        v.apply(Command::Nudge(Direction::Left));
        v.apply(Command::Nudge(Direction::Away));
        v.apply(Command::ResetHome);

        assert_eq!(pos(&v), home);
        assert_eq!(home, Vec3::splat(-5.0));
        assert_eq!(v.take_camera_reset(), Some(Vec3::new(0.0, 0.0, 20.0)));
    }

    #[test]
    fn reset_home_is_stable_after_repeat() {
        // Resetting twice must not drift (no re-centering from the current position).
        let mut v = attached();
        v.apply(Command::Nudge(Direction::Up));
        v.apply(Command::ResetHome);
        let first = pos(&v);
        v.apply(Command::ResetHome);
        assert_eq!(pos(&v), first);
    }

    #[test]
    fn reset_without_object_is_a_no_op() {
        let mut v = ViewState::new(ControlConfig { initial_camera_z: 12.0, ..Default::default() });
        v.apply(Command::ResetOrigin);
        v.apply(Command::ResetHome);
        assert_eq!(v.take_camera_reset(), None);
        assert!(v.object().is_none());
    }

    // ── color ─────────────────────────────────────────────────────────────

    #[test]
    fn cycle_color_wraps() {
        let mut v = attached();
        for _ in 0..7 {
            v.apply(Command::CycleColor);
        }
        assert_eq!(v.color_index(), 1);
        assert_eq!(v.color().to_hex(), 0xff0000);
    }

    #[test]
    fn cycle_color_needs_object() {
        let mut v = ViewState::new(ControlConfig::default());
        v.apply(Command::CycleColor);
        assert_eq!(v.color_index(), 0);
    }

    // ── gamepad ───────────────────────────────────────────────────────────

    #[test]
    fn sticks_inside_deadzone_do_nothing() {
        let mut v = attached();
        v.apply_gamepad(&pad((0.1, -0.1), (0.05, 0.1), false));
        assert_eq!(pos(&v), Vec3::ZERO);
        assert_eq!(rot(&v), Vec3::ZERO);
    }

    #[test]
    fn right_stick_translates_with_inverted_y() {
        let mut v = attached();
        v.apply_gamepad(&pad((0.0, 0.0), (0.5, 0.4), false));
        assert!((pos(&v) - Vec3::new(0.25, -0.2, 0.0)).length() < EPS);
    }

    #[test]
    fn left_stick_rotates() {
        let mut v = attached();
        v.apply_gamepad(&pad((1.0, -0.5), (0.0, 0.0), false));
        assert!((rot(&v) - Vec3::new(-0.025, 0.05, -0.025)).length() < EPS);
    }

    #[test]
    fn deadzone_is_configurable() {
        let mut v = ViewState::new(ControlConfig { deadzone: 0.6, ..Default::default() });
        v.attach_object(unit_cube());
        v.apply_gamepad(&pad((0.0, 0.0), (0.5, 0.0), false));
        assert_eq!(pos(&v), Vec3::ZERO);
        v.apply_gamepad(&pad((0.0, 0.0), (0.7, 0.0), false));
        assert!((pos(&v).x - 0.35).abs() < EPS);
    }

    #[test]
    fn south_cycles_on_press_edge_only() {
        let mut v = attached();
        for _ in 0..10 {
            v.apply_gamepad(&pad((0.0, 0.0), (0.0, 0.0), true));
        }
        assert_eq!(v.color_index(), 1);

        v.apply_gamepad(&pad((0.0, 0.0), (0.0, 0.0), false));
        v.apply_gamepad(&pad((0.0, 0.0), (0.0, 0.0), true));
        assert_eq!(v.color_index(), 2);
    }

    #[test]
    fn release_gamepad_rearms_edge() {
        let mut v = attached();
        v.apply_gamepad(&pad((0.0, 0.0), (0.0, 0.0), true));
        v.release_gamepad();
        v.apply_gamepad(&pad((0.0, 0.0), (0.0, 0.0), true));
        assert_eq!(v.color_index(), 2);
    }

    #[test]
    fn gamepad_without_object_is_ignored() {
        let mut v = ViewState::new(ControlConfig::default());
        v.apply_gamepad(&pad((1.0, 1.0), (1.0, 1.0), true));
        assert!(v.object().is_none());
        assert_eq!(v.color_index(), 0);
    }

    // ── pointer ───────────────────────────────────────────────────────────

    #[test]
    fn drag_requires_held_pointer() {
        let mut v = attached();
        v.pointer_moved(Vec2::new(0.0, 0.0), Vec2::new(800.0, 600.0));
        assert_eq!(pos(&v), Vec3::ZERO);
    }

    #[test]
    fn drag_maps_viewport_to_extent() {
        let mut v = attached();
        v.apply(Command::Nudge(Direction::Toward));
        v.set_pointer_held(true);

        let vp = Vec2::new(800.0, 600.0);
        v.pointer_moved(Vec2::new(0.0, 0.0), vp);
        assert_eq!(pos(&v), Vec3::new(-20.0, 20.0, 0.5));

        v.pointer_moved(Vec2::new(800.0, 600.0), vp);
        assert_eq!(pos(&v), Vec3::new(20.0, -20.0, 0.5));

        v.pointer_moved(Vec2::new(400.0, 300.0), vp);
        assert_eq!(pos(&v), Vec3::new(0.0, 0.0, 0.5));
    }

    #[test]
    fn drag_stops_after_release() {
        let mut v = attached();
        v.set_pointer_held(true);
        v.pointer_moved(Vec2::new(0.0, 0.0), Vec2::new(100.0, 100.0));
        v.set_pointer_held(false);
        v.pointer_moved(Vec2::new(100.0, 100.0), Vec2::new(100.0, 100.0));
        assert_eq!(pos(&v), Vec3::new(-20.0, 20.0, 0.0));
    }

    #[test]
    fn drag_ignores_empty_viewport() {
        let mut v = attached();
        v.set_pointer_held(true);
        v.pointer_moved(Vec2::new(10.0, 10.0), Vec2::new(0.0, 600.0));
        assert_eq!(pos(&v), Vec3::ZERO);
    }
}
