use glam::{Vec2, Vec3};

use turntable_control::{Aabb, ControlConfig, GamepadSnapshot, Rgb, ViewState};
use turntable_engine::asset::{AssetError, AssetLoader, AssetSource};
use turntable_engine::camera::{OrbitControls, Projection};
use turntable_engine::color::Color;
use turntable_engine::core::{App, AppControl, FrameCtx};
use turntable_engine::input::{
    GamepadButton, GamepadState, InputEvent, InputFrame, InputState, MouseButton,
};
use turntable_engine::render::{CameraView, MeshRenderer};
use turntable_engine::scene::{Lighting, Material, MeshData, SceneNode};

use crate::bindings::{action_for_key, Action};
use crate::viewer::Content;

/// The viewer's `App`: routes input into `ViewState` and the orbit camera,
/// then draws the object.
pub(crate) struct ViewerApp {
    title:      String,
    view:       ViewState,
    camera:     OrbitControls,
    projection: Projection,
    lighting:   Lighting,
    renderer:   MeshRenderer,

    node:   Option<SceneNode>,
    loader: Option<(AssetSource, AssetLoader)>,
}

impl ViewerApp {
    pub(crate) fn new(title: String, content: Content, controls: ControlConfig) -> Self {
        let view = ViewState::new(controls);
        let camera = OrbitControls::new(view.camera_home(), Vec3::ZERO);

        let mut app = Self {
            title,
            view,
            camera,
            projection: Projection::default(),
            lighting:   Lighting::default(),
            renderer:   MeshRenderer::new(),
            node:   None,
            loader: None,
        };

        match content {
            Content::Cube { edge } => app.attach(MeshData::cube(edge)),
            Content::Asset(source) => {
                let loader = AssetLoader::spawn(source.clone());
                app.loader = Some((source, loader));
            }
        }
        app
    }

    /// Shows `mesh` as the object, centered and scaled.
    fn attach(&mut self, mesh: MeshData) {
        let Some((min, max)) = mesh.bounds() else {
            log::error!("mesh has no vertices; nothing to show");
            return;
        };
        self.view.attach_object(Aabb::new(min, max));
        let material = Material::tinted(srgb(self.view.color()));
        self.node = Some(SceneNode::new(mesh).with_material(material));
    }

    fn poll_loader(&mut self, ctx: &mut FrameCtx<'_, '_>) {
        let Some((_, loader)) = self.loader.as_mut() else { return };
        let Some(result) = loader.poll() else { return };
        let title = self.on_loaded(result);
        ctx.runtime.set_title(title);
    }

    /// Takes a finished load. Returns the window title to show.
    ///
    /// A failed load is logged and leaves the viewer running with no object.
    fn on_loaded(&mut self, result: Result<MeshData, AssetError>) -> String {
        let source = self.loader.take().map(|(source, _)| source);
        match result {
            Ok(mesh) => {
                let triangles = mesh.triangle_count();
                self.attach(mesh);
                format!("{} - {triangles} triangles", self.title)
            }
            Err(e) => {
                match source {
                    Some(source) => log::error!("failed to load {source}: {e}"),
                    None => log::error!("failed to load asset: {e}"),
                }
                format!("{} - load failed", self.title)
            }
        }
    }

    /// Returns `true` when a key asked to close the viewer.
    fn handle_keys(&mut self, frame: &InputFrame) -> bool {
        for key in frame.key_downs() {
            match action_for_key(key) {
                Some(Action::View(cmd)) => self.view.apply(cmd),
                Some(Action::CameraHome) => self.camera.reset(),
                Some(Action::Close) => return true,
                None => {}
            }
        }
        false
    }

    fn handle_pointer(&mut self, input: &InputState, frame: &InputFrame, viewport: Vec2) {
        // Left button drags the object.
        if frame.buttons_pressed.contains(&MouseButton::Left) {
            self.view.set_pointer_held(true);
        }
        if !input.button_down(MouseButton::Left) {
            self.view.set_pointer_held(false);
        }
        let moved = frame.events.iter().any(|ev| matches!(ev, InputEvent::PointerMoved(_)));
        if moved {
            if let Some((x, y)) = input.pointer_pos {
                self.view.pointer_moved(Vec2::new(x, y), viewport);
            }
        }

        // Right orbits, middle pans, wheel dollies.
        let (dx, dy) = frame.pointer_delta;
        if input.button_down(MouseButton::Right) {
            self.camera.rotate(dx, dy, viewport.y);
        }
        if input.button_down(MouseButton::Middle) {
            self.camera.pan(dx, dy, viewport.y, self.projection.fov_y());
        }
        if frame.scroll_lines != 0.0 {
            self.camera.dolly(frame.scroll_lines);
        }
    }

    fn handle_gamepad(&mut self, pad: &GamepadState, frame: &InputFrame) {
        let disconnected = frame
            .events
            .iter()
            .any(|ev| *ev == InputEvent::GamepadConnected(false));
        if disconnected {
            log::info!("gamepad input released");
            self.view.release_gamepad();
        }
        if !pad.connected {
            return;
        }

        let snapshot = GamepadSnapshot {
            left_stick:  Vec2::from(pad.left_stick),
            right_stick: Vec2::from(pad.right_stick),
            south:       pad.button_down(GamepadButton::South),
        };
        self.view.apply_gamepad(&snapshot);
    }

    fn sync_scene(&mut self) {
        if let Some(eye) = self.view.take_camera_reset() {
            self.camera.look_from(eye, Vec3::ZERO);
            self.camera.save_state();
            log::debug!("camera placed at {eye:?}");
        }

        let (Some(node), Some(object)) = (self.node.as_mut(), self.view.object()) else { return };
        node.transform = object.matrix();
        node.material.set_color(srgb(self.view.color()));
    }
}

fn srgb(c: Rgb) -> Color {
    Color::from_srgb(c.r, c.g, c.b)
}

impl App for ViewerApp {
    fn on_start(&mut self, ctx: &mut FrameCtx<'_, '_>) {
        self.projection.set_aspect(ctx.aspect());
        log::info!(
            "controls: arrows/PageUp/PageDown nudge, q/r reset, left drag moves, \
             right drag orbits, middle drag pans, wheel zooms, Esc quits"
        );
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.poll_loader(ctx);

        if self.handle_keys(ctx.input_frame) {
            return AppControl::Exit;
        }

        let (w, h) = ctx.window.logical_size();
        self.handle_pointer(ctx.input, ctx.input_frame, Vec2::new(w, h));
        self.handle_gamepad(&ctx.input.gamepad, ctx.input_frame);
        self.sync_scene();

        self.camera.update(ctx.time.dt);
        self.projection.set_aspect(ctx.aspect());

        if ctx.time.frame_index % 600 == 599 {
            log::debug!("{:.1} fps", ctx.time.fps);
        }

        let camera = CameraView::new(&self.camera, &self.projection);
        let lighting = &self.lighting;
        let renderer = &mut self.renderer;
        let node = self.node.as_mut();

        ctx.render(Color::BLACK, |rctx, target| {
            renderer.render(rctx, target, &camera, lighting, node);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube_app() -> ViewerApp {
        ViewerApp::new("test".into(), Content::Cube { edge: 1.0 }, ControlConfig::default())
    }

    #[test]
    fn cube_is_attached_immediately_and_camera_is_queued() {
        let mut app = cube_app();
        assert!(app.view.has_object());
        assert!(app.node.is_some());
        app.sync_scene();
        assert_eq!(app.camera.eye(), Vec3::new(0.0, 0.0, 20.0));
    }

    #[test]
    fn scene_follows_view_state() {
        let mut app = cube_app();
        let mut frame = InputFrame::default();
        let mut input = InputState::default();
        input.apply_event(&mut frame, key_down(turntable_engine::input::Key::ArrowRight));

        assert!(!app.handle_keys(&frame));
        app.sync_scene();

        let node = app.node.as_ref().unwrap();
        assert_eq!(node.transform.w_axis.truncate(), Vec3::new(0.5, 0.0, 0.0));
        assert_eq!(node.transform.x_axis.x, 5.0);
    }

    fn empty_app() -> ViewerApp {
        let mut app = cube_app();
        app.view = ViewState::new(ControlConfig::default());
        app.node = None;
        app
    }

    #[test]
    fn failed_load_keeps_running_without_an_object() {
        let mut app = empty_app();
        let title = app.on_loaded(Err(AssetError::NoGeometry));

        assert!(!app.view.has_object());
        assert!(app.node.is_none());
        assert!(app.loader.is_none());
        assert!(title.ends_with("load failed"));

        // Input before any object exists is ignored.
        let mut frame = InputFrame::default();
        let mut input = InputState::default();
        input.apply_event(&mut frame, key_down(turntable_engine::input::Key::ArrowUp));
        assert!(!app.handle_keys(&frame));
        app.sync_scene();
        assert!(app.view.object().is_none());
    }

    #[test]
    fn loaded_mesh_is_attached_and_centered() {
        let mut app = empty_app();
        let title = app.on_loaded(Ok(MeshData::cube(2.0)));

        assert!(app.view.has_object());
        assert!(app.node.is_some());
        assert_eq!(app.view.home_position(), Some(Vec3::ZERO));
        assert_eq!(title, "test - 12 triangles");
    }

    #[test]
    fn escape_requests_exit() {
        let mut app = cube_app();
        let mut frame = InputFrame::default();
        let mut input = InputState::default();
        input.apply_event(&mut frame, key_down(turntable_engine::input::Key::Escape));
        assert!(app.handle_keys(&frame));
    }

    #[test]
    fn left_drag_places_object_and_release_stops_it() {
        use turntable_engine::input::{MouseButtonState, PointerButtonEvent, PointerMoveEvent};

        let mut app = cube_app();
        let viewport = Vec2::new(200.0, 100.0);
        let mut input = InputState::default();
        let mut frame = InputFrame::default();

        input.apply_event(&mut frame, InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
            x: 100.0,
            y: 50.0,
            modifiers: Default::default(),
        }));
        input.apply_event(&mut frame, InputEvent::PointerMoved(PointerMoveEvent { x: 200.0, y: 0.0 }));
        app.handle_pointer(&input, &frame, viewport);
        let pos = app.view.object().unwrap().position;
        assert_eq!((pos.x, pos.y), (20.0, 20.0));

        frame.clear();
        input.apply_event(&mut frame, InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Released,
            x: 200.0,
            y: 0.0,
            modifiers: Default::default(),
        }));
        input.apply_event(&mut frame, InputEvent::PointerMoved(PointerMoveEvent { x: 0.0, y: 100.0 }));
        app.handle_pointer(&input, &frame, viewport);
        let pos = app.view.object().unwrap().position;
        assert_eq!((pos.x, pos.y), (20.0, 20.0));
    }

    #[test]
    fn gamepad_south_cycles_once_per_press() {
        let mut app = cube_app();
        let frame = InputFrame::default();
        let mut pad = GamepadState { connected: true, ..GamepadState::default() };
        pad.buttons_down.insert(GamepadButton::South);

        app.handle_gamepad(&pad, &frame);
        app.handle_gamepad(&pad, &frame);
        assert_eq!(app.view.color_index(), 1);

        pad.buttons_down.clear();
        app.handle_gamepad(&pad, &frame);
        pad.buttons_down.insert(GamepadButton::South);
        app.handle_gamepad(&pad, &frame);
        assert_eq!(app.view.color_index(), 2);
    }

    fn key_down(key: turntable_engine::input::Key) -> InputEvent {
        InputEvent::Key {
            key,
            state: turntable_engine::input::KeyState::Pressed,
            modifiers: Default::default(),
            code: 0,
            repeat: false,
        }
    }
}
