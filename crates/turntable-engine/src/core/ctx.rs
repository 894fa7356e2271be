use winit::window::{Window, WindowId};

use crate::color::Color;
use crate::device::{Gpu, SurfaceErrorAction, DEPTH_FORMAT};
use crate::input::{InputFrame, InputState};
use crate::render::{RenderCtx, RenderTarget};
use crate::time::FrameTime;
use crate::window::RuntimeCtx;

use super::app::AppControl;

/// The window being drawn.
pub struct WindowCtx<'a> {
    pub id:     WindowId,
    pub window: &'a Window,
}

impl WindowCtx<'_> {
    /// Inner size in logical pixels, the unit pointer events use.
    pub fn logical_size(&self) -> (f32, f32) {
        let size = self.window.inner_size().to_logical::<f64>(self.window.scale_factor());
        (size.width as f32, size.height as f32)
    }
}

/// Everything an [`App`](super::App) sees during one redraw.
///
/// `'a` lives for the callback; `'w` is the window borrow held by [`Gpu`].
pub struct FrameCtx<'a, 'w> {
    pub window:      WindowCtx<'a>,
    pub gpu:         &'a mut Gpu<'w>,
    pub input:       &'a InputState,
    pub input_frame: &'a InputFrame,
    pub time:        FrameTime,
    pub runtime:     &'a mut RuntimeCtx,
}

impl FrameCtx<'_, '_> {
    /// Width over height of the drawable surface. Never zero.
    pub fn aspect(&self) -> f32 {
        let size = self.gpu.size();
        size.width.max(1) as f32 / size.height.max(1) as f32
    }

    /// Acquires a frame cleared to `clear`, lets `draw` record into it and
    /// presents the result.
    ///
    /// A frame that cannot be acquired is skipped. An out-of-memory surface
    /// ends the run with an error.
    pub fn render<F>(&mut self, clear: Color, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let mut frame = match self.gpu.acquire() {
            Ok(frame) => frame,
            Err(action) => return skip_frame(action, self.runtime),
        };
        frame.clear(clear.to_wgpu());

        let ctx = RenderCtx {
            device:         self.gpu.device(),
            queue:          self.gpu.queue(),
            surface_format: self.gpu.surface_format(),
            depth_format:   DEPTH_FORMAT,
        };
        draw(&ctx, &mut RenderTarget {
            encoder:    &mut frame.encoder,
            color_view: &frame.view,
            depth_view: &frame.depth_view,
        });

        self.window.window.pre_present_notify();
        self.gpu.present(frame);
        AppControl::Continue
    }
}

/// Outcome of a frame whose swapchain image could not be acquired.
fn skip_frame(action: SurfaceErrorAction, runtime: &mut RuntimeCtx) -> AppControl {
    match action {
        SurfaceErrorAction::Fatal => {
            runtime.fail(anyhow::anyhow!("GPU surface out of memory"));
            AppControl::Exit
        }
        SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => AppControl::Continue,
    }
}
