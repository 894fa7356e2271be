use anyhow::{Context, Result};
use ouroboros::self_referencing;
use winit::window::Window;

use crate::core::{App, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::platform::winit::translate_window_event;
use crate::input::{InputEvent, InputFrame, InputState};
use crate::time::FrameClock;

use super::RuntimeCtx;

/// The open window with its GPU context and per-window input and timing.
#[self_referencing]
pub(crate) struct WindowEntry {
    input:   InputState,
    frame:   InputFrame,
    clock:   FrameClock,
    started: bool,
    window:  Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

impl WindowEntry {
    /// Brings up wgpu on `window`. Blocks until the device is ready.
    pub(crate) fn open(window: Window, init: GpuInit) -> Result<Self> {
        WindowEntryTryBuilder {
            input:   InputState::default(),
            frame:   InputFrame::default(),
            clock:   FrameClock::default(),
            started: false,
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, init)).context("GPU initialization failed"),
        }
        .try_build()
    }

    pub(crate) fn window(&self) -> &Window {
        self.borrow_window()
    }

    /// Folds a winit event into the input state, if it carries input.
    pub(crate) fn feed(&mut self, event: &winit::event::WindowEvent) {
        self.with_mut(|f| {
            if let Some(ev) = translate_window_event(f.window, f.input, event) {
                f.input.apply_event(f.frame, ev);
            }
        });
    }

    /// Resizes the swapchain to the window's current inner size.
    pub(crate) fn sync_size(&mut self) {
        let size = self.borrow_window().inner_size();
        self.with_gpu_mut(|gpu| gpu.resize(size));
        self.borrow_window().request_redraw();
    }

    /// Restarts frame timing so the first frame back is not one huge step.
    pub(crate) fn restart_clock(&mut self) {
        self.with_clock_mut(FrameClock::reset);
    }

    /// Runs one app frame: applies queued gamepad events, ticks the clock,
    /// calls `on_start` the first time and `on_frame` every time.
    pub(crate) fn step<A: App>(
        &mut self,
        app: &mut A,
        queued: &mut Vec<InputEvent>,
        runtime: &mut RuntimeCtx,
    ) -> AppControl {
        self.with_mut(|f| {
            for ev in queued.drain(..) {
                f.input.apply_event(f.frame, ev);
            }

            let control = {
                let mut ctx = FrameCtx {
                    window:      WindowCtx { id: f.window.id(), window: f.window },
                    gpu:         f.gpu,
                    input:       f.input,
                    input_frame: f.frame,
                    time:        f.clock.tick(),
                    runtime,
                };
                if !std::mem::replace(f.started, true) {
                    app.on_start(&mut ctx);
                }
                app.on_frame(&mut ctx)
            };

            f.frame.clear();
            control
        })
    }
}
