use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl};
use crate::device::GpuInit;
use crate::input::platform::gamepad::GamepadSource;
use crate::input::InputEvent;

use super::commands::Command;
use super::entry::WindowEntry;
use super::RuntimeCtx;

/// Window settings for [`Runtime::run`].
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title:        String,
    pub initial_size: LogicalSize<f64>,
    /// Open the OS gamepad backend.
    pub gamepads:     bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title:        "turntable".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
            gamepads:     true,
        }
    }
}

pub struct Runtime;

impl Runtime {
    /// Opens the window and drives `app` until it exits or the window closes.
    ///
    /// Returns the error that stopped the loop, if any (window or GPU setup).
    pub fn run<A: App + 'static>(config: RuntimeConfig, gpu: GpuInit, app: A) -> Result<()> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut handler = Handler {
            config,
            gpu,
            app,
            entry: None,
            gamepads: None,
            gamepad_events: Vec::new(),
            exiting: false,
            error: None,
        };

        event_loop
            .run_app(&mut handler)
            .context("winit event loop terminated with error")?;

        handler.error.map_or(Ok(()), Err)
    }
}

struct Handler<A> {
    config: RuntimeConfig,
    gpu:    GpuInit,
    app:    A,

    entry:          Option<WindowEntry>,
    gamepads:       Option<GamepadSource>,
    gamepad_events: Vec<InputEvent>,

    exiting: bool,
    error:   Option<anyhow::Error>,
}

impl<A: App> Handler<A> {
    fn open(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);
        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let entry = WindowEntry::open(window, self.gpu.clone())?;
        entry.window().request_redraw();
        self.entry = Some(entry);

        if self.config.gamepads {
            self.gamepads = GamepadSource::open();
            if self.gamepads.as_ref().is_some_and(GamepadSource::has_active) {
                self.gamepad_events.push(InputEvent::GamepadConnected(true));
            }
        }
        Ok(())
    }

    fn stop(&mut self, event_loop: &ActiveEventLoop) {
        self.exiting = true;
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(pads) = self.gamepads.as_mut() {
            pads.poll(&mut self.gamepad_events);
        }
        let Some(entry) = self.entry.as_mut() else { return };

        let mut runtime = RuntimeCtx::default();
        if entry.step(&mut self.app, &mut self.gamepad_events, &mut runtime) == AppControl::Exit {
            runtime.exit();
        }

        for cmd in runtime.into_commands() {
            match cmd {
                Command::SetTitle(title) => entry.window().set_title(&title),
                Command::Exit => self.exiting = true,
                Command::Fail(err) => {
                    log::error!("{err:#}");
                    self.error.get_or_insert(err);
                    self.exiting = true;
                }
            }
        }
        if self.exiting {
            event_loop.exit();
        }
    }
}

impl<A: App> ApplicationHandler for Handler<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }
        if let Err(err) = self.open(event_loop) {
            log::error!("{err:#}");
            self.error = Some(err);
            self.stop(event_loop);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exiting {
            event_loop.exit();
            return;
        }
        // Damping and stick input need frames even without window events.
        event_loop.set_control_flow(ControlFlow::Wait);
        if let Some(entry) = self.entry.as_ref() {
            entry.window().request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if self.exiting {
            event_loop.exit();
            return;
        }
        let Some(entry) = self.entry.as_mut() else { return };
        entry.feed(&event);

        match event {
            WindowEvent::CloseRequested => {
                self.entry = None;
                self.stop(event_loop);
            }
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => entry.sync_size(),
            WindowEvent::Occluded(false) => entry.restart_clock(),
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }
}
