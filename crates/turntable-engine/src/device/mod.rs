//! wgpu bring-up for a single window.
//!
//! [`Gpu`] owns the device and queue plus a [`SurfaceTarget`] (the
//! swapchain and its depth buffer). Each redraw acquires a [`GpuFrame`],
//! records into it and hands it back for presentation.

mod frame;
mod gpu;
mod surface;

pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use surface::{SurfaceTarget, DEPTH_FORMAT};

/// Knobs for [`Gpu::new`]. The defaults suit a vsynced desktop viewer.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Pick an sRGB swapchain format when the surface offers one.
    pub prefer_srgb:  bool,
    pub present_mode: wgpu::PresentMode,
    /// Falls back to the first supported mode when unsupported.
    pub alpha_mode:   Option<wgpu::CompositeAlphaMode>,
    pub features:     wgpu::Features,
    pub limits:       wgpu::Limits,
    /// Hint only; backends may clamp it.
    pub frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb:   true,
            present_mode:  wgpu::PresentMode::Fifo,
            alpha_mode:    None,
            features:      wgpu::Features::empty(),
            limits:        wgpu::Limits::default(),
            frame_latency: 2,
        }
    }
}

/// What the caller should do after a failed frame acquisition.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// The swapchain was rebuilt; try again next redraw.
    Reconfigured,
    SkipFrame,
    /// Out of memory. Shut down.
    Fatal,
}
