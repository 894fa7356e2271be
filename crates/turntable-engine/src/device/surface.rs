use anyhow::{Context, Result};
use winit::dpi::PhysicalSize;

use super::{GpuInit, SurfaceErrorAction};

/// Depth buffer format used by every 3D pipeline.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Swapchain plus a depth buffer kept at the same size.
pub struct SurfaceTarget<'w> {
    surface: wgpu::Surface<'w>,
    config:  wgpu::SurfaceConfiguration,
    depth:   wgpu::TextureView,
    size:    PhysicalSize<u32>,
}

impl<'w> SurfaceTarget<'w> {
    pub(crate) fn new(
        surface: wgpu::Surface<'w>,
        adapter: &wgpu::Adapter,
        device: &wgpu::Device,
        size: PhysicalSize<u32>,
        init: &GpuInit,
    ) -> Result<Self> {
        let caps = surface.get_capabilities(adapter);
        let format = pick_format(&caps.formats, init.prefer_srgb)
            .context("surface reports no formats")?;
        let alpha_mode = pick_alpha_mode(&caps.alpha_modes, init.alpha_mode);
        log::debug!("surface format {format:?}, alpha {alpha_mode:?}");

        let config = wgpu::SurfaceConfiguration {
            usage:        wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width:        size.width.max(1),
            height:       size.height.max(1),
            present_mode: init.present_mode,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: init.frame_latency,
        };
        surface.configure(device, &config);

        Ok(Self { depth: depth_view(device, size), surface, config, size })
    }

    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    pub(crate) fn depth_view(&self) -> &wgpu::TextureView {
        &self.depth
    }

    /// Records the new size. A zero-area size cannot be configured, so the
    /// swapchain keeps its old images until a real size arrives.
    pub(crate) fn resize(&mut self, device: &wgpu::Device, size: PhysicalSize<u32>) {
        self.size = size;
        if size.width == 0 || size.height == 0 {
            return;
        }
        self.config.width = size.width;
        self.config.height = size.height;
        self.surface.configure(device, &self.config);
        self.depth = depth_view(device, size);
    }

    pub(crate) fn current_texture(&self) -> Result<wgpu::SurfaceTexture, wgpu::SurfaceError> {
        self.surface.get_current_texture()
    }

    pub(crate) fn recover(&self, device: &wgpu::Device, err: wgpu::SurfaceError) -> SurfaceErrorAction {
        match err {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
                if self.size.width > 0 && self.size.height > 0 {
                    self.surface.configure(device, &self.config);
                }
                SurfaceErrorAction::Reconfigured
            }
            wgpu::SurfaceError::OutOfMemory => {
                log::error!("surface out of memory");
                SurfaceErrorAction::Fatal
            }
            wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
        }
    }
}

fn depth_view(device: &wgpu::Device, size: PhysicalSize<u32>) -> wgpu::TextureView {
    device
        .create_texture(&wgpu::TextureDescriptor {
            label: Some("turntable depth"),
            size: wgpu::Extent3d {
                width:                 size.width.max(1),
                height:                size.height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count:    1,
            dimension:       wgpu::TextureDimension::D2,
            format:          DEPTH_FORMAT,
            usage:           wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats:    &[],
        })
        .create_view(&wgpu::TextureViewDescriptor::default())
}

fn pick_format(formats: &[wgpu::TextureFormat], prefer_srgb: bool) -> Option<wgpu::TextureFormat> {
    let first = *formats.first()?;
    if !prefer_srgb {
        return Some(first);
    }
    [wgpu::TextureFormat::Bgra8UnormSrgb, wgpu::TextureFormat::Rgba8UnormSrgb]
        .into_iter()
        .find(|f| formats.contains(f))
        .or(Some(first))
}

fn pick_alpha_mode(
    supported: &[wgpu::CompositeAlphaMode],
    wanted: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    wanted
        .filter(|m| supported.contains(m))
        .or_else(|| supported.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}
