use anyhow::{Context, Result};
use winit::dpi::PhysicalSize;
use winit::window::Window;

use super::{GpuFrame, GpuInit, SurfaceErrorAction, SurfaceTarget};

/// Device, queue and the window's swapchain.
///
/// `'w` is the borrow of the window the surface was created from.
pub struct Gpu<'w> {
    _instance: wgpu::Instance,
    device:    wgpu::Device,
    queue:     wgpu::Queue,
    target:    SurfaceTarget<'w>,
}

impl<'w> Gpu<'w> {
    /// Opens an adapter able to present to `window` and configures the
    /// swapchain at the window's current size.
    pub async fn new(window: &'w Window, init: GpuInit) -> Result<Self> {
        let size = window.inner_size();
        anyhow::ensure!(size.width > 0 && size.height > 0, "window has zero size");

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance
            .create_surface(window)
            .context("failed to create wgpu surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference:       wgpu::PowerPreference::HighPerformance,
                compatible_surface:     Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("no GPU adapter can present to this window")?;

        let info = adapter.get_info();
        log::info!("using adapter: {} ({:?})", info.name, info.backend);

        let (device, queue) = open_device(&adapter, &init).await?;
        let target = SurfaceTarget::new(surface, &adapter, &device, size, &init)?;

        Ok(Self { _instance: instance, device, queue, target })
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.target.format()
    }

    /// Drawable size in physical pixels. May be zero while minimized.
    pub fn size(&self) -> PhysicalSize<u32> {
        self.target.size()
    }

    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        self.target.resize(&self.device, size);
    }

    /// Acquires the next swapchain image, recovering from a lost or
    /// outdated surface on the way.
    pub fn acquire(&self) -> std::result::Result<GpuFrame, SurfaceErrorAction> {
        let texture = match self.target.current_texture() {
            Ok(texture) => texture,
            Err(err) => return Err(self.target.recover(&self.device, err)),
        };
        let view = texture.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("turntable frame encoder"),
        });

        Ok(GpuFrame {
            texture,
            view,
            depth_view: self.target.depth_view().clone(),
            encoder,
        })
    }

    /// Submits everything recorded into `frame` and presents it.
    pub fn present(&self, frame: GpuFrame) {
        let GpuFrame { texture, view, depth_view, encoder } = frame;
        self.queue.submit([encoder.finish()]);
        drop((view, depth_view));
        texture.present();
    }
}

async fn open_device(adapter: &wgpu::Adapter, init: &GpuInit) -> Result<(wgpu::Device, wgpu::Queue)> {
    adapter
        .request_device(&wgpu::DeviceDescriptor {
            label:                 Some("turntable device"),
            required_features:     init.features,
            required_limits:       init.limits.clone(),
            experimental_features: wgpu::ExperimentalFeatures::disabled(),
            memory_hints:          wgpu::MemoryHints::Performance,
            trace:                 wgpu::Trace::Off,
        })
        .await
        .context("failed to open wgpu device")
}
