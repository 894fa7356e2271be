/// Device handles and attachment formats a renderer builds its pipelines for.
pub struct RenderCtx<'a> {
    pub device:         &'a wgpu::Device,
    pub queue:          &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    pub depth_format:   wgpu::TextureFormat,
}

/// Where a renderer records its pass. Both views are already cleared.
pub struct RenderTarget<'a> {
    pub encoder:    &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
    pub depth_view: &'a wgpu::TextureView,
}
