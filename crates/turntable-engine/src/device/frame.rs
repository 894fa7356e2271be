/// One acquired swapchain image plus the encoder recording into it.
///
/// Hold it for as short a time as possible; the next image cannot be
/// acquired while this one is alive.
pub struct GpuFrame {
    pub(crate) texture: wgpu::SurfaceTexture,
    pub view:           wgpu::TextureView,
    pub depth_view:     wgpu::TextureView,
    pub encoder:        wgpu::CommandEncoder,
}

impl GpuFrame {
    /// Records a pass that clears color to `color` and depth to the far plane.
    pub fn clear(&mut self, color: wgpu::Color) {
        self.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("turntable clear"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view:           &self.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load:  wgpu::LoadOp::Clear(color),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load:  wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes:    None,
            occlusion_query_set: None,
            multiview_mask:      None,
        });
    }
}
