use std::num::NonZeroU64;

use wgpu::util::DeviceExt;

use crate::scene::{Lighting, SceneNode, Vertex};

use super::uniforms::{CameraView, FrameUniform, NodeUniform};
use super::{RenderCtx, RenderTarget};

const FRAME_UBO_SIZE: u64 = std::mem::size_of::<FrameUniform>() as u64;
const NODE_UBO_SIZE: u64 = std::mem::size_of::<NodeUniform>() as u64;

/// Lit, depth-tested triangle renderer.
///
/// Bind group layouts are created once; the pipeline is rebuilt whenever the
/// surface or depth format changes.
#[derive(Default)]
pub struct MeshRenderer {
    pipeline_formats: Option<(wgpu::TextureFormat, wgpu::TextureFormat)>,
    pipeline: Option<wgpu::RenderPipeline>,

    frame_layout: Option<wgpu::BindGroupLayout>,
    node_layout: Option<wgpu::BindGroupLayout>,

    frame_ubo: Option<wgpu::Buffer>,
    frame_bind_group: Option<wgpu::BindGroup>,
}

impl MeshRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws `nodes` into `target`, loading the existing color and depth.
    ///
    /// Nodes with empty meshes are skipped; geometry uploads on first draw.
    pub fn render<'n, I>(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        camera: &CameraView,
        lighting: &Lighting,
        nodes: I,
    ) where
        I: IntoIterator<Item = &'n mut SceneNode>,
    {
        self.ensure_layouts(ctx);
        self.ensure_pipeline(ctx);
        self.ensure_bindings(ctx);

        let Some(node_layout) = self.node_layout.as_ref() else { return };

        // Upload and update uniforms first; the pass below only reads.
        let mut drawable: Vec<&SceneNode> = Vec::new();
        for node in nodes {
            if node.ensure_gpu(ctx.device, node_layout, NODE_UBO_SIZE).is_none() {
                continue;
            }
            let node: &SceneNode = node;
            let Some(gpu) = node.gpu() else { continue };
            let uniform = NodeUniform::new(node.transform, &node.material);
            ctx.queue.write_buffer(&gpu.ubo, 0, bytemuck::bytes_of(&uniform));
            drawable.push(node);
        }

        if drawable.is_empty() {
            return;
        }

        let Some(frame_ubo) = self.frame_ubo.as_ref() else { return };
        let uniform = FrameUniform::new(camera, lighting);
        ctx.queue.write_buffer(frame_ubo, 0, bytemuck::bytes_of(&uniform));

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(frame_bind_group) = self.frame_bind_group.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("turntable mesh pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: target.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, frame_bind_group, &[]);

        for node in drawable {
            let Some(gpu) = node.gpu() else { continue };
            rpass.set_bind_group(1, &gpu.bind_group, &[]);
            rpass.set_vertex_buffer(0, gpu.vbo.slice(..));
            rpass.set_index_buffer(gpu.ibo.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..gpu.index_count, 0, 0..1);
        }
    }

    fn ensure_layouts(&mut self, ctx: &RenderCtx<'_>) {
        if self.frame_layout.is_some() && self.node_layout.is_some() {
            return;
        }

        let uniform_entry = |size: u64| wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: NonZeroU64::new(size),
            },
            count: None,
        };

        self.frame_layout = Some(ctx.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("turntable frame bgl"),
                entries: &[uniform_entry(FRAME_UBO_SIZE)],
            },
        ));
        self.node_layout = Some(ctx.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("turntable node bgl"),
                entries: &[uniform_entry(NODE_UBO_SIZE)],
            },
        ));
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        let formats = (ctx.surface_format, ctx.depth_format);
        if self.pipeline_formats == Some(formats) && self.pipeline.is_some() {
            return;
        }
        let (Some(frame_layout), Some(node_layout)) =
            (self.frame_layout.as_ref(), self.node_layout.as_ref())
        else {
            return;
        };

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("turntable mesh shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/mesh.wgsl").into()),
        });

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("turntable mesh pipeline layout"),
            bind_group_layouts: &[frame_layout, node_layout],
            immediate_size: 0,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("turntable mesh pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[Vertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // glTF assets are not guaranteed to be closed; draw both sides.
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: Some(wgpu::DepthStencilState {
                format: ctx.depth_format,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),

            multiview_mask: None,
            cache: None,
        });

        log::debug!("mesh pipeline built for {:?} / {:?}", formats.0, formats.1);

        self.pipeline_formats = Some(formats);
        self.pipeline = Some(pipeline);
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.frame_bind_group.is_some() && self.frame_ubo.is_some() {
            return;
        }
        let Some(layout) = self.frame_layout.as_ref() else { return };

        let frame_ubo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("turntable frame ubo"),
            contents: bytemuck::bytes_of(&<FrameUniform as bytemuck::Zeroable>::zeroed()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let frame_bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("turntable frame bind group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: frame_ubo.as_entire_binding(),
            }],
        });

        self.frame_ubo = Some(frame_ubo);
        self.frame_bind_group = Some(frame_bind_group);
    }
}
