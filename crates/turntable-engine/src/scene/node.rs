use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use wgpu::util::DeviceExt;

use super::{Material, MeshData};

/// Interleaved vertex as stored on the GPU.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(crate) struct Vertex {
    pub position: [f32; 3],
    pub normal:   [f32; 3],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode:    wgpu::VertexStepMode::Vertex,
            attributes:   &Self::ATTRS,
        }
    }
}

/// GPU-side buffers for one node: geometry plus its uniform block.
pub(crate) struct GpuMesh {
    pub vbo:         wgpu::Buffer,
    pub ibo:         wgpu::Buffer,
    pub index_count: u32,
    pub ubo:         wgpu::Buffer,
    pub bind_group:  wgpu::BindGroup,
}

impl GpuMesh {
    fn upload(
        device: &wgpu::Device,
        mesh: &MeshData,
        layout: &wgpu::BindGroupLayout,
        ubo_size: u64,
    ) -> Self {
        let vertices: Vec<Vertex> = mesh
            .positions
            .iter()
            .zip(&mesh.normals)
            .map(|(p, n)| Vertex { position: p.to_array(), normal: n.to_array() })
            .collect();

        let vbo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label:    Some("turntable mesh vbo"),
            contents: bytemuck::cast_slice(&vertices),
            usage:    wgpu::BufferUsages::VERTEX,
        });
        let ibo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label:    Some("turntable mesh ibo"),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage:    wgpu::BufferUsages::INDEX,
        });

        let ubo = device.create_buffer(&wgpu::BufferDescriptor {
            label:              Some("turntable node ubo"),
            size:               ubo_size,
            usage:              wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label:   Some("turntable node bind group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding:  0,
                resource: ubo.as_entire_binding(),
            }],
        });

        log::debug!(
            "uploaded mesh: {} vertices, {} triangles",
            vertices.len(),
            mesh.triangle_count()
        );

        Self {
            vbo,
            ibo,
            index_count: mesh.indices.len() as u32,
            ubo,
            bind_group,
        }
    }
}

/// A drawable mesh with its model transform and material.
pub struct SceneNode {
    mesh:          MeshData,
    pub transform: Mat4,
    pub material:  Material,
    gpu:           Option<GpuMesh>,
}

impl SceneNode {
    pub fn new(mesh: MeshData) -> Self {
        Self {
            mesh,
            transform: Mat4::IDENTITY,
            material:  Material::default(),
            gpu:       None,
        }
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn mesh(&self) -> &MeshData {
        &self.mesh
    }

    /// Whether GPU buffers exist for this node.
    pub fn is_uploaded(&self) -> bool {
        self.gpu.is_some()
    }

    /// Uploads geometry on first use and returns the GPU buffers.
    ///
    /// Returns `None` for an empty mesh; there is nothing to draw.
    pub(crate) fn ensure_gpu(
        &mut self,
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        ubo_size: u64,
    ) -> Option<&GpuMesh> {
        if self.mesh.is_empty() {
            return None;
        }
        if self.gpu.is_none() {
            self.gpu = Some(GpuMesh::upload(device, &self.mesh, layout, ubo_size));
        }
        self.gpu.as_ref()
    }

    pub(crate) fn gpu(&self) -> Option<&GpuMesh> {
        self.gpu.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_is_not_uploaded() {
        let node = SceneNode::new(MeshData::cube(1.0));
        assert!(!node.is_uploaded());
        assert_eq!(node.transform, Mat4::IDENTITY);
        assert_eq!(node.material, Material::default());
    }

    #[test]
    fn vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        assert_eq!(Vertex::layout().array_stride, 24);
    }
}
