use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::camera::{OrbitControls, Projection};
use crate::scene::{Lighting, Material};

/// Camera matrices for one frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraView {
    pub view_proj: Mat4,
    pub eye:       Vec3,
}

impl CameraView {
    pub fn new(controls: &OrbitControls, projection: &Projection) -> Self {
        Self {
            view_proj: projection.matrix() * controls.view_matrix(),
            eye:       controls.eye(),
        }
    }
}

/// Group 0: shared by every node in a frame.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct FrameUniform {
    pub view_proj:   [[f32; 4]; 4],
    pub eye:         [f32; 4],
    /// Ambient color premultiplied by intensity.
    pub ambient:     [f32; 4],
    /// Unit vector toward the directional light.
    pub to_sun:      [f32; 4],
    /// Directional color premultiplied by intensity.
    pub sun:         [f32; 4],
}

impl FrameUniform {
    pub(super) fn new(camera: &CameraView, lighting: &Lighting) -> Self {
        Self {
            view_proj: camera.view_proj.to_cols_array_2d(),
            eye:       camera.eye.extend(1.0).to_array(),
            ambient:   (lighting.ambient.rgb() * lighting.ambient_intensity).extend(0.0).to_array(),
            to_sun:    lighting.to_sun().extend(0.0).to_array(),
            sun:       (lighting.sun.rgb() * lighting.sun_intensity).extend(0.0).to_array(),
        }
    }
}

/// Group 1: one per node.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct NodeUniform {
    pub model:      [[f32; 4]; 4],
    /// Inverse-transpose of `model`; stored as mat4 to avoid mat3 padding rules.
    pub normal:     [[f32; 4]; 4],
    pub base_color: [f32; 4],
    /// Emissive color premultiplied by intensity.
    pub emissive:   [f32; 4],
    /// x = metalness, y = roughness.
    pub params:     [f32; 4],
}

impl NodeUniform {
    pub(super) fn new(model: Mat4, material: &Material) -> Self {
        let normal = if model.determinant().abs() > f32::EPSILON {
            model.inverse().transpose()
        } else {
            Mat4::IDENTITY
        };
        let c = material.base_color;
        Self {
            model:      model.to_cols_array_2d(),
            normal:     normal.to_cols_array_2d(),
            base_color: [c.r, c.g, c.b, c.a],
            emissive:   (material.emissive.rgb() * material.emissive_intensity).extend(1.0).to_array(),
            params:     [
                material.metalness.clamp(0.0, 1.0),
                material.roughness.clamp(0.04, 1.0),
                0.0,
                0.0,
            ],
        }
    }
}
