use glam::{EulerRot, Mat4, Quat, Vec3};

/// Position / rotation / scale of the displayed object.
///
/// Rotation is stored as XYZ Euler angles in radians so that per-axis stick
/// deltas accumulate independently.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale:    Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale:    Vec3::ONE,
        }
    }
}

impl Transform {
    #[inline]
    pub fn quat(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    /// Model matrix (`T * R * S`).
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.quat(), self.position)
    }
}
