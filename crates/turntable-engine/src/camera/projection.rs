use glam::Mat4;

/// Perspective projection parameters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Projection {
    /// Vertical field of view in degrees.
    pub fov_y_deg: f32,
    pub near:      f32,
    pub far:       f32,
    /// Width over height.
    pub aspect:    f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_y_deg: 75.0,
            near:      0.1,
            far:       1000.0,
            aspect:    1.0,
        }
    }
}

impl Projection {
    pub fn with_aspect(mut self, aspect: f32) -> Self {
        self.set_aspect(aspect);
        self
    }

    /// Updates the aspect ratio. Non-positive or non-finite values are ignored.
    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    #[inline]
    pub fn fov_y(&self) -> f32 {
        self.fov_y_deg.to_radians()
    }

    /// Right-handed projection mapping depth to `[0, 1]`.
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y(), self.aspect, self.near, self.far)
    }
}
