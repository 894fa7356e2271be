use crate::color::Color;

/// Surface parameters for the lit mesh pipeline.
///
/// The viewers drive base and emissive color from the same palette entry, so
/// the object stays clearly tinted even on its unlit side.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Material {
    pub base_color:         Color,
    pub emissive:           Color,
    pub emissive_intensity: f32,
    pub metalness:          f32,
    pub roughness:          f32,
}

impl Default for Material {
    fn default() -> Self {
        Self::tinted(Color::WHITE)
    }
}

impl Material {
    /// Material whose base and emissive colors are both `color`.
    pub fn tinted(color: Color) -> Self {
        Self {
            base_color:         color,
            emissive:           color,
            emissive_intensity: 0.5,
            metalness:          0.5,
            roughness:          0.5,
        }
    }

    /// Replaces base and emissive colors, keeping the other parameters.
    pub fn set_color(&mut self, color: Color) {
        self.base_color = color;
        self.emissive = color;
    }
}
