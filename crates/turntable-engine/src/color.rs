//! Linear RGBA color.

use glam::Vec3;

/// Linear-space RGBA color, straight alpha.
///
/// Inputs given as sRGB (hex literals, palette entries) are converted on
/// construction so that shading happens in linear space.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self::linear(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::linear(1.0, 1.0, 1.0);

    /// Opaque color from linear components.
    #[inline]
    pub const fn linear(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Opaque color from sRGB-encoded components in `[0, 1]`.
    pub fn from_srgb(r: f32, g: f32, b: f32) -> Self {
        Self::linear(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b))
    }

    /// Opaque color from an sRGB `0xRRGGBB` literal.
    pub fn from_hex_srgb(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
        Self::from_srgb(channel(16), channel(8), channel(0))
    }

    #[inline]
    pub fn rgb(self) -> Vec3 {
        Vec3::new(self.r, self.g, self.b)
    }

    pub(crate) fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    let c = c.clamp(0.0, 1.0);
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
