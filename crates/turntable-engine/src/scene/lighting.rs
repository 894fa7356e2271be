use glam::Vec3;

use crate::color::Color;

/// Ambient fill plus one directional light aimed at the origin.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Lighting {
    pub ambient:           Color,
    pub ambient_intensity: f32,

    pub sun:               Color,
    pub sun_intensity:     f32,
    /// Light position; it shines from here toward the origin.
    pub sun_position:      Vec3,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient:           Color::WHITE,
            ambient_intensity: 1.0,
            sun:               Color::WHITE,
            sun_intensity:     1.0,
            sun_position:      Vec3::splat(5.0),
        }
    }
}

impl Lighting {
    /// Unit vector from the surface toward the light.
    pub fn to_sun(&self) -> Vec3 {
        self.sun_position.try_normalize().unwrap_or(Vec3::Y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sun_comes_from_the_upper_right_front() {
        let d = Lighting::default().to_sun();
        assert!((d - Vec3::splat(1.0 / 3f32.sqrt())).length() < 1e-6);
    }

    #[test]
    fn sun_at_origin_falls_back_to_overhead() {
        let l = Lighting { sun_position: Vec3::ZERO, ..Lighting::default() };
        assert_eq!(l.to_sun(), Vec3::Y);
    }
}
