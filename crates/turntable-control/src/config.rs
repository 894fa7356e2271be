use thiserror::Error;

/// Tunables for the input-to-transform mapping.
///
/// Defaults match the shipped viewers. Binaries may override individual fields
/// from the command line; call [`ControlConfig::validate`] afterwards.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ControlConfig {
    /// World units moved per key press; also scales right-stick motion.
    pub move_step: f32,

    /// Stick magnitude that must be exceeded before an axis contributes.
    pub deadzone: f32,

    /// Radians per frame at full left-stick deflection.
    pub rotate_step: f32,

    /// World units mapped to the edge of the viewport while dragging.
    pub drag_extent: f32,

    /// Uniform scale applied when an object is attached.
    pub initial_scale: f32,

    /// Camera distance along +Z after attach and after a reset.
    pub initial_camera_z: f32,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            move_step:        0.5,
            deadzone:         0.1,
            rotate_step:      0.05,
            drag_extent:      20.0,
            initial_scale:    5.0,
            initial_camera_z: 20.0,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be a finite non-negative number, got {value}")]
    OutOfRange { field: &'static str, value: f32 },

    #[error("deadzone must lie in [0, 1), got {0}")]
    Deadzone(f32),
}

impl ControlConfig {
    /// Checks that every field is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("move_step", self.move_step),
            ("rotate_step", self.rotate_step),
            ("drag_extent", self.drag_extent),
            ("initial_scale", self.initial_scale),
            ("initial_camera_z", self.initial_camera_z),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::OutOfRange { field, value });
            }
        }

        if !(0.0..1.0).contains(&self.deadzone) {
            return Err(ConfigError::Deadzone(self.deadzone));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(ControlConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_negative_step() {
        let cfg = ControlConfig { move_step: -1.0, ..Default::default() };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::OutOfRange { field: "move_step", value: -1.0 })
        );
    }

    #[test]
    fn rejects_nan() {
        let cfg = ControlConfig { drag_extent: f32::NAN, ..Default::default() };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::OutOfRange { field: "drag_extent", .. })
        ));
    }

    #[test]
    fn rejects_full_deadzone() {
        let cfg = ControlConfig { deadzone: 1.0, ..Default::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::Deadzone(1.0)));
    }

    #[test]
    fn zero_deadzone_is_allowed() {
        let cfg = ControlConfig { deadzone: 0.0, ..Default::default() };
        assert_eq!(cfg.validate(), Ok(()));
    }
}
