use std::f32::consts::{PI, TAU};

use glam::{Mat4, Vec3};

/// Keeps the polar angle away from the poles so `look_at` stays defined.
const POLAR_EPS: f32 = 1e-4;

/// Wheel dolly ratio per scroll line.
const DOLLY_PER_LINE: f32 = 0.95;

/// Damping factors are expressed per 60 Hz frame.
const REFERENCE_FPS: f32 = 60.0;

/// Camera position on a sphere around `target`. Angles in radians.
#[derive(Debug, Copy, Clone, PartialEq)]
struct Spherical {
    radius: f32,
    /// Azimuth around +Y, measured from +Z.
    theta:  f32,
    /// Polar angle from +Y.
    phi:    f32,
}

impl Spherical {
    fn from_offset(v: Vec3) -> Self {
        let radius = v.length();
        if radius <= f32::EPSILON {
            return Self { radius: 0.0, theta: 0.0, phi: PI / 2.0 };
        }
        Self {
            radius,
            theta: v.x.atan2(v.z),
            phi:   (v.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    fn to_offset(self) -> Vec3 {
        let s = self.phi.sin() * self.radius;
        Vec3::new(s * self.theta.sin(), self.phi.cos() * self.radius, s * self.theta.cos())
    }
}

/// Orbit-style camera controller with damped motion.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    eye:    Vec3,
    target: Vec3,

    /// Fraction of pending motion applied per 60 Hz frame; `0` disables damping.
    pub damping_factor: f32,
    pub min_distance:   f32,
    pub max_distance:   f32,

    // Pending motion, consumed by `update`.
    delta_theta: f32,
    delta_phi:   f32,
    pan_offset:  Vec3,
    dolly_scale: f32,

    saved_eye:    Vec3,
    saved_target: Vec3,
}

impl OrbitControls {
    /// Creates controls looking from `eye` at `target`; that pose is the saved state.
    pub fn new(eye: Vec3, target: Vec3) -> Self {
        Self {
            eye,
            target,
            damping_factor: 0.06,
            min_distance:   0.5,
            max_distance:   500.0,
            delta_theta: 0.0,
            delta_phi:   0.0,
            pan_offset:  Vec3::ZERO,
            dolly_scale: 1.0,
            saved_eye:    eye,
            saved_target: target,
        }
    }

    #[inline]
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    #[inline]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }

    // ── pose ──────────────────────────────────────────────────────────────

    /// Places the camera at `eye` looking at `target` and drops pending motion.
    pub fn look_from(&mut self, eye: Vec3, target: Vec3) {
        self.eye = eye;
        self.target = target;
        self.clear_motion();
    }

    /// Records the current pose for `reset`.
    pub fn save_state(&mut self) {
        self.saved_eye = self.eye;
        self.saved_target = self.target;
    }

    /// Restores the saved pose and drops pending motion.
    pub fn reset(&mut self) {
        self.eye = self.saved_eye;
        self.target = self.saved_target;
        self.clear_motion();
    }

    fn clear_motion(&mut self) {
        self.delta_theta = 0.0;
        self.delta_phi = 0.0;
        self.pan_offset = Vec3::ZERO;
        self.dolly_scale = 1.0;
    }

    // ── pointer input ─────────────────────────────────────────────────────

    /// Orbits by a pointer drag of `(dx, dy)` logical pixels. A drag across the
    /// full viewport height is one full turn.
    pub fn rotate(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        if viewport_height <= 0.0 {
            return;
        }
        self.delta_theta -= TAU * dx / viewport_height;
        self.delta_phi -= TAU * dy / viewport_height;
    }

    /// Pans so that the point under the pointer follows a drag of `(dx, dy)`.
    pub fn pan(&mut self, dx: f32, dy: f32, viewport_height: f32, fov_y: f32) {
        if viewport_height <= 0.0 {
            return;
        }
        let forward = self.target - self.eye;
        let distance = forward.length();
        if distance <= f32::EPSILON {
            return;
        }
        let forward = forward / distance;
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward);

        let world_per_px = 2.0 * distance * (fov_y * 0.5).tan() / viewport_height;
        self.pan_offset += (-right * dx + up * dy) * world_per_px;
    }

    /// Dollies toward the target for positive `lines` (wheel up), away for negative.
    pub fn dolly(&mut self, lines: f32) {
        if lines.is_finite() {
            self.dolly_scale = (self.dolly_scale * DOLLY_PER_LINE.powf(lines)).clamp(1e-6, 1e6);
        }
    }

    // ── integration ───────────────────────────────────────────────────────

    /// Applies pending motion and recomputes the eye.
    ///
    /// With damping, each call moves by a `dt`-scaled share of the remaining
    /// rotation and pan, so motion eases out over the next frames.
    pub fn update(&mut self, dt: f32) {
        let share = self.damping_share(dt);

        let mut sph = Spherical::from_offset(self.eye - self.target);
        sph.theta += self.delta_theta * share;
        sph.phi = (sph.phi + self.delta_phi * share).clamp(POLAR_EPS, PI - POLAR_EPS);
        sph.radius = (sph.radius * self.dolly_scale).clamp(self.min_distance, self.max_distance);

        self.target += self.pan_offset * share;
        self.eye = self.target + sph.to_offset();

        let keep = 1.0 - share;
        self.delta_theta *= keep;
        self.delta_phi *= keep;
        self.pan_offset *= keep;
        self.dolly_scale = 1.0;
    }

    fn damping_share(&self, dt: f32) -> f32 {
        let f = self.damping_factor.clamp(0.0, 1.0);
        if f <= 0.0 {
            return 1.0;
        }
        1.0 - (1.0 - f).powf(dt.max(0.0) * REFERENCE_FPS)
    }
}
