//! Orbit camera and perspective projection.
//!
//! `OrbitControls` keeps the camera on a sphere around a target point.
//! Pointer input adds pending motion; `update(dt)` applies it with damping
//! and recomputes the eye position.

mod orbit;
mod projection;

pub use orbit::OrbitControls;
pub use projection::Projection;
