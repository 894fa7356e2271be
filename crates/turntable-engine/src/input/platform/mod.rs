//! Platform event translators.

pub(crate) mod gamepad;
pub(crate) mod winit;
