//! Turntable engine crate.
//!
//! Platform and GPU runtime for the turntable viewers: window loop, input
//! (keyboard, mouse, gamepad), frame timing, orbit camera, a lit mesh
//! renderer and glTF asset loading.

pub mod asset;
pub mod camera;
pub mod color;
pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod render;
pub mod scene;
pub mod time;
pub mod window;
