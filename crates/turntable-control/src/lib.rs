//! View-state logic shared by the turntable viewers.
//!
//! This crate owns everything that decides *what* the displayed object does in
//! response to input: nudges, joystick motion, drag placement, color cycling and
//! the two reset actions. It knows nothing about windows or GPUs; the viewer
//! translates platform input into [`Command`]s and [`GamepadSnapshot`]s and reads
//! the resulting [`Transform`] back out each frame.
//!
//! ```
//! use turntable_control::{Aabb, Command, ControlConfig, Direction, ViewState};
//! use glam::Vec3;
//!
//! let mut view = ViewState::new(ControlConfig::default());
//! view.attach_object(Aabb::new(Vec3::splat(-0.5), Vec3::splat(0.5)));
//! view.apply(Command::Nudge(Direction::Up));
//! assert_eq!(view.object().unwrap().position.y, 0.5);
//! ```

pub mod bounds;
pub mod config;
pub mod gamepad;
pub mod palette;
pub mod state;
pub mod transform;

pub use bounds::Aabb;
pub use config::{ConfigError, ControlConfig};
pub use gamepad::GamepadSnapshot;
pub use palette::{Palette, Rgb, PALETTE};
pub use state::{Command, Direction, ViewState};
pub use transform::Transform;
