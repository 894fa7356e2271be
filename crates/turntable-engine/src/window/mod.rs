//! The winit event loop behind [`Runtime::run`].
//!
//! One window per run. Its GPU context borrows the window, so both live in a
//! self-referencing [`entry::WindowEntry`] that is dropped on close.

mod commands;
mod entry;
mod runtime;

pub use commands::RuntimeCtx;
pub(crate) use commands::Command;
pub use runtime::{Runtime, RuntimeConfig};
