//! The turntable viewers.
//!
//! Both binaries run the same [`Viewer`]; they differ only in where the
//! displayed object comes from (a glTF asset or a generated cube).
//!
//! ```rust,no_run
//! use turntable_viewer::{Content, Viewer};
//!
//! Viewer::new()
//!     .title("cube")
//!     .content(Content::Cube { edge: 1.0 })
//!     .run()
//!     .unwrap();
//! ```

mod app;
pub mod bindings;
pub mod cli;
mod viewer;

pub use viewer::{Content, Viewer, DEFAULT_MODEL_URL};
