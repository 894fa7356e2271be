//! GPU rendering subsystem.
//!
//! `MeshRenderer` draws lit `SceneNode`s into a `RenderTarget`. It owns its
//! pipeline and per-frame uniform buffer; each node owns its geometry and
//! per-node uniform buffer.
//!
//! Convention:
//! - world space is right-handed, +Y up, camera looks down -Z
//! - colors are linear; the surface format is sRGB when available

mod ctx;
mod mesh;
mod uniforms;

pub use ctx::{RenderCtx, RenderTarget};
pub use mesh::MeshRenderer;
pub use uniforms::CameraView;
