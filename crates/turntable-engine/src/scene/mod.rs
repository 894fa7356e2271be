//! Scene content: CPU mesh data, material, lights and the drawable node.
//!
//! Nothing here touches the GPU until the renderer asks a `SceneNode` for its
//! buffers; upload is lazy and happens at most once per mesh.

mod lighting;
mod material;
mod mesh;
mod node;

pub use lighting::Lighting;
pub use material::Material;
pub use mesh::MeshData;
pub use node::SceneNode;

pub(crate) use node::Vertex;
