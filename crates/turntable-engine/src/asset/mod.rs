//! Asset acquisition: fetch bytes, flatten glTF into one `MeshData`.
//!
//! Loading runs off the render thread through [`AssetLoader`]; everything
//! else here is synchronous and usable directly (tests, tools).

mod error;
mod fetch;
mod flatten;
mod loader;
mod source;

pub use error::AssetError;
pub use fetch::{Fetcher, NetFetcher};
pub use flatten::parse_gltf;
pub use loader::{load_mesh, AssetLoader};
pub use source::AssetSource;
