//! glTF → single triangle mesh.
//!
//! Walks the default scene, bakes each node's world transform into its
//! vertices and merges every triangle primitive into one `MeshData`.
//! Materials, textures, skins and animations are ignored.

use base64::Engine;
use glam::{Mat4, Vec3};

use crate::scene::MeshData;

use super::{AssetError, AssetSource, Fetcher};

/// Parses glTF (JSON or GLB) bytes loaded from `base`.
///
/// External buffers are fetched through `fetcher`, resolved against `base`.
pub fn parse_gltf(
    bytes: &[u8],
    base: &AssetSource,
    fetcher: &dyn Fetcher,
) -> Result<MeshData, AssetError> {
    let gltf::Gltf { document, blob } = gltf::Gltf::from_slice(bytes)?;
    let buffers = load_buffers(&document, blob, base, fetcher)?;

    let scene = document
        .default_scene()
        .or_else(|| document.scenes().next())
        .ok_or(AssetError::NoGeometry)?;

    let mut mesh = MeshData::default();
    for node in scene.nodes() {
        collect_node(&node, &buffers, Mat4::IDENTITY, &mut mesh);
    }

    if mesh.is_empty() {
        return Err(AssetError::NoGeometry);
    }
    Ok(mesh)
}

fn load_buffers(
    document: &gltf::Document,
    mut blob: Option<Vec<u8>>,
    base: &AssetSource,
    fetcher: &dyn Fetcher,
) -> Result<Vec<Vec<u8>>, AssetError> {
    let mut buffers = Vec::with_capacity(document.buffers().len());

    for buffer in document.buffers() {
        let index = buffer.index();
        let data = match buffer.source() {
            gltf::buffer::Source::Bin => blob.take().ok_or(AssetError::MissingBlob(index))?,
            gltf::buffer::Source::Uri(uri) if uri.starts_with("data:") => decode_data_uri(uri)?,
            gltf::buffer::Source::Uri(uri) => fetcher.fetch(&base.resolve(uri))?,
        };

        if data.len() < buffer.length() {
            return Err(AssetError::BufferTooShort {
                index,
                expected: buffer.length(),
                actual: data.len(),
            });
        }
        buffers.push(data);
    }

    Ok(buffers)
}

fn decode_data_uri(uri: &str) -> Result<Vec<u8>, AssetError> {
    let (header, payload) = uri.split_once(',').ok_or(AssetError::DataUri)?;
    if !header.ends_with(";base64") {
        return Err(AssetError::DataUri);
    }
    Ok(base64::engine::general_purpose::STANDARD.decode(payload)?)
}

fn collect_node(node: &gltf::Node<'_>, buffers: &[Vec<u8>], parent: Mat4, out: &mut MeshData) {
    let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());

    if let Some(mesh) = node.mesh() {
        for primitive in mesh.primitives() {
            if primitive.mode() != gltf::mesh::Mode::Triangles {
                log::debug!("skipping {:?} primitive in mesh {}", primitive.mode(), mesh.index());
                continue;
            }
            if let Some(part) = read_primitive(&primitive, buffers) {
                out.append_transformed(&part, world);
            }
        }
    }

    for child in node.children() {
        collect_node(&child, buffers, world, out);
    }
}

fn read_primitive(primitive: &gltf::Primitive<'_>, buffers: &[Vec<u8>]) -> Option<MeshData> {
    let reader = primitive.reader(|b| buffers.get(b.index()).map(Vec::as_slice));

    let positions: Vec<Vec3> = reader.read_positions()?.map(Vec3::from).collect();
    let indices: Vec<u32> = match reader.read_indices() {
        Some(iter) => iter.into_u32().collect(),
        None => (0..positions.len() as u32).collect(),
    };

    let mesh = match reader.read_normals() {
        Some(iter) => MeshData::indexed(positions, iter.map(Vec3::from).collect(), indices),
        None => MeshData::flat(&positions, &indices),
    };
    Some(mesh)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    /// Serves bytes from memory, keyed by resolved source.
    #[derive(Default)]
    struct MemoryFetcher {
        files: HashMap<AssetSource, Vec<u8>>,
    }

    impl Fetcher for MemoryFetcher {
        fn fetch(&self, source: &AssetSource) -> Result<Vec<u8>, AssetError> {
            self.files.get(source).cloned().ok_or_else(|| AssetError::Status {
                url: source.to_string(),
                status: 404,
            })
        }
    }

    fn triangle_bytes() -> Vec<u8> {
        let positions: [f32; 9] = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
        bytemuck::cast_slice(&positions).to_vec()
    }

    fn triangle_gltf(buffer_uri: &str) -> String {
        format!(
            r#"{{
  "asset": {{ "version": "2.0" }},
  "scene": 0,
  "scenes": [{{ "nodes": [0] }}],
  "nodes": [{{ "translation": [10, 0, 0], "children": [1] }}, {{ "mesh": 0, "scale": [2, 2, 2] }}],
  "meshes": [{{ "primitives": [{{ "attributes": {{ "POSITION": 0 }} }}] }}],
  "buffers": [{{ "byteLength": 36, "uri": "{buffer_uri}" }}],
  "bufferViews": [{{ "buffer": 0, "byteOffset": 0, "byteLength": 36 }}],
  "accessors": [{{
    "bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3",
    "min": [0, 0, 0], "max": [1, 1, 0]
  }}]
}}"#
        )
    }

    fn base() -> AssetSource {
        AssetSource::Url("https://example.com/models/tri.gltf".into())
    }

    #[test]
    fn embedded_buffer_is_flattened_with_node_transforms() {
        let uri = format!(
            "data:application/octet-stream;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(triangle_bytes())
        );
        let mesh = parse_gltf(triangle_gltf(&uri).as_bytes(), &base(), &MemoryFetcher::default())
            .unwrap();

        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.bounds(), Some((Vec3::new(10.0, 0.0, 0.0), Vec3::new(12.0, 2.0, 0.0))));
        // No normals in the file: flat normals face +Z for a CCW triangle in XY.
        assert!(mesh.normals.iter().all(|n| (*n - Vec3::Z).length() < 1e-6));
    }

    #[test]
    fn relative_buffer_is_fetched_next_to_the_asset() {
        let mut fetcher = MemoryFetcher::default();
        fetcher.files.insert(
            AssetSource::Url("https://example.com/models/tri.bin".into()),
            triangle_bytes(),
        );
        let mesh = parse_gltf(triangle_gltf("tri.bin").as_bytes(), &base(), &fetcher).unwrap();
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn missing_external_buffer_propagates_fetch_error() {
        let err = parse_gltf(triangle_gltf("gone.bin").as_bytes(), &base(), &MemoryFetcher::default())
            .unwrap_err();
        assert!(matches!(err, AssetError::Status { status: 404, .. }));
    }

    #[test]
    fn short_buffer_is_rejected() {
        let mut fetcher = MemoryFetcher::default();
        fetcher.files.insert(
            AssetSource::Url("https://example.com/models/tri.bin".into()),
            vec![0; 12],
        );
        let err = parse_gltf(triangle_gltf("tri.bin").as_bytes(), &base(), &fetcher).unwrap_err();
        assert!(matches!(err, AssetError::BufferTooShort { index: 0, expected: 36, actual: 12 }));
    }

    #[test]
    fn scene_without_meshes_is_no_geometry() {
        let json = r#"{ "asset": { "version": "2.0" }, "scene": 0, "scenes": [{ "nodes": [0] }], "nodes": [{}] }"#;
        let err = parse_gltf(json.as_bytes(), &base(), &MemoryFetcher::default()).unwrap_err();
        assert!(matches!(err, AssetError::NoGeometry));
    }

    #[test]
    fn garbage_is_a_gltf_error() {
        let err = parse_gltf(b"not a model", &base(), &MemoryFetcher::default()).unwrap_err();
        assert!(matches!(err, AssetError::Gltf(_)));
    }

    #[test]
    fn non_base64_data_uri_is_rejected() {
        assert!(matches!(decode_data_uri("data:text/plain,hello"), Err(AssetError::DataUri)));
    }
}
