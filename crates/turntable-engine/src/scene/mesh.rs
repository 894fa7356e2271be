use glam::{Mat3, Mat4, Vec3};

/// Indexed triangle mesh on the CPU.
///
/// Invariants:
/// - `normals.len() == positions.len()`
/// - `indices.len()` is a multiple of three and every index is in range
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub positions: Vec<Vec3>,
    pub normals:   Vec<Vec3>,
    pub indices:   Vec<u32>,
}

impl MeshData {
    /// Builds a mesh from indexed triangles with per-vertex normals.
    ///
    /// Triangles referencing out-of-range vertices are dropped, as is a
    /// trailing partial triangle.
    pub fn indexed(positions: Vec<Vec3>, normals: Vec<Vec3>, indices: Vec<u32>) -> Self {
        if normals.len() != positions.len() {
            return Self::flat(&positions, &indices);
        }
        let n = positions.len() as u32;
        let indices = indices
            .chunks_exact(3)
            .filter(|t| t.iter().all(|&i| i < n))
            .flatten()
            .copied()
            .collect();
        Self { positions, normals, indices }
    }

    /// Builds a flat-shaded mesh: every triangle gets its own three vertices
    /// carrying the face normal.
    pub fn flat(positions: &[Vec3], indices: &[u32]) -> Self {
        let mut mesh = Self::default();
        for tri in indices.chunks_exact(3) {
            let vertex = |k: usize| positions.get(tri[k] as usize).copied();
            let (Some(a), Some(b), Some(c)) = (vertex(0), vertex(1), vertex(2)) else {
                continue;
            };
            let normal = (b - a).cross(c - a).normalize_or_zero();
            let base = mesh.positions.len() as u32;
            mesh.positions.extend([a, b, c]);
            mesh.normals.extend([normal; 3]);
            mesh.indices.extend([base, base + 1, base + 2]);
        }
        mesh
    }

    /// Axis-aligned cube of the given edge length centered at the origin.
    ///
    /// 24 vertices (four per face, so normals stay sharp) and 36 indices,
    /// counter-clockwise when seen from outside.
    pub fn cube(edge: f32) -> Self {
        let h = edge * 0.5;
        // (normal, u axis, v axis) per face; u × v == normal keeps the winding outward.
        let faces = [
            (Vec3::X, Vec3::NEG_Z, Vec3::Y),
            (Vec3::NEG_X, Vec3::Z, Vec3::Y),
            (Vec3::Y, Vec3::X, Vec3::NEG_Z),
            (Vec3::NEG_Y, Vec3::X, Vec3::Z),
            (Vec3::Z, Vec3::X, Vec3::Y),
            (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
        ];

        let mut mesh = Self::default();
        for (n, u, v) in faces {
            let base = mesh.positions.len() as u32;
            let center = n * h;
            mesh.positions.extend([
                center - u * h - v * h,
                center + u * h - v * h,
                center + u * h + v * h,
                center - u * h + v * h,
            ]);
            mesh.normals.extend([n; 4]);
            mesh.indices.extend([base, base + 1, base + 2, base, base + 2, base + 3]);
        }
        mesh
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// `(min, max)` over all vertex positions, or `None` for an empty mesh.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut iter = self.positions.iter().copied();
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }

    /// Appends `other` after transforming it by `m`.
    pub fn append_transformed(&mut self, other: &MeshData, m: Mat4) {
        let normal_m = Mat3::from_mat4(m).inverse().transpose();
        let base = self.positions.len() as u32;

        self.positions.extend(other.positions.iter().map(|&p| m.transform_point3(p)));
        self.normals.extend(other.normals.iter().map(|&n| (normal_m * n).normalize_or_zero()));

        // A mirroring transform flips the winding.
        if m.determinant() < 0.0 {
            for tri in other.indices.chunks_exact(3) {
                self.indices.extend([base + tri[0], base + tri[2], base + tri[1]]);
            }
        } else {
            self.indices.extend(other.indices.iter().map(|i| base + i));
        }
    }
}
