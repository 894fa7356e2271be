use glam::{Mat4, Vec3};

/// Axis-aligned bounding box.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    #[inline]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Smallest box containing every point, or `None` for an empty iterator.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vec3>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::new(first, first), |b, p| Self::new(b.min.min(p), b.max.max(p))))
    }

    #[inline]
    pub fn union(self, other: Self) -> Self {
        Self::new(self.min.min(other.min), self.max.max(other.max))
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Box enclosing the eight corners after applying `m`.
    pub fn transformed(&self, m: Mat4) -> Self {
        let (lo, hi) = (self.min, self.max);
        let corners = [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(lo.x, hi.y, hi.z),
            Vec3::new(hi.x, hi.y, hi.z),
        ];
        // Eight corners: never empty.
        Self::from_points(corners.into_iter().map(|c| m.transform_point3(c)))
            .unwrap_or(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points_empty_is_none() {
        assert!(Aabb::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn from_points_spans_extremes() {
        let b = Aabb::from_points([
            Vec3::new(1.0, -2.0, 0.0),
            Vec3::new(-1.0, 3.0, 4.0),
            Vec3::new(0.5, 0.0, -4.0),
        ])
        .unwrap();
        assert_eq!(b.min, Vec3::new(-1.0, -2.0, -4.0));
        assert_eq!(b.max, Vec3::new(1.0, 3.0, 4.0));
        assert_eq!(b.center(), Vec3::new(0.0, 0.5, 0.0));
    }

    #[test]
    fn transformed_by_scale_and_translation() {
        let b = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let m = Mat4::from_translation(Vec3::new(1.0, 0.0, 0.0)) * Mat4::from_scale(Vec3::splat(2.0));
        let t = b.transformed(m);
        assert_eq!(t.min, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(t.max, Vec3::new(3.0, 2.0, 2.0));
    }

    #[test]
    fn union_covers_both() {
        let a = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::new(Vec3::splat(-1.0), Vec3::splat(0.5));
        let u = a.union(b);
        assert_eq!(u.min, Vec3::splat(-1.0));
        assert_eq!(u.max, Vec3::ONE);
        assert_eq!(u.size(), Vec3::splat(2.0));
    }
}
