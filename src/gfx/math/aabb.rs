use cgmath::{Matrix4, Point3, Transform as _, Vector3};

/// Axis-aligned bounding box in world or local space
///
/// An empty box has `min > max` on every axis so that the first expansion
/// snaps it onto the expanding point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vector3<f32>,
    pub max: Vector3<f32>,
}

impl Aabb {
    pub fn new(min: Vector3<f32>, max: Vector3<f32>) -> Self {
        Self { min, max }
    }

    pub fn empty() -> Self {
        Self {
            min: Vector3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY),
            max: Vector3::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.max.x < self.min.x || self.max.y < self.min.y || self.max.z < self.min.z
    }

    /// Smallest box holding every point, empty for an empty iterator
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Vector3<f32>>,
    {
        points.into_iter().fold(Self::empty(), |mut aabb, p| {
            aabb.expand_by_point(p);
            aabb
        })
    }

    pub fn expand_by_point(&mut self, p: Vector3<f32>) {
        self.min = Vector3::new(self.min.x.min(p.x), self.min.y.min(p.y), self.min.z.min(p.z));
        self.max = Vector3::new(self.max.x.max(p.x), self.max.y.max(p.y), self.max.z.max(p.z));
    }

    pub fn union(&self, other: &Aabb) -> Aabb {
        let mut out = *self;
        if !other.is_empty() {
            out.expand_by_point(other.min);
            out.expand_by_point(other.max);
        }
        out
    }

    pub fn center(&self) -> Vector3<f32> {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vector3<f32> {
        self.max - self.min
    }

    pub fn contains_point(&self, p: Vector3<f32>, tolerance: f32) -> bool {
        p.x >= self.min.x - tolerance
            && p.y >= self.min.y - tolerance
            && p.z >= self.min.z - tolerance
            && p.x <= self.max.x + tolerance
            && p.y <= self.max.y + tolerance
            && p.z <= self.max.z + tolerance
    }

    pub fn contains(&self, other: &Aabb, tolerance: f32) -> bool {
        other.is_empty()
            || (self.contains_point(other.min, tolerance) && self.contains_point(other.max, tolerance))
    }

    /// Box around the eight corners after applying `matrix`
    pub fn transformed(&self, matrix: &Matrix4<f32>) -> Aabb {
        if self.is_empty() {
            return *self;
        }
        let corners = (0..8).map(|i| {
            let x = if i & 1 == 0 { self.min.x } else { self.max.x };
            let y = if i & 2 == 0 { self.min.y } else { self.max.y };
            let z = if i & 4 == 0 { self.min.z } else { self.max.z };
            let p = matrix.transform_point(Point3::new(x, y, z));
            Vector3::new(p.x, p.y, p.z)
        });
        Aabb::from_points(corners)
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Rad;

    #[test]
    fn test_aabb_empty_absorbs_first_point() {
        let mut aabb = Aabb::empty();
        assert!(aabb.is_empty());

        aabb.expand_by_point(Vector3::new(1.0, 2.0, 3.0));
        assert!(!aabb.is_empty());
        assert_eq!(aabb.min, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(aabb.max, Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_aabb_center_negative() {
        let aabb = Aabb::new(Vector3::new(-2.0, -4.0, -6.0), Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(aabb.center(), Vector3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_aabb_union_with_empty_is_identity() {
        let aabb = Aabb::new(Vector3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(aabb.union(&Aabb::empty()), aabb);
        assert_eq!(Aabb::empty().union(&aabb), aabb);
    }

    #[test]
    fn test_aabb_union_non_overlapping() {
        let a = Aabb::new(Vector3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 1.0, 1.0));
        let b = Aabb::new(Vector3::new(2.0, 2.0, 2.0), Vector3::new(3.0, 3.0, 3.0));
        let union = a.union(&b);
        assert_eq!(union.min, Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(union.max, Vector3::new(3.0, 3.0, 3.0));
    }

    #[test]
    fn test_aabb_contains_with_tolerance() {
        let aabb = Aabb::new(Vector3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 1.0, 1.0));
        assert!(aabb.contains_point(Vector3::new(1.0005, 0.5, 0.5), 1e-3));
        assert!(!aabb.contains_point(Vector3::new(1.1, 0.5, 0.5), 1e-3));
    }

    #[test]
    fn test_aabb_transformed_by_quarter_turn() {
        let aabb = Aabb::new(Vector3::new(-1.0, 0.0, -2.0), Vector3::new(1.0, 1.0, 2.0));
        let rotated = aabb.transformed(&Matrix4::from_angle_y(Rad(std::f32::consts::FRAC_PI_2)));

        assert!((rotated.min.x + 2.0).abs() < 1e-5);
        assert!((rotated.max.x - 2.0).abs() < 1e-5);
        assert!((rotated.min.z + 1.0).abs() < 1e-5);
        assert!((rotated.max.z - 1.0).abs() < 1e-5);
    }
}
