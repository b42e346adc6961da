use glam::Vec3;
use serde::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct AABB {
    pub min: Vec3,
    pub max: Vec3,
}

impl AABB {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Tightest box around `points`, or `None` for an empty set
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<AABB> {
        points.into_iter().fold(None, |bounds, p| {
            Some(match bounds {
                None => AABB::new(p, p),
                Some(b) => AABB::new(b.min.min(p), b.max.max(p)),
            })
        })
    }

    pub fn union(&self, other: &AABB) -> AABB {
        AABB {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn contains(&self, point: Vec3, epsilon: f32) -> bool {
        point.cmpge(self.min - Vec3::splat(epsilon)).all()
            && point.cmple(self.max + Vec3::splat(epsilon)).all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points_empty() {
        assert!(AABB::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn test_from_points_spans_extremes() {
        let aabb = AABB::from_points([
            Vec3::new(1.0, -2.0, 0.0),
            Vec3::new(-3.0, 4.0, 2.0),
            Vec3::new(0.0, 0.0, -5.0),
        ])
        .unwrap();
        assert_eq!(aabb.min, Vec3::new(-3.0, -2.0, -5.0));
        assert_eq!(aabb.max, Vec3::new(1.0, 4.0, 2.0));
    }

    #[test]
    fn test_aabb_union_non_overlapping() {
        let aabb1 = AABB::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
        let aabb2 = AABB::new(Vec3::new(2.0, 2.0, 2.0), Vec3::new(3.0, 3.0, 3.0));
        let union = aabb1.union(&aabb2);
        assert_eq!(union.min, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(union.max, Vec3::new(3.0, 3.0, 3.0));
    }

    #[test]
    fn test_contains_with_tolerance() {
        let aabb = AABB::new(Vec3::ZERO, Vec3::ONE);
        assert!(aabb.contains(Vec3::splat(0.5), 0.0));
        assert!(aabb.contains(Vec3::new(1.0005, 0.5, 0.5), 1e-3));
        assert!(!aabb.contains(Vec3::new(1.5, 0.5, 0.5), 1e-3));
    }
}
