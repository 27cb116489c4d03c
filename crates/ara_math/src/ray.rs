use crate::Vec3;

/// A ray in 3D space with origin and direction.
///
/// Rays here are viewer rays: they represent a line starting at `origin`
/// (the device position) and traveling in `direction` (where the device
/// points). Surface hit testing intersects them against detected geometry.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Intersect against the horizontal plane `y = height`.
    ///
    /// Returns the ray parameter t of the intersection, or `None` when the
    /// ray is parallel to the plane or the intersection lies behind the
    /// origin. Grazing rays (|dy| near zero) are treated as parallel.
    pub fn intersect_ground(&self, height: f32) -> Option<f32> {
        const EPSILON: f32 = 1e-6;

        if self.direction.y.abs() < EPSILON {
            return None;
        }

        let t = (height - self.origin.y) / self.direction.y;
        if t > 0.0 {
            Some(t)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        assert_eq!(ray.at(0.0), Vec3::ZERO);
        assert_eq!(ray.at(1.0), Vec3::X);
        assert_eq!(ray.at(2.0), Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_ground_hit_below() {
        // Standing at eye height, looking down and forward
        let ray = Ray::new(
            Vec3::new(0.0, 1.6, 0.0),
            Vec3::new(0.0, -1.0, -1.0).normalize(),
        );

        let t = ray.intersect_ground(0.0).expect("should hit the floor");
        let p = ray.at(t);
        assert!(p.y.abs() < 1e-5);
        assert!(p.z < 0.0);
    }

    #[test]
    fn test_ground_miss_above_horizon() {
        let ray = Ray::new(Vec3::new(0.0, 1.6, 0.0), Vec3::new(0.0, 0.2, -1.0).normalize());
        assert!(ray.intersect_ground(0.0).is_none());
    }

    #[test]
    fn test_ground_miss_parallel() {
        let ray = Ray::new(Vec3::new(0.0, 1.6, 0.0), Vec3::NEG_Z);
        assert!(ray.intersect_ground(0.0).is_none());
    }

    #[test]
    fn test_ground_behind_origin() {
        // Looking up while above the plane: intersection is behind us
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 1.0, -1.0).normalize());
        assert!(ray.intersect_ground(0.0).is_none());
    }
}
