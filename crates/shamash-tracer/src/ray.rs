use crate::vec3::Vec3;

/// A half-line from `origin` along `direction`.
///
/// Directions are unit length by convention; [`crate::camera::Camera`]
/// normalizes on construction and the intersection math relies on it.
#[derive(Debug, Copy, Clone)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    #[inline]
    pub const fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// The point reached after travelling `t` along the ray.
    #[inline]
    pub fn at(self, t: f64) -> Vec3 {
        self.origin + self.direction * t
    }
}
