use crate::color::Rgb;
use crate::ray::Ray;
use crate::vec3::Vec3;

/// Solid-colored sphere.
#[derive(Debug, Copy, Clone)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f64,
    pub color: Rgb,
}

impl Sphere {
    #[inline]
    pub const fn new(center: Vec3, radius: f64, color: Rgb) -> Self {
        Self { center, radius, color }
    }

    /// Distance along `ray` to the first hit, or `None` for a miss.
    ///
    /// With a unit-length direction the quadratic reduces to
    /// `t^2 + 2(d.oc)t + (oc.oc - r^2) = 0`. Roots behind the origin are
    /// not hits; from inside the sphere the far root is returned.
    pub fn intersect(&self, ray: Ray) -> Option<f64> {
        let oc = ray.origin - self.center;
        let half_b = ray.direction.dot(oc);
        let discriminant = half_b * half_b - oc.dot(oc) + self.radius * self.radius;

        if discriminant < 0.0 {
            return None;
        }

        let sqrt = discriminant.sqrt();
        [-half_b - sqrt, -half_b + sqrt]
            .into_iter()
            .find(|&t| t >= 0.0)
    }

    /// Surface normal at `point`, radius-length rather than unit-length.
    ///
    /// The lighting math divides by the normal's length itself, so
    /// normalizing here would be wasted work.
    #[inline]
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        point - self.center
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_sphere_at(z: f64) -> Sphere {
        Sphere::new(Vec3::new(0.0, 0.0, z), 1.0, Rgb::RED)
    }

    #[test]
    fn head_on_hit_returns_near_root() {
        let sphere = unit_sphere_at(5.0);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
        let t = sphere.intersect(ray).unwrap();
        assert!((t - 4.0).abs() < 1e-12);
    }

    #[test]
    fn offset_ray_misses() {
        let sphere = unit_sphere_at(5.0);
        let ray = Ray::new(Vec3::new(3.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(sphere.intersect(ray), None);
    }

    #[test]
    fn sphere_behind_origin_is_not_hit() {
        let sphere = unit_sphere_at(-5.0);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(sphere.intersect(ray), None);
    }

    #[test]
    fn origin_inside_returns_far_root() {
        let sphere = unit_sphere_at(0.0);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
        let t = sphere.intersect(ray).unwrap();
        assert!((t - 1.0).abs() < 1e-12);
    }

    #[test]
    fn grazing_ray_touches_once() {
        // Tangent ray: discriminant is exactly zero, both roots coincide.
        let sphere = unit_sphere_at(5.0);
        let ray = Ray::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
        let t = sphere.intersect(ray).unwrap();
        assert!((t - 5.0).abs() < 1e-12);
    }

    #[test]
    fn normal_points_out_of_center_with_radius_length() {
        let sphere = Sphere::new(Vec3::new(1.0, 2.0, 3.0), 2.0, Rgb::BLUE);
        let n = sphere.normal_at(Vec3::new(3.0, 2.0, 3.0));
        assert_eq!(n, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(n.length(), sphere.radius);
    }
}
