use crate::vec3::Vec3;

/// Point light with an isotropic power term.
#[derive(Debug, Copy, Clone)]
pub struct Light {
    pub pos: Vec3,
    pub power: f64,
}

impl Light {
    #[inline]
    pub const fn new(pos: Vec3, power: f64) -> Self {
        Self { pos, power }
    }

    /// Diffuse lighting factor arriving at `point` with surface `normal`.
    ///
    /// Inverse-square falloff times the Lambert cosine. The normal need
    /// not be unit length; the cosine is normalized against it here. There
    /// are no shadow rays, so every light reaches every point.
    ///
    /// Points facing away from the light yield a negative factor, which
    /// [`crate::color::Rgb::shade`] clamps to black.
    pub fn illuminate(&self, point: Vec3, normal: Vec3) -> f64 {
        let to_light = self.pos - point;
        let cosine = normal.dot(to_light.unit()) / normal.length();
        self.power * cosine / (4.0 * std::f64::consts::PI * to_light.dot(to_light))
    }
}
