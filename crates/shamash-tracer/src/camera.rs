use shamash_runtime::engine::Motion;

use crate::ray::Ray;
use crate::vec3::Vec3;

/// The image plane. Primary rays pass from the eye through points on this
/// axis-aligned rectangle.
#[derive(Debug, Copy, Clone)]
pub struct Film {
    pub origin: Vec3,
    pub width: f64,
    pub height: f64,
}

impl Film {
    #[inline]
    pub const fn new(origin: Vec3, width: f64, height: f64) -> Self {
        Self { origin, width, height }
    }

    /// World position of the fractional film coordinate `(x, y)`, both in
    /// `[0, 1)` with `y` growing downward in raster order. `origin` is the
    /// bottom-left corner of the plane.
    pub fn project(&self, x: f64, y: f64) -> Vec3 {
        Vec3::new(
            self.origin.x + self.width * x,
            self.origin.y + self.height - self.height * y,
            self.origin.z,
        )
    }
}

/// Eye point plus film plane.
///
/// Both translate together under [`step`](Camera::step), so the viewing
/// direction never changes; navigation slides the whole camera rig.
#[derive(Debug, Copy, Clone)]
pub struct Camera {
    pub eye: Vec3,
    pub film: Film,
}

impl Camera {
    #[inline]
    pub const fn new(eye: Vec3, film: Film) -> Self {
        Self { eye, film }
    }

    /// Ray from the eye through film coordinate `(x, y)`.
    pub fn cast(&self, x: f64, y: f64) -> Ray {
        let direction = (self.film.project(x, y) - self.eye).unit();
        Ray::new(self.eye, direction)
    }

    /// Translates the rig one world unit in the given direction.
    ///
    /// Steps are exact: the delta components are small integers, so a step
    /// and its inverse restore the previous position bit-for-bit, and a
    /// render after forward-then-back reproduces the previous frame.
    pub fn step(&mut self, motion: Motion) {
        let delta = match motion {
            Motion::Left => Vec3::new(-1.0, 0.0, 0.0),
            Motion::Right => Vec3::new(1.0, 0.0, 0.0),
            Motion::Up => Vec3::new(0.0, 1.0, 0.0),
            Motion::Down => Vec3::new(0.0, -1.0, 0.0),
            Motion::Forward => Vec3::new(0.0, 0.0, 1.0),
            Motion::Back => Vec3::new(0.0, 0.0, -1.0),
        };

        self.eye = self.eye + delta;
        self.film.origin = self.film.origin + delta;
    }
}
