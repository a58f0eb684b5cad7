use crate::camera::{Camera, Film};
use crate::color::Rgb;
use crate::light::Light;
use crate::raster::Raster;
use crate::sphere::Sphere;
use crate::vec3::Vec3;

/// World description: camera, spheres, lights.
#[derive(Debug, Clone)]
pub struct Scene {
    pub camera: Camera,
    pub spheres: Vec<Sphere>,
    pub lights: Vec<Light>,
}

impl Scene {
    /// The built-in demo world: three spheres under two point lights, with
    /// the camera a half film-width in from the plane's corner.
    pub fn demo() -> Self {
        let camera = Camera::new(
            Vec3::new(3.0, 3.0, 0.0),
            Film::new(Vec3::new(0.0, 0.0, 3.0), 6.0, 6.0),
        );

        let spheres = vec![
            Sphere::new(Vec3::new(2.0, 6.0, 8.0), 1.0, Rgb::RED),
            Sphere::new(Vec3::new(1.0, 6.0, 5.0), 1.0, Rgb::BLUE),
            Sphere::new(Vec3::new(3.0, 0.0, 12.0), 5.0, Rgb::GREEN),
        ];

        let lights = vec![
            Light::new(Vec3::new(1.0, 8.0, 0.0), 300.0),
            Light::new(Vec3::new(8.0, 5.0, 5.0), 300.0),
        ];

        Self { camera, spheres, lights }
    }

    /// Recomputes every pixel of `raster` from the current camera view.
    ///
    /// One primary ray per pixel, nearest hit wins (first sphere in
    /// declaration order on an exact tie), diffuse factors summed over all
    /// lights, black where nothing is hit. Every pixel is overwritten, so
    /// repeated renders of an unchanged scene produce identical bytes.
    pub fn render_into(&self, raster: &mut Raster) {
        let (width, height) = (raster.width(), raster.height());

        for y in 0..height {
            let y_frac = f64::from(y) / f64::from(height);

            for x in 0..width {
                let x_frac = f64::from(x) / f64::from(width);
                let ray = self.camera.cast(x_frac, y_frac);

                let nearest = self
                    .spheres
                    .iter()
                    .filter_map(|sphere| sphere.intersect(ray).map(|t| (sphere, t)))
                    .min_by(|a, b| a.1.total_cmp(&b.1));

                let color = match nearest {
                    Some((sphere, t)) => {
                        let point = ray.at(t);
                        let normal = sphere.normal_at(point);

                        let power: f64 = self
                            .lights
                            .iter()
                            .map(|light| light.illuminate(point, normal))
                            .sum();

                        sphere.color.shade(power)
                    }
                    None => Rgb::BLACK,
                };

                raster.put(x, y, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_world_shape() {
        let scene = Scene::demo();
        assert_eq!(scene.spheres.len(), 3);
        assert_eq!(scene.lights.len(), 2);
        assert_eq!(scene.camera.eye, Vec3::new(3.0, 3.0, 0.0));
    }

    #[test]
    fn render_fills_alpha_opaque() {
        let scene = Scene::demo();
        let mut raster = Raster::new(16, 16).unwrap();
        scene.render_into(&mut raster);

        assert!(raster.bytes().chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn demo_render_hits_geometry() {
        let scene = Scene::demo();
        let mut raster = Raster::new(32, 32).unwrap();
        scene.render_into(&mut raster);

        // At least one pixel is lit; the demo world sits in front of the film.
        assert!(raster.bytes().chunks_exact(4).any(|px| px[0] > 0 || px[1] > 0 || px[2] > 0));
    }

    #[test]
    fn demo_corners_stay_black() {
        let scene = Scene::demo();
        let mut raster = Raster::new(32, 32).unwrap();
        scene.render_into(&mut raster);

        // No demo sphere subtends the film's extreme corners.
        for (x, y) in [(0, 0), (31, 0), (0, 31), (31, 31)] {
            let idx = 4 * (x + y * 32);
            let px = &raster.bytes()[idx..idx + 4];
            assert_eq!([px[0], px[1], px[2]], [0, 0, 0], "corner ({x}, {y})");
        }
    }

    #[test]
    fn nearer_sphere_occludes() {
        // Two spheres stacked on the z axis straight ahead of the camera.
        // Pixel (4, 4) of an 8x8 raster samples film coordinate (0.5, 0.5),
        // so its ray runs exactly along +z and must shade the near, blue
        // sphere at full brightness (the light sits at the eye).
        let camera = Camera::new(
            Vec3::new(0.0, 0.0, 0.0),
            Film::new(Vec3::new(-3.0, -3.0, 1.0), 6.0, 6.0),
        );
        let scene = Scene {
            camera,
            spheres: vec![
                Sphere::new(Vec3::new(0.0, 0.0, 10.0), 1.0, Rgb::RED),
                Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, Rgb::BLUE),
            ],
            lights: vec![Light::new(Vec3::new(0.0, 0.0, 0.0), 500.0)],
        };

        let mut raster = Raster::new(8, 8).unwrap();
        scene.render_into(&mut raster);

        let idx = 4 * (4 + 4 * 8);
        let px = &raster.bytes()[idx..idx + 4];
        assert_eq!(px[0], 0, "red sphere must be occluded");
        assert_eq!(px[2], 255, "blue sphere must be fully lit");
    }
}
