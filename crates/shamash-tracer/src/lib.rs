//! A small diffuse sphere tracer.
//!
//! The crate renders a fixed demo world to an RGBA8 raster on the CPU and
//! exposes it behind `shamash-runtime`'s engine contract: the viewer nudges
//! the camera around, and every render synchronously recomputes the whole
//! frame. One primary ray per pixel against a handful of spheres, diffuse
//! point lights, no shadows, no bounces.

pub mod camera;
pub mod color;
pub mod light;
pub mod raster;
pub mod ray;
pub mod scene;
pub mod sphere;
pub mod vec3;

mod tracer;

pub use tracer::Tracer;
