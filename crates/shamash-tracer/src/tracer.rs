use shamash_runtime::engine::{Engine, EngineError, Motion};
use shamash_runtime::frame::{FrameError, FrameView};

use crate::raster::Raster;
use crate::scene::Scene;

/// The demo scene bound to a fixed-size output raster.
///
/// This is the engine the viewer drives. Camera steps go straight to the
/// scene; renders overwrite the raster in place and hand back a view that
/// borrows it, so presenting a frame never copies pixels on the CPU side.
#[derive(Debug, Clone)]
pub struct Tracer {
    scene: Scene,
    raster: Raster,
}

impl Tracer {
    /// Builds the demo world with a `width` x `height` output raster.
    ///
    /// Fails when either dimension is zero or beyond
    /// [`MAX_DIM`](crate::raster::MAX_DIM); the raster size is fixed for
    /// the tracer's lifetime.
    pub fn create(width: u32, height: u32) -> Result<Self, EngineError> {
        let raster = Raster::new(width, height)?;
        let scene = Scene::demo();

        log::debug!(
            "tracer ready: {width}x{height} raster, {} spheres, {} lights",
            scene.spheres.len(),
            scene.lights.len(),
        );

        Ok(Self { scene, raster })
    }
}

impl Engine for Tracer {
    fn apply(&mut self, motion: Motion) {
        self.scene.camera.step(motion);
    }

    fn render(&mut self) -> Result<FrameView<'_>, FrameError> {
        self.scene.render_into(&mut self.raster);
        FrameView::new(self.raster.bytes(), self.raster.width(), self.raster.height())
    }
}
