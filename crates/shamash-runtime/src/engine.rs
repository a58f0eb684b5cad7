//! Contract between the viewer runtime and a rendering engine.
//!
//! The engine is opaque to the runtime: the runtime can nudge its camera
//! and ask for a full re-render, nothing else. Keeping the seam this
//! narrow lets tests drive the control loop with a scripted engine and
//! lets the tracer evolve without touching the windowing layer.

use thiserror::Error;

use crate::frame::{FrameError, FrameView};

/// One discrete camera displacement. The magnitude of a step is the
/// engine's business; the runtime only names the direction.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Motion {
    Left,
    Right,
    Up,
    Down,
    Forward,
    Back,
}

/// Rejection reasons for engine construction.
///
/// Construction is the only fallible moment an engine has besides frame
/// validation; once built, navigation cannot fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("cannot size a raster to {width}x{height}: zero dimension")]
    ZeroDimension { width: u32, height: u32 },

    #[error("raster {width}x{height} exceeds the {max} per-side limit")]
    RasterTooLarge { width: u32, height: u32, max: u32 },
}

/// A scene the runtime can navigate and re-render.
///
/// Implementations own both the scene state and the raster memory behind
/// the views they hand out; the borrow on [`render`](Engine::render) is
/// what keeps a view from outliving the next mutation.
pub trait Engine {
    /// Applies one camera step. Cheap: the raster is untouched until the
    /// next [`render`](Engine::render).
    fn apply(&mut self, motion: Motion);

    /// Recomputes every pixel from the current scene state and returns a
    /// view over the result. Blocks the calling thread for the full
    /// raster; a second call without an intervening `apply` yields
    /// byte-identical output.
    ///
    /// `Err` means the engine produced a buffer that contradicts its own
    /// dimensions, which is fatal to the caller.
    fn render(&mut self) -> Result<FrameView<'_>, FrameError>;
}
