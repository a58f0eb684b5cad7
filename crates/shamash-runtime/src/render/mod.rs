//! Frame presentation.
//!
//! One renderer lives here: the blitter that pushes CPU-rendered frames
//! onto the window surface via wgpu. It owns its own GPU resources
//! (pipeline, frame texture, quad buffers) and creates them lazily against
//! the first [`RenderCtx`] it sees.

mod blit;
mod ctx;

pub use blit::FrameBlitter;
pub use ctx::{RenderCtx, RenderTarget};
