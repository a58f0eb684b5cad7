//! Shamash runtime crate.
//!
//! This crate owns the viewer's platform pieces: the window + event loop,
//! the GPU surface, keyboard translation, and the control loop that turns
//! navigation commands into synchronous render-and-present cycles. Image
//! synthesis itself lives behind the [`engine::Engine`] contract, so the
//! runtime never sees a scene, only finished frames.

pub mod device;
pub mod window;
pub mod input;
pub mod engine;
pub mod frame;
pub mod control;

pub mod logging;
pub mod render;
