//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the single viewer window, and wires
//! platform key events into the control loop.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
