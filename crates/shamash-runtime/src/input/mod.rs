//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! Runtime code is responsible for translating platform key events into
//! [`Key`] + [`Modifiers`] pairs before they reach the command mapping.

mod map;
mod state;
mod types;

pub use map::command_for;
pub use state::InputState;
pub use types::{Key, Modifiers};
