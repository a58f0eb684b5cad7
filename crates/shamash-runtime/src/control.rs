//! The mutate-then-render cycle, independent of any window.
//!
//! [`Controller`] owns an [`Engine`] and decides when it renders. The
//! window runtime feeds key presses in and presents whatever view comes
//! back out; everything order-sensitive lives here where it can be tested
//! without a display.

use std::time::Instant;

use crate::engine::Engine;
use crate::frame::{FrameError, FrameView};
use crate::input::{self, Key, Modifiers};

/// Drives one engine through the navigate/re-render cycle.
///
/// A controller exists only once the engine does, so holding one is proof
/// the viewer is past startup; from then on the only state transition is
/// the self-loop of accepted commands. A render happens exactly when a
/// view is returned; there is no hidden frame pump.
pub struct Controller<E> {
    engine: E,
    frames: u64,
}

impl<E: Engine> Controller<E> {
    pub fn new(engine: E) -> Self {
        Self { engine, frames: 0 }
    }

    /// One-shot startup render, to be presented before any input is read.
    pub fn bootstrap(&mut self) -> Result<FrameView<'_>, FrameError> {
        self.render_timed()
    }

    /// Feeds one key press through the command table.
    ///
    /// Returns `Ok(None)` when the press maps to no command: the engine is
    /// untouched and nothing is rendered, so idle key traffic costs
    /// nothing. Otherwise the engine is stepped and fully re-rendered, and
    /// the fresh view is handed back for presentation.
    pub fn handle_key(
        &mut self,
        key: Key,
        modifiers: Modifiers,
    ) -> Result<Option<FrameView<'_>>, FrameError> {
        let Some(motion) = input::command_for(key, modifiers) else {
            log::trace!("ignoring {key} ({modifiers:?})");
            return Ok(None);
        };

        log::debug!("applying {motion:?}");
        self.engine.apply(motion);
        self.render_timed().map(Some)
    }

    /// Frames rendered so far, the startup render included.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Read access to the engine, mainly for inspection in tests.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    fn render_timed(&mut self) -> Result<FrameView<'_>, FrameError> {
        let started = Instant::now();
        let view = self.engine.render()?;
        self.frames += 1;
        log::debug!(
            "frame {} rendered in {:.1?} ({}x{})",
            self.frames,
            started.elapsed(),
            view.width(),
            view.height(),
        );
        Ok(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Motion;

    /// Engine double that records every call and renders from a fixed
    /// buffer. `lie_by` shrinks the buffer it reports, for exercising the
    /// malformed-frame path.
    struct ScriptedEngine {
        width: u32,
        height: u32,
        raster: Vec<u8>,
        lie_by: usize,
        applied: Vec<Motion>,
        renders: u32,
    }

    impl ScriptedEngine {
        fn new(width: u32, height: u32) -> Self {
            let raster = vec![7u8; (width * height * 4) as usize];
            Self { width, height, raster, lie_by: 0, applied: Vec::new(), renders: 0 }
        }
    }

    impl Engine for ScriptedEngine {
        fn apply(&mut self, motion: Motion) {
            self.applied.push(motion);
        }

        fn render(&mut self) -> Result<FrameView<'_>, FrameError> {
            self.renders += 1;
            let bytes = &self.raster[..self.raster.len() - self.lie_by];
            FrameView::new(bytes, self.width, self.height)
        }
    }

    fn plain() -> Modifiers {
        Modifiers::default()
    }

    // ── startup ───────────────────────────────────────────────────────────

    #[test]
    fn bootstrap_renders_one_full_frame() {
        let mut controller = Controller::new(ScriptedEngine::new(800, 600));

        let view = controller.bootstrap().unwrap();
        assert_eq!(view.width(), 800);
        assert_eq!(view.height(), 600);
        assert_eq!(view.pixels().len(), 800 * 600 * 4);

        assert_eq!(controller.frames(), 1);
        assert_eq!(controller.engine().renders, 1);
        assert!(controller.engine().applied.is_empty());
    }

    // ── accepted commands ─────────────────────────────────────────────────

    #[test]
    fn each_accepted_press_mutates_then_renders() {
        let mut controller = Controller::new(ScriptedEngine::new(4, 4));

        let first = controller.handle_key(Key::Char('j'), plain()).unwrap();
        assert!(first.is_some());
        let second = controller.handle_key(Key::Char('k'), plain()).unwrap();
        assert!(second.is_some());

        // Two discrete cycles, in press order.
        assert_eq!(controller.engine().applied, vec![Motion::Down, Motion::Up]);
        assert_eq!(controller.engine().renders, 2);
        assert_eq!(controller.frames(), 2);
    }

    #[test]
    fn held_key_repeats_as_discrete_presses() {
        let mut controller = Controller::new(ScriptedEngine::new(4, 4));

        for _ in 0..5 {
            controller.handle_key(Key::Char('w'), plain()).unwrap();
        }

        assert_eq!(controller.engine().applied, vec![Motion::Forward; 5]);
        assert_eq!(controller.engine().renders, 5);
    }

    // ── ignored input ─────────────────────────────────────────────────────

    #[test]
    fn chorded_press_does_no_work() {
        let mut controller = Controller::new(ScriptedEngine::new(4, 4));
        let ctrl = Modifiers { ctrl: true, ..Modifiers::default() };

        let out = controller.handle_key(Key::Char('s'), ctrl).unwrap();
        assert!(out.is_none());
        assert_eq!(controller.engine().renders, 0);
        assert!(controller.engine().applied.is_empty());
    }

    #[test]
    fn unbound_press_does_no_work() {
        let mut controller = Controller::new(ScriptedEngine::new(4, 4));

        assert!(controller.handle_key(Key::Char('x'), plain()).unwrap().is_none());
        assert!(controller.handle_key(Key::Other, plain()).unwrap().is_none());
        assert_eq!(controller.engine().renders, 0);
        assert_eq!(controller.frames(), 0);
    }

    // ── malformed frames ──────────────────────────────────────────────────

    #[test]
    fn lying_engine_surfaces_a_frame_error() {
        let mut engine = ScriptedEngine::new(8, 8);
        engine.lie_by = 4;
        let mut controller = Controller::new(engine);

        let err = controller.bootstrap().unwrap_err();
        assert!(matches!(err, FrameError::SizeMismatch { .. }));
    }
}
