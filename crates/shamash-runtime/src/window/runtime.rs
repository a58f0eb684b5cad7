use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{Key as WinitKey, ModifiersState};
use winit::window::{Window, WindowId};

use crate::control::Controller;
use crate::device::{Gpu, GpuInit, SurfaceErrorAction};
use crate::engine::{Engine, EngineError};
use crate::frame::FrameView;
use crate::input::{InputState, Key, Modifiers};
use crate::render::{FrameBlitter, RenderCtx, RenderTarget};

/// Window/runtime configuration.
///
/// `width`/`height` are physical pixels. They fix the engine's raster size
/// for the life of the process, so the window is created non-resizable to
/// match; only the compositor can still force a different surface size.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "shamash".to_string(),
            width: 800,
            height: 600,
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Runs the viewer until its window closes.
    ///
    /// `factory` builds the engine exactly once, sized to the physical
    /// dimensions the platform actually granted the window. Everything
    /// fallible happens up front: window, GPU, engine, first frame. Any of
    /// those failing, or a later frame-contract violation, tears the loop
    /// down and surfaces the error here.
    pub fn run<E, F>(config: RuntimeConfig, gpu_init: GpuInit, factory: F) -> Result<()>
    where
        E: Engine,
        F: FnOnce(u32, u32) -> Result<E, EngineError>,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, factory);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.fatal {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct SurfaceEntry {
    input: InputState,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<E, F> {
    config: RuntimeConfig,
    gpu_init: GpuInit,

    /// Consumed on first (and only) window creation.
    factory: Option<F>,

    surface: Option<SurfaceEntry>,
    controller: Option<Controller<E>>,
    blitter: FrameBlitter,

    /// First fatal error, carried out of the event loop by `Runtime::run`.
    fatal: Option<anyhow::Error>,
}

impl<E, F> AppState<E, F>
where
    E: Engine,
    F: FnOnce(u32, u32) -> Result<E, EngineError>,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, factory: F) -> Self {
        Self {
            config,
            gpu_init,
            factory: Some(factory),
            surface: None,
            controller: None,
            blitter: FrameBlitter::new(),
            fatal: None,
        }
    }

    /// Builds window, GPU context and engine, then renders and presents the
    /// first frame. Called from `resumed`; nothing else creates state.
    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height))
            .with_resizable(false);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        // The engine raster follows what the platform actually granted,
        // not what was requested.
        let size = window.inner_size();

        let gpu_init = self.gpu_init.clone();
        let mut entry = SurfaceEntryTryBuilder {
            input: InputState::default(),
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("GPU initialization failed")?;

        let factory = self
            .factory
            .take()
            .context("engine factory already consumed")?;
        let engine = factory(size.width, size.height)
            .with_context(|| format!("engine rejected raster size {}x{}", size.width, size.height))?;
        let mut controller = Controller::new(engine);

        log::info!("viewer ready: {}x{} raster", size.width, size.height);

        // Startup frame: rendered and presented before any input is read.
        let view = controller.bootstrap().context("startup render failed")?;
        present_frame(&mut entry, &mut self.blitter, Some(&view))?;

        self.surface = Some(entry);
        self.controller = Some(controller);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("fatal: {err:#}");
        if self.fatal.is_none() {
            self.fatal = Some(err);
        }
        event_loop.exit();
    }
}

impl<E, F> ApplicationHandler for AppState<E, F>
where
    E: Engine,
    F: FnOnce(u32, u32) -> Result<E, EngineError>,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.surface.is_some() {
            return;
        }

        if let Err(e) = self.init(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Render-on-demand: the loop sleeps until the platform delivers
        // input or an expose. No redraws are requested from here.
        event_loop.set_control_flow(ControlFlow::Wait);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("close requested");
                event_loop.exit();
            }

            WindowEvent::Focused(focused) => {
                if let Some(entry) = self.surface.as_mut() {
                    entry.with_input_mut(|input| input.set_focused(focused));
                }
            }

            WindowEvent::ModifiersChanged(m) => {
                let modifiers = map_modifiers(m.state());
                if let Some(entry) = self.surface.as_mut() {
                    entry.with_input_mut(|input| input.set_modifiers(modifiers));
                }
            }

            WindowEvent::Resized(new_size) => {
                // The raster stays fixed; only the swapchain follows the
                // compositor-imposed size.
                if let Some(entry) = self.surface.as_mut() {
                    entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                    entry.with_window(|w| w.request_redraw());
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = self.surface.as_mut() {
                    let new_size = entry.with_window(|w| w.inner_size());
                    entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                    entry.with_window(|w| w.request_redraw());
                }
            }

            WindowEvent::RedrawRequested => {
                // Expose repaint: the retained frame texture is drawn again;
                // the engine is not consulted and no pixels are recomputed.
                let Some(entry) = self.surface.as_mut() else { return };
                if let Err(e) = present_frame(entry, &mut self.blitter, None) {
                    self.fail(event_loop, e);
                }
            }

            WindowEvent::KeyboardInput { event, is_synthetic, .. } => {
                // Synthetic presses arrive on focus gain for keys already
                // held; they are not user commands. Releases carry none
                // either. Auto-repeat presses do count, one step each.
                if is_synthetic || event.state != ElementState::Pressed {
                    return;
                }

                let Some(entry) = self.surface.as_mut() else { return };
                let Some(controller) = self.controller.as_mut() else { return };

                let key = map_key(&event.logical_key);
                let modifiers = entry.with_input(|input| input.modifiers);

                if let Err(e) = drive_key(entry, controller, &mut self.blitter, key, modifiers) {
                    self.fail(event_loop, e);
                }
            }

            _ => {}
        }
    }
}

/// Runs the full cycle for one key press: map, mutate, render, present.
///
/// Presses that map to no command return without touching the engine or
/// the surface.
fn drive_key<E: Engine>(
    entry: &mut SurfaceEntry,
    controller: &mut Controller<E>,
    blitter: &mut FrameBlitter,
    key: Key,
    modifiers: Modifiers,
) -> Result<()> {
    let rendered = controller
        .handle_key(key, modifiers)
        .context("engine returned a malformed frame")?;

    match rendered {
        None => Ok(()),
        Some(view) => present_frame(entry, blitter, Some(&view)),
    }
}

/// Uploads `view` (when given) and draws the retained frame to the surface.
///
/// Surface loss is handled inline: the swapchain is reconfigured and the
/// frame is simply skipped, since the blitter still holds the image and the
/// follow-up expose will repaint it. Out-of-memory is fatal.
fn present_frame(
    entry: &mut SurfaceEntry,
    blitter: &mut FrameBlitter,
    view: Option<&FrameView<'_>>,
) -> Result<()> {
    entry.with_mut(|fields| {
        if let Some(view) = view {
            let ctx = RenderCtx::new(
                fields.gpu.device(),
                fields.gpu.queue(),
                fields.gpu.surface_format(),
            );
            blitter.upload(&ctx, view);
        }

        if !blitter.has_frame() {
            return Ok(());
        }

        let mut frame = match fields.gpu.begin_frame() {
            Ok(frame) => frame,
            Err(err) => {
                return match fields.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => Err(anyhow::anyhow!("display surface is out of memory")),
                    SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => Ok(()),
                };
            }
        };

        let ctx = RenderCtx::new(
            fields.gpu.device(),
            fields.gpu.queue(),
            fields.gpu.surface_format(),
        );
        {
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            blitter.draw(&ctx, &mut target);
        }

        fields.window.pre_present_notify();
        fields.gpu.submit(frame);
        Ok(())
    })
}

fn map_modifiers(m: ModifiersState) -> Modifiers {
    Modifiers {
        shift: m.shift_key(),
        ctrl: m.control_key(),
        alt: m.alt_key(),
        meta: m.super_key(),
    }
}

/// Reduces a winit logical key to the navigation layer's [`Key`].
///
/// The logical key already reflects the active keymap and shift state,
/// which is exactly what a case-sensitive command table wants. Multi-char
/// sequences (IME output, dead-key compositions) and named keys are not
/// single character presses and collapse to [`Key::Other`].
fn map_key(key: &WinitKey) -> Key {
    match key {
        WinitKey::Character(s) => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Key::Char(c),
                _ => Key::Other,
            }
        }
        _ => Key::Other,
    }
}
