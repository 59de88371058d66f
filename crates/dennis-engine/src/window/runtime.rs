use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::canvas::Canvas;
use crate::coords::Viewport;
use crate::core::{App as CoreApp, AppControl, FrameCtx};
use crate::device::{Gpu, GpuInit, SurfaceErrorAction};
use crate::render::Presenter;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    /// Initial client-area size in physical pixels, so one backbuffer pixel
    /// maps to one screen pixel.
    pub initial_size: PhysicalSize<u32>,
    pub resizable: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "Dennis".to_string(),
            initial_size: PhysicalSize::new(640, 480),
            resizable: true,
        }
    }
}

/// Entry point for the frame loop.
pub struct Runtime;

impl Runtime {
    /// Opens the window, runs the loop until the window is closed, and tears
    /// everything down.
    ///
    /// Returns an error if the event loop, window or GPU context cannot be
    /// created.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = RuntimeState::new(config, gpu_init, app);

        let run_result = event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error");

        state.shutdown();
        run_result?;

        match state.init_error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Window, its GPU context, and the per-window frame state.
#[self_referencing]
struct WindowEntry {
    canvas: Canvas,
    viewport: Viewport,
    presenter: Presenter,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct RuntimeState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    window: Option<WindowEntry>,
    frame_index: u64,

    exit_requested: bool,
    shut_down: bool,
    init_error: Option<anyhow::Error>,
}

impl<A> RuntimeState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            window: None,
            frame_index: 0,
            exit_requested: false,
            shut_down: false,
            init_error: None,
        }
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        event_loop.exit();
    }

    fn create_window_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_resizable(self.config.resizable);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let size = window.inner_size();
        let gpu_init = self.gpu_init.clone();

        let entry = WindowEntryTryBuilder {
            canvas: Canvas::new(size.width, size.height),
            viewport: Viewport::new(size.width, size.height),
            presenter: Presenter::new(),
            window,
            gpu_builder: |w| {
                pollster::block_on(Gpu::new(w, gpu_init))
                    .context("GPU initialization failed for window")
            },
        }
        .try_build()?;

        log::info!("window \"{}\" opened at {}x{}", self.config.title, size.width, size.height);
        Ok(entry)
    }

    /// Releases the GPU context and the window. Runs once, whatever the exit
    /// path.
    fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;

        self.app.on_exit();

        // ouroboros drops `gpu` before the `window` it borrows.
        if self.window.take().is_some() {
            log::info!("window and GPU context released after {} frames", self.frame_index);
        }
    }

    fn handle_resize(&mut self, new_size: PhysicalSize<u32>) {
        let Some(entry) = self.window.as_mut() else { return };

        entry.with_mut(|fields| {
            fields.gpu.resize(new_size);

            let (gpu, presenter, window) = (fields.gpu, fields.presenter, fields.window);
            apply_resize(fields.canvas, fields.viewport, new_size, |canvas| {
                window.pre_present_notify();
                if let Some(action) = presenter.present(gpu, canvas) {
                    log::debug!("resize present skipped: {action:?}");
                }
            });
        });

        log::debug!("viewport resized to {}x{}", new_size.width, new_size.height);
    }

    fn draw_frame(&mut self) -> AppControl {
        let (app, frame_index) = (&mut self.app, &mut self.frame_index);
        let Some(entry) = self.window.as_mut() else {
            return AppControl::Continue;
        };

        entry.with_mut(|fields| {
            let index = *frame_index;
            let control = {
                let mut ctx = FrameCtx {
                    canvas: &mut *fields.canvas,
                    viewport: *fields.viewport,
                    frame_index: index,
                };
                app.on_frame(&mut ctx)
            };
            *frame_index = index.wrapping_add(1);

            fields.window.pre_present_notify();
            match fields.presenter.present(fields.gpu, fields.canvas) {
                Some(SurfaceErrorAction::Fatal) => {
                    log::error!("surface is unusable (out of memory); stopping");
                    AppControl::Exit
                }
                Some(action) => {
                    log::debug!("frame {index} not presented: {action:?}");
                    control
                }
                None => control,
            }
        })
    }
}

/// Backbuffer side of a resize: reallocate and clear the canvas, hand the
/// cleared buffer to `present` (skipped for a minimised 0x0 window), then
/// record the new viewport size.
fn apply_resize<F>(canvas: &mut Canvas, viewport: &mut Viewport, new_size: PhysicalSize<u32>, present: F)
where
    F: FnOnce(&Canvas),
{
    canvas.resize(new_size.width, new_size.height);

    if new_size.width > 0 && new_size.height > 0 {
        present(canvas);
    }

    viewport.set(new_size.width, new_size.height);
}

impl<A> ApplicationHandler for RuntimeState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.exit_requested {
            return;
        }

        match self.create_window_entry(event_loop) {
            Ok(entry) => {
                entry.with_window(|w| w.request_redraw());
                self.window = Some(entry);
            }
            Err(e) => {
                log::error!("failed to initialize window: {e:#}");
                self.init_error = Some(e);
                self.request_exit(event_loop);
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Pending events are drained by now; draw exactly one frame next.
        if let Some(entry) = self.window.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let is_ours = self
            .window
            .as_ref()
            .is_some_and(|entry| entry.with_window(|w| w.id()) == window_id);
        if !is_ours || self.exit_requested {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("close requested");
                self.request_exit(event_loop);
            }

            WindowEvent::Resized(new_size) => self.handle_resize(new_size),

            WindowEvent::ScaleFactorChanged { .. } => {
                let size = self
                    .window
                    .as_ref()
                    .map(|entry| entry.with_window(|w| w.inner_size()));
                if let Some(size) = size {
                    self.handle_resize(size);
                }
            }

            WindowEvent::RedrawRequested => {
                if self.draw_frame() == AppControl::Exit {
                    self.request_exit(event_loop);
                }
            }

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.shutdown();
    }
}
