//! Main GUI application loop.

use crate::controllers::interactive::errors::SetupError;
use crate::controllers::interactive::GestureController;
use crate::core::config::explorer_config::ExplorerConfig;
use crate::core::data::canvas_size::CanvasSize;
use crate::input::gui::errors::GuiError;
use crate::input::gui::translate::PointerTranslator;
use crate::presenters::pixels::presenter::PixelsPresenter;
use egui::Context;
use egui_winit::State as EguiWinitState;
use tracing::{debug, error, info, trace};
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

struct App {
    window: &'static Window,
    controller: GestureController<PixelsPresenter>,
    translator: PointerTranslator,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl App {
    fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        config: &ExplorerConfig,
    ) -> Result<Self, GuiError> {
        let inner = window.inner_size();
        let size = CanvasSize::new(inner.width, inner.height);

        if size.is_empty() {
            error!(
                width = size.width,
                height = size.height,
                "window has no drawable area"
            );
            return Err(SetupError::EmptyCanvas { size }.into());
        }

        let presenter = PixelsPresenter::new(window)?;
        let controller = GestureController::new(config, presenter)?;

        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Ok(Self {
            window,
            controller,
            translator: PointerTranslator::default(),
            egui_ctx,
            egui_state,
        })
    }

    /// Forwards an event to egui; returns true if egui consumed it.
    fn forward_to_egui(&mut self, event: &WindowEvent) -> bool {
        let response = self.egui_state.on_window_event(self.window, event);

        if response.repaint {
            self.window.request_redraw();
        }

        response.consumed
    }

    fn handle_pointer_event(&mut self, event: &WindowEvent) {
        if let Some(input) = self.translator.translate(event) {
            let response = self.controller.handle_event(input);
            trace!(rendered = response.rendered, "pointer event handled");
        }
    }

    fn resize(&mut self, size: CanvasSize) {
        if !size.is_empty() {
            if let Err(err) = self.controller.surface_mut().resize(size) {
                error!(%err, "failed to resize pixel surface");
                return;
            }
        }

        self.controller.resize(size);
    }

    fn update_ui(&mut self) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(self.window);
        let controller = &self.controller;
        let mut reset_requested = false;

        let output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Viewport")
                .default_open(false)
                .show(ctx, |ui| {
                    let viewport = controller.viewport();
                    let center = viewport.center();
                    let pipeline = controller.pipeline();

                    ui.label(format!("Formula: {}", pipeline.evaluator().display_name()));
                    ui.label(format!("Colours: {}", pipeline.colour_map().display_name()));
                    ui.label(format!("Scale: {:.3e}", viewport.scale()));
                    ui.label(format!("Center: {:.10}, {:.10}", center.real, center.imag));

                    if let Some(duration) = controller.last_render_duration() {
                        ui.label(format!(
                            "Frame {}: {:.1} ms",
                            controller.frames_rendered(),
                            duration.as_secs_f64() * 1000.0
                        ));
                    }

                    if ui.button("Reset view").clicked() {
                        reset_requested = true;
                    }
                });
        });

        if reset_requested {
            self.controller.reset_view();
        }

        output
    }

    fn redraw(&mut self) -> Result<(), pixels::Error> {
        let mut egui_output = self.update_ui();
        let platform_output = std::mem::take(&mut egui_output.platform_output);

        self.egui_state
            .handle_platform_output(self.window, platform_output);

        if egui_output
            .viewport_output
            .values()
            .any(|v| v.repaint_delay.is_zero())
        {
            self.window.request_redraw();
        }

        self.controller
            .surface_mut()
            .render(egui_output, &self.egui_ctx)
    }
}

/// Opens a window and runs the interactive explorer until it is closed.
pub fn run_gui(config: ExplorerConfig) -> Result<(), GuiError> {
    let event_loop = EventLoop::new()?;

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Fractal Canvas")
            .with_inner_size(LogicalSize::new(800.0, 600.0))
            .with_min_inner_size(LogicalSize::new(200.0, 200.0))
            .build(&event_loop)?,
    ));

    let mut app = App::new(window, &event_loop, &config)?;
    info!(
        evaluator = %config.evaluator_kind,
        colour_map = %config.colour_map_kind,
        "interactive explorer started"
    );

    event_loop.run(move |event, elwt| {
        let Event::WindowEvent { event, window_id } = event else {
            return;
        };

        if window_id != window.id() {
            return;
        }

        let egui_consumed = app.forward_to_egui(&event);

        match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::RedrawRequested => {
                if let Err(err) = app.redraw() {
                    error!(%err, "render failed");
                    elwt.exit();
                }
            }
            WindowEvent::Resized(size) => {
                app.resize(CanvasSize::new(size.width, size.height));
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                debug!(scale_factor, "scale factor changed");
                app.egui_ctx.set_pixels_per_point(scale_factor as f32);
                let inner = window.inner_size();
                app.resize(CanvasSize::new(inner.width, inner.height));
            }
            other if !egui_consumed => app.handle_pointer_event(&other),
            _ => {}
        }
    })?;

    Ok(())
}
