use crate::controllers::interactive::errors::SetupError;
use crate::controllers::interactive::events::{EventResponse, InputEvent};
use crate::controllers::interactive::gesture::GestureSession;
use crate::controllers::interactive::ports::canvas_surface::CanvasSurfacePort;
use crate::core::actions::rasterize::pipeline::RenderPipeline;
use crate::core::config::explorer_config::ExplorerConfig;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::point::ScreenPoint;
use crate::core::data::viewport::Viewport;
use std::time::{Duration, Instant};
use tracing::{debug, error, trace};

const WHEEL_ZOOM_OUT: f64 = 1.1;
const WHEEL_ZOOM_IN: f64 = 0.9;

/// Turns pointer gestures into viewport changes and re-renders synchronously.
///
/// Every event that moves the viewport rasterizes a full frame and commits it
/// to the surface before `handle_event` returns.
pub struct GestureController<S: CanvasSurfacePort> {
    surface: S,
    pipeline: RenderPipeline,
    viewport: Viewport,
    initial_viewport: Viewport,
    session: GestureSession,
    canvas_origin: ScreenPoint,
    size: CanvasSize,
    frames_rendered: u64,
    last_render_duration: Option<Duration>,
}

impl<S: CanvasSurfacePort> GestureController<S> {
    /// Validates `config`, measures the surface and draws the first frame.
    pub fn new(config: &ExplorerConfig, surface: S) -> Result<Self, SetupError> {
        let size = surface.size();

        if size.is_empty() {
            error!(
                width = size.width,
                height = size.height,
                "canvas has no area, renderer not started"
            );
            return Err(SetupError::EmptyCanvas { size });
        }

        let viewport = config.initial_viewport().inspect_err(|err| {
            error!(%err, "rejected explorer configuration");
        })?;

        let mut controller = Self {
            surface,
            pipeline: RenderPipeline::from_config(config),
            viewport,
            initial_viewport: viewport,
            session: GestureSession::Idle,
            canvas_origin: ScreenPoint::default(),
            size,
            frames_rendered: 0,
            last_render_duration: None,
        };

        controller.render();

        Ok(controller)
    }

    pub fn handle_event(&mut self, event: InputEvent) -> EventResponse {
        match event {
            InputEvent::Wheel { position, delta_y } => {
                let factor = if delta_y > 0.0 {
                    WHEEL_ZOOM_OUT
                } else {
                    WHEEL_ZOOM_IN
                };

                EventResponse::captured(self.zoom(factor, position))
            }
            InputEvent::MouseDown { position } => {
                self.begin_drag(position);
                EventResponse::passive(false)
            }
            InputEvent::MouseMove { position } => EventResponse::passive(self.drag_to(position)),
            InputEvent::MouseUp => {
                self.set_session(GestureSession::Idle);
                EventResponse::passive(false)
            }
            InputEvent::TouchStart { touches } => {
                self.touch_start(&touches);
                EventResponse::passive(false)
            }
            InputEvent::TouchMove { touches } => EventResponse::captured(self.touch_move(&touches)),
            InputEvent::TouchEnd { touches } => {
                self.touch_end(&touches);
                EventResponse::passive(false)
            }
        }
    }

    /// Zooms by `factor` around a device-space `focus`, rendering on success.
    ///
    /// Returns whether a frame was rendered. Factors that would leave the
    /// viewport degenerate are dropped.
    pub fn zoom(&mut self, factor: f64, focus: ScreenPoint) -> bool {
        let local = focus - self.canvas_origin;

        match self.viewport.zoom_at(factor, local, self.size) {
            Ok(()) => self.render(),
            Err(err) => {
                debug!(%err, factor, "zoom ignored");
                false
            }
        }
    }

    /// Adopts a new canvas size and redraws at it.
    ///
    /// A zero-area size parks the controller until a usable size arrives.
    pub fn resize(&mut self, size: CanvasSize) -> bool {
        if self.size == size {
            return false;
        }

        debug!(width = size.width, height = size.height, "canvas resized");

        self.size = size;
        self.set_session(GestureSession::Idle);
        self.render()
    }

    /// Where the canvas's top-left corner sits in device coordinates.
    pub fn set_canvas_origin(&mut self, origin: ScreenPoint) {
        self.canvas_origin = origin;
    }

    pub fn reset_view(&mut self) -> bool {
        self.viewport = self.initial_viewport;
        self.set_session(GestureSession::Idle);
        self.render()
    }

    /// Rasterizes the current viewport and commits it to the surface.
    pub fn render(&mut self) -> bool {
        if self.size.is_empty() {
            trace!("skipping render of an empty canvas");
            return false;
        }

        let start = Instant::now();
        let buffer = self.pipeline.render(&self.viewport, self.size);
        let elapsed = start.elapsed();

        self.surface.commit(buffer);
        self.frames_rendered += 1;
        self.last_render_duration = Some(elapsed);

        debug!(
            frame = self.frames_rendered,
            width = self.size.width,
            height = self.size.height,
            scale = self.viewport.scale(),
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            "frame rendered"
        );

        true
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn session(&self) -> &GestureSession {
        &self.session
    }

    #[must_use]
    pub fn pipeline(&self) -> &RenderPipeline {
        &self.pipeline
    }

    #[must_use]
    pub fn canvas_size(&self) -> CanvasSize {
        self.size
    }

    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    #[must_use]
    pub fn last_render_duration(&self) -> Option<Duration> {
        self.last_render_duration
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn begin_drag(&mut self, position: ScreenPoint) {
        self.set_session(GestureSession::Dragging {
            start: position,
            start_center: self.viewport.center(),
        });
    }

    fn drag_to(&mut self, position: ScreenPoint) -> bool {
        let GestureSession::Dragging {
            start,
            start_center,
        } = self.session
        else {
            return false;
        };

        match self
            .viewport
            .pan_from(start_center, position - start, self.size)
        {
            Ok(()) => self.render(),
            Err(err) => {
                debug!(%err, "pan ignored");
                false
            }
        }
    }

    fn touch_start(&mut self, touches: &[ScreenPoint]) {
        match touches {
            [single] => self.begin_drag(*single),
            [first, second] => self.set_session(GestureSession::pinching(&[*first, *second])),
            _ => self.set_session(GestureSession::Idle),
        }
    }

    fn touch_move(&mut self, touches: &[ScreenPoint]) -> bool {
        match touches {
            [single] => self.drag_to(*single),
            [first, second] => self.pinch_to(*first, *second),
            _ => {
                self.set_session(GestureSession::Idle);
                false
            }
        }
    }

    fn touch_end(&mut self, remaining: &[ScreenPoint]) {
        match remaining {
            [single] => self.begin_drag(*single),
            [first, second] => self.set_session(GestureSession::pinching(&[*first, *second])),
            _ => self.set_session(GestureSession::Idle),
        }
    }

    fn pinch_to(&mut self, first: ScreenPoint, second: ScreenPoint) -> bool {
        let current_distance = first.distance_to(second);
        let previous = self.session;

        self.set_session(GestureSession::Pinching {
            last_distance: current_distance,
        });

        let GestureSession::Pinching { last_distance } = previous else {
            return false;
        };

        if last_distance <= 0.0 || current_distance <= 0.0 {
            return false;
        }

        self.zoom(last_distance / current_distance, first.midpoint(second))
    }

    fn set_session(&mut self, session: GestureSession) {
        if self.session != session {
            trace!(from = ?self.session, to = ?session, "gesture transition");
        }

        self.session = session;
    }
}
