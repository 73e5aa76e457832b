use crate::core::data::point::ScreenPoint;

/// Raw pointer input in the shared device coordinate space.
///
/// Touch events carry every touch still active after the event, so a
/// `TouchEnd` lists the touches that remain down.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Positive `delta_y` scrolls down, which zooms out.
    Wheel { position: ScreenPoint, delta_y: f64 },
    MouseDown { position: ScreenPoint },
    MouseMove { position: ScreenPoint },
    MouseUp,
    TouchStart { touches: Vec<ScreenPoint> },
    TouchMove { touches: Vec<ScreenPoint> },
    TouchEnd { touches: Vec<ScreenPoint> },
}

/// What the controller did with an event.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct EventResponse {
    /// The host should suppress its default handling (page scroll, browser zoom).
    pub prevent_default: bool,
    /// A new frame was committed to the surface.
    pub rendered: bool,
}

impl EventResponse {
    pub(crate) const fn passive(rendered: bool) -> Self {
        Self {
            prevent_default: false,
            rendered,
        }
    }

    pub(crate) const fn captured(rendered: bool) -> Self {
        Self {
            prevent_default: true,
            rendered,
        }
    }
}
