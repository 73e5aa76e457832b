use crate::core::data::complex::Complex;
use crate::core::data::point::ScreenPoint;

/// The pointer gesture currently in progress.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum GestureSession {
    #[default]
    Idle,
    /// Panning. Every move is measured from `start`, against the center the
    /// viewport had when the drag began.
    Dragging {
        start: ScreenPoint,
        start_center: Complex,
    },
    /// Two-finger zoom; `last_distance` is the separation seen on the
    /// previous move.
    Pinching { last_distance: f64 },
}

impl GestureSession {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub(crate) fn pinching(touches: &[ScreenPoint; 2]) -> Self {
        Self::Pinching {
            last_distance: touches[0].distance_to(touches[1]),
        }
    }
}
