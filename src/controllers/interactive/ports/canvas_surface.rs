use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::pixel_buffer::PixelBuffer;

/// The drawing target the interactive controller renders into.
///
/// Implementations own whatever backs the visible canvas (a window frame,
/// an in-memory image) and take ownership of each finished frame.
pub trait CanvasSurfacePort {
    fn size(&self) -> CanvasSize;

    fn commit(&mut self, buffer: PixelBuffer);
}
