use crate::core::actions::rasterize::ports::colour_map::ColourMap;
use crate::core::actions::rasterize::ports::escape_evaluator::EscapeEvaluator;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::formula_params::FormulaParams;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, write_opaque};
use crate::core::data::point::ScreenPoint;
use crate::core::data::viewport::Viewport;

/// Per-session inputs shared by every pixel of a render.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderSettings {
    pub max_iterations: u32,
    pub colour_offset: f64,
    pub formula_params: FormulaParams,
}

/// Renders one full frame on the calling thread.
///
/// Every pixel of `size` is written exactly once, row-major, with alpha 255.
/// A zero-area canvas yields an empty buffer.
pub fn rasterize<E, C>(
    viewport: &Viewport,
    size: CanvasSize,
    evaluator: &E,
    colour_map: &C,
    settings: &RenderSettings,
) -> PixelBuffer
where
    E: EscapeEvaluator + ?Sized,
    C: ColourMap + ?Sized,
{
    let mut buffer = PixelBuffer::new(size);

    if size.is_empty() {
        return buffer;
    }

    let row_bytes = size.width as usize * BYTES_PER_PIXEL;

    for (y, row) in buffer.data_mut().chunks_exact_mut(row_bytes).enumerate() {
        rasterize_row(
            row,
            y as u32,
            viewport,
            size,
            evaluator,
            colour_map,
            settings,
        );
    }

    buffer
}

pub(crate) fn rasterize_row<E, C>(
    row: &mut [u8],
    y: u32,
    viewport: &Viewport,
    size: CanvasSize,
    evaluator: &E,
    colour_map: &C,
    settings: &RenderSettings,
) where
    E: EscapeEvaluator + ?Sized,
    C: ColourMap + ?Sized,
{
    for (x, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
        let position = ScreenPoint::new(x as f64, f64::from(y));
        let point = viewport.pixel_to_plane(position, size);
        let iterations = evaluator.evaluate(
            point,
            settings.max_iterations,
            &settings.formula_params,
        );
        let colour = colour_map.colourise(
            iterations,
            settings.max_iterations,
            point,
            settings.colour_offset,
        );

        write_opaque(pixel, colour);
    }
}
