use rayon::prelude::*;

use crate::core::actions::rasterize::ports::colour_map::ColourMap;
use crate::core::actions::rasterize::ports::escape_evaluator::EscapeEvaluator;
use crate::core::actions::rasterize::rasterize::{RenderSettings, rasterize_row};
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::core::data::viewport::Viewport;

/// Row-parallel variant of [`rasterize`](super::rasterize::rasterize) using
/// rayon's work-stealing scheduler.
///
/// The viewport and settings are copied before fan-out so workers only ever
/// read immutable inputs. Output is byte-identical to the sequential path.
pub fn rasterize_rayon<E, C>(
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

    let viewport = *viewport;
    let settings = *settings;
    let row_bytes = size.width as usize * BYTES_PER_PIXEL;

    buffer
        .data_mut()
        .par_chunks_exact_mut(row_bytes)
        .enumerate()
        .for_each(|(y, row)| {
            rasterize_row(
                row,
                y as u32,
                &viewport,
                size,
                evaluator,
                colour_map,
                &settings,
            );
        });

    buffer
}
