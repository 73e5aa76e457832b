use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;

/// Turns an escape count into a colour.
///
/// `iterations >= max_iterations` marks a point that never escaped; every
/// implementation reserves a fixed colour for it.
pub trait ColourMap: Send + Sync {
    fn colourise(
        &self,
        iterations: u32,
        max_iterations: u32,
        point: Complex,
        offset: f64,
    ) -> Colour;

    fn display_name(&self) -> &str;
}

impl ColourMap for Box<dyn ColourMap> {
    fn colourise(
        &self,
        iterations: u32,
        max_iterations: u32,
        point: Complex,
        offset: f64,
    ) -> Colour {
        (**self).colourise(iterations, max_iterations, point, offset)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}
