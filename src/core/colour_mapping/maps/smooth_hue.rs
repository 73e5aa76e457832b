use crate::core::actions::rasterize::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::util::hsl_to_rgb::hsl_to_rgb;

const DEGREES_PER_ITERATION: f64 = 15.0;

/// Cycles through the hue wheel, smoothing the iteration count by the
/// magnitude of the seed point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SmoothHue {}

impl SmoothHue {
    pub const INTERIOR: Colour = Colour::BLACK;

    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    /// `iterations - log2(log2(|point|²))`, or the raw count where the double
    /// logarithm is undefined (`|point|² <= 1`).
    #[must_use]
    pub fn smoothed_iterations(iterations: u32, point: Complex) -> f64 {
        let raw = f64::from(iterations);
        let magnitude_squared = point.magnitude_squared();

        if magnitude_squared <= 1.0 {
            return raw;
        }

        let smooth = raw - magnitude_squared.log2().log2();

        if smooth.is_finite() { smooth } else { raw }
    }
}

impl ColourMap for SmoothHue {
    fn colourise(
        &self,
        iterations: u32,
        max_iterations: u32,
        point: Complex,
        offset: f64,
    ) -> Colour {
        if iterations >= max_iterations {
            return Self::INTERIOR;
        }

        let smooth = Self::smoothed_iterations(iterations, point);
        let hue = (smooth * DEGREES_PER_ITERATION + offset).rem_euclid(360.0);

        hsl_to_rgb(hue / 360.0, 1.0, 0.5)
    }

    fn display_name(&self) -> &str {
        "Smooth hue"
    }
}
