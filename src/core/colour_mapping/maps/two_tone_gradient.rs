use crate::core::actions::rasterize::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;

/// Linear blend between two colours by escape fraction, with a flat colour
/// for points that never escape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwoToneGradient {
    start: Colour,
    end: Colour,
    interior: Colour,
}

impl Default for TwoToneGradient {
    fn default() -> Self {
        Self::new(Self::ROSE_START, Self::ROSE_END, Self::ROSE_INTERIOR)
    }
}

impl TwoToneGradient {
    pub const ROSE_START: Colour = Colour::new(204, 100, 220);
    pub const ROSE_END: Colour = Colour::new(255, 150, 180);
    pub const ROSE_INTERIOR: Colour = Colour::new(240, 220, 230);

    #[must_use]
    pub const fn new(start: Colour, end: Colour, interior: Colour) -> Self {
        Self {
            start,
            end,
            interior,
        }
    }

    #[must_use]
    pub fn interior(&self) -> Colour {
        self.interior
    }
}

fn lerp_channel(start: u8, end: u8, t: f64) -> u8 {
    let start = f64::from(start);
    let end = f64::from(end);

    (start + (end - start) * t).floor().clamp(0.0, 255.0) as u8
}

impl ColourMap for TwoToneGradient {
    fn colourise(&self, iterations: u32, max_iterations: u32, _: Complex, _: f64) -> Colour {
        if iterations >= max_iterations {
            return self.interior;
        }

        let t = f64::from(iterations) / f64::from(max_iterations);

        Colour {
            r: lerp_channel(self.start.r, self.end.r, t),
            g: lerp_channel(self.start.g, self.end.g, t),
            b: lerp_channel(self.start.b, self.end.b, t),
        }
    }

    fn display_name(&self) -> &str {
        "Two-tone gradient"
    }
}
