use crate::core::actions::rasterize::ports::escape_evaluator::EscapeEvaluator;
use crate::core::data::complex::Complex;
use crate::core::data::formula_params::FormulaParams;
use crate::core::fractals::quadratic_family::algorithm::{Coefficients, escape_count};

pub const CLASSIC_ESCAPE_THRESHOLD: f64 = 4.0;

/// With these coefficients the recurrence is the Mandelbrot map seeded at `c`.
pub const CLASSIC_DEFAULT_PARAMS: FormulaParams = FormulaParams::new(1.0, 1.0, 1.0, 0.0, 0.0);

/// The quadratic family with coefficients used exactly as supplied.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ClassicQuadratic {}

impl ClassicQuadratic {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    #[must_use]
    pub fn coefficients(params: &FormulaParams) -> Coefficients {
        Coefficients {
            a: params.square_gain,
            b: params.seed_gain,
            c: params.cross_gain,
            d: params.wave_amplitude,
            e: params.wave_frequency,
        }
    }
}

impl EscapeEvaluator for ClassicQuadratic {
    fn evaluate(&self, point: Complex, max_iterations: u32, params: &FormulaParams) -> u32 {
        escape_count(
            point,
            max_iterations,
            CLASSIC_ESCAPE_THRESHOLD,
            Self::coefficients(params),
        )
    }

    fn display_name(&self) -> &str {
        "Classic quadratic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_cardioid_is_bounded() {
        let evaluator = ClassicQuadratic::new();

        for point in [
            Complex::new(0.0, 0.0),
            Complex::new(-1.0, 0.0),
            Complex::new(0.25, 0.0),
        ] {
            assert_eq!(evaluator.evaluate(point, 100, &CLASSIC_DEFAULT_PARAMS), 100);
        }
    }

    #[test]
    fn test_outside_point_escapes() {
        let evaluator = ClassicQuadratic::new();

        assert_eq!(
            evaluator.evaluate(Complex::new(1.0, 0.0), 100, &CLASSIC_DEFAULT_PARAMS),
            2
        );
    }

    #[test]
    fn test_wave_terms_are_honoured() {
        let evaluator = ClassicQuadratic::new();
        let params = FormulaParams::new(1.0, 1.0, 1.0, 3.0, 1.0);

        assert_eq!(evaluator.evaluate(Complex::new(0.0, 0.0), 100, &params), 1);
    }

    #[test]
    fn test_zero_budget_returns_zero() {
        let evaluator = ClassicQuadratic::new();

        assert_eq!(
            evaluator.evaluate(Complex::new(0.0, 0.0), 0, &CLASSIC_DEFAULT_PARAMS),
            0
        );
    }
}
