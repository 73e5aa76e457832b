use crate::core::actions::rasterize::ports::escape_evaluator::EscapeEvaluator;
use crate::core::data::complex::Complex;
use crate::core::data::formula_params::FormulaParams;
use crate::core::fractals::quadratic_family::algorithm::{Coefficients, escape_count};

pub const TUNED_ESCAPE_THRESHOLD: f64 = 6.0;

pub const TUNED_DEFAULT_PARAMS: FormulaParams =
    FormulaParams::new(2003.0, 8.0, 999.0, 2024.0, 2019.0);

/// The quadratic family with large, human-friendly raw coefficients scaled
/// down before iterating.
///
/// The wave terms are switched off: amplitude and frequency are multiplied
/// by zero whatever values are supplied.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TunedQuadratic {}

impl TunedQuadratic {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    #[must_use]
    pub fn coefficients(params: &FormulaParams) -> Coefficients {
        Coefficients {
            a: params.square_gain / 1000.0,
            b: params.seed_gain % 5.0,
            c: params.cross_gain / 500.0,
            d: params.wave_amplitude * 0.0,
            e: params.wave_frequency * 0.0,
        }
    }
}

impl EscapeEvaluator for TunedQuadratic {
    fn evaluate(&self, point: Complex, max_iterations: u32, params: &FormulaParams) -> u32 {
        escape_count(
            point,
            max_iterations,
            TUNED_ESCAPE_THRESHOLD,
            Self::coefficients(params),
        )
    }

    fn display_name(&self) -> &str {
        "Tuned quadratic"
    }
}
