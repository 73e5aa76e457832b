use crate::core::data::complex::Complex;
use crate::core::data::formula_params::FormulaParams;

/// Counts how many steps a recurrence seeded at `point` survives.
///
/// Implementations must return a value in `0..=max_iterations`, where
/// `max_iterations` means the point never escaped. They hold no mutable state
/// and may be called concurrently for independent pixels.
pub trait EscapeEvaluator: Send + Sync {
    fn evaluate(&self, point: Complex, max_iterations: u32, params: &FormulaParams) -> u32;

    fn display_name(&self) -> &str;
}

impl EscapeEvaluator for Box<dyn EscapeEvaluator> {
    fn evaluate(&self, point: Complex, max_iterations: u32, params: &FormulaParams) -> u32 {
        (**self).evaluate(point, max_iterations, params)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}
