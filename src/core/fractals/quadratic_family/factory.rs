use crate::core::actions::rasterize::ports::escape_evaluator::EscapeEvaluator;
use crate::core::fractals::quadratic_family::classic::ClassicQuadratic;
use crate::core::fractals::quadratic_family::kinds::EvaluatorKinds;
use crate::core::fractals::quadratic_family::tuned::TunedQuadratic;

#[must_use]
pub fn escape_evaluator_factory(kind: EvaluatorKinds) -> Box<dyn EscapeEvaluator> {
    match kind {
        EvaluatorKinds::Tuned => Box::new(TunedQuadratic::new()),
        EvaluatorKinds::Classic => Box::new(ClassicQuadratic::new()),
    }
}
