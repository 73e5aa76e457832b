use crate::core::data::formula_params::FormulaParams;
use crate::core::fractals::quadratic_family::classic::CLASSIC_DEFAULT_PARAMS;
use crate::core::fractals::quadratic_family::tuned::TUNED_DEFAULT_PARAMS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvaluatorKinds {
    #[default]
    Tuned,
    Classic,
}

impl EvaluatorKinds {
    pub const ALL: &'static [Self] = &[Self::Tuned, Self::Classic];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Tuned => "Tuned quadratic",
            Self::Classic => "Classic quadratic",
        }
    }

    /// Raw coefficients that give a recognisable picture for this formula.
    #[must_use]
    pub const fn default_params(self) -> FormulaParams {
        match self {
            Self::Tuned => TUNED_DEFAULT_PARAMS,
            Self::Classic => CLASSIC_DEFAULT_PARAMS,
        }
    }
}

impl std::fmt::Display for EvaluatorKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
