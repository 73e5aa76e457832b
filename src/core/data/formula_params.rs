/// The five coefficients of the quadratic-family recurrence.
///
/// Values are raw: each evaluator decides how to normalise them before
/// iterating.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FormulaParams {
    /// Weight of the `z²` term.
    pub square_gain: f64,
    /// Weight of the seed point added every step.
    pub seed_gain: f64,
    /// Weight of the `2xy` cross term.
    pub cross_gain: f64,
    /// Amplitude of the sinusoidal perturbation.
    pub wave_amplitude: f64,
    /// Frequency of the sinusoidal perturbation.
    pub wave_frequency: f64,
}

impl FormulaParams {
    #[must_use]
    pub const fn new(
        square_gain: f64,
        seed_gain: f64,
        cross_gain: f64,
        wave_amplitude: f64,
        wave_frequency: f64,
    ) -> Self {
        Self {
            square_gain,
            seed_gain,
            cross_gain,
            wave_amplitude,
            wave_frequency,
        }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.as_array().iter().all(|value| value.is_finite())
    }

    #[must_use]
    pub fn as_array(&self) -> [f64; 5] {
        [
            self.square_gain,
            self.seed_gain,
            self.cross_gain,
            self.wave_amplitude,
            self.wave_frequency,
        ]
    }
}

impl From<[f64; 5]> for FormulaParams {
    fn from(values: [f64; 5]) -> Self {
        let [square_gain, seed_gain, cross_gain, wave_amplitude, wave_frequency] = values;

        Self::new(
            square_gain,
            seed_gain,
            cross_gain,
            wave_amplitude,
            wave_frequency,
        )
    }
}
