use crate::core::actions::rasterize::rasterize::RenderSettings;
use crate::core::colour_mapping::kinds::ColourMapKinds;
use crate::core::config::errors::ConfigError;
use crate::core::data::complex::Complex;
use crate::core::data::formula_params::FormulaParams;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::quadratic_family::kinds::EvaluatorKinds;

const DEFAULT_MAX_ITERATIONS: u32 = 100;
const DEFAULT_INITIAL_SCALE: f64 = 3.0;
const DEFAULT_CENTER: Complex = Complex::new(-0.05, 0.005);

/// Everything needed to bring up a renderer.
///
/// Construct it with struct-update syntax from [`ExplorerConfig::default`] or
/// [`ExplorerConfig::showcase`]; consumers call [`ExplorerConfig::validate`]
/// before using it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerConfig {
    pub max_iterations: u32,
    pub colour_offset: f64,
    pub initial_scale: f64,
    pub center: Complex,
    pub formula_params: FormulaParams,
    pub evaluator_kind: EvaluatorKinds,
    pub colour_map_kind: ColourMapKinds,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        let evaluator_kind = EvaluatorKinds::default();

        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            colour_offset: 0.0,
            initial_scale: DEFAULT_INITIAL_SCALE,
            center: DEFAULT_CENTER,
            formula_params: evaluator_kind.default_params(),
            evaluator_kind,
            colour_map_kind: ColourMapKinds::default(),
        }
    }
}

impl ExplorerConfig {
    /// A close-up framing with fewer iterations, tuned for a full-window
    /// background canvas.
    #[must_use]
    pub fn showcase() -> Self {
        Self {
            max_iterations: 70,
            colour_offset: 180.0,
            initial_scale: 0.4,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroMaxIterations);
        }

        if !(self.initial_scale.is_finite() && self.initial_scale > 0.0) {
            return Err(ConfigError::InvalidInitialScale {
                scale: self.initial_scale,
            });
        }

        if !self.center.is_finite() {
            return Err(ConfigError::InvalidCenter {
                real: self.center.real,
                imag: self.center.imag,
            });
        }

        if !self.colour_offset.is_finite() {
            return Err(ConfigError::InvalidColourOffset {
                offset: self.colour_offset,
            });
        }

        if !self.formula_params.is_finite() {
            return Err(ConfigError::NonFiniteFormulaParams);
        }

        Ok(())
    }

    pub fn initial_viewport(&self) -> Result<Viewport, ConfigError> {
        self.validate()?;

        let scale = self.initial_scale;
        Viewport::new(scale, self.center)
            .map_err(|err| viewport_error_to_config_error(err, scale))
    }

    #[must_use]
    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            max_iterations: self.max_iterations,
            colour_offset: self.colour_offset,
            formula_params: self.formula_params,
        }
    }
}

fn viewport_error_to_config_error(err: ViewportError, initial_scale: f64) -> ConfigError {
    match err {
        ViewportError::InvalidCenter { center } => ConfigError::InvalidCenter {
            real: center.real,
            imag: center.imag,
        },
        ViewportError::InvalidScale { scale } => ConfigError::InvalidInitialScale { scale },
        ViewportError::InvalidZoomFactor { .. } | ViewportError::EmptyCanvas { .. } => {
            ConfigError::InvalidInitialScale {
                scale: initial_scale,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = ExplorerConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.max_iterations, 100);
        assert_eq!(config.initial_scale, 3.0);
        assert_eq!(config.center, Complex::new(-0.05, 0.005));
        assert_eq!(
            config.formula_params,
            EvaluatorKinds::Tuned.default_params()
        );
    }

    #[test]
    fn test_showcase_overrides_framing_only() {
        let config = ExplorerConfig::showcase();

        assert!(config.validate().is_ok());
        assert_eq!(config.max_iterations, 70);
        assert_eq!(config.colour_offset, 180.0);
        assert_eq!(config.initial_scale, 0.4);
        assert_eq!(config.center, ExplorerConfig::default().center);
    }

    #[test]
    fn test_zero_max_iterations_is_rejected() {
        let config = ExplorerConfig {
            max_iterations: 0,
            ..ExplorerConfig::default()
        };

        assert_eq!(config.validate(), Err(ConfigError::ZeroMaxIterations));
    }

    #[test]
    fn test_degenerate_scale_is_rejected() {
        for scale in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let config = ExplorerConfig {
                initial_scale: scale,
                ..ExplorerConfig::default()
            };

            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidInitialScale { .. })
            ));
        }
    }

    #[test]
    fn test_non_finite_values_are_rejected() {
        let bad_center = ExplorerConfig {
            center: Complex::new(f64::NAN, 0.0),
            ..ExplorerConfig::default()
        };
        let bad_offset = ExplorerConfig {
            colour_offset: f64::INFINITY,
            ..ExplorerConfig::default()
        };
        let bad_params = ExplorerConfig {
            formula_params: FormulaParams::new(1.0, 1.0, f64::NAN, 0.0, 0.0),
            ..ExplorerConfig::default()
        };

        assert!(matches!(
            bad_center.validate(),
            Err(ConfigError::InvalidCenter { .. })
        ));
        assert!(matches!(
            bad_offset.validate(),
            Err(ConfigError::InvalidColourOffset { .. })
        ));
        assert_eq!(
            bad_params.validate(),
            Err(ConfigError::NonFiniteFormulaParams)
        );
    }

    #[test]
    fn test_initial_viewport_uses_scale_and_center() {
        let config = ExplorerConfig::showcase();
        let viewport = config.initial_viewport().unwrap();

        assert_eq!(viewport.scale(), 0.4);
        assert_eq!(viewport.center(), config.center);
    }

    #[test]
    fn test_render_settings_carry_session_values() {
        let config = ExplorerConfig::showcase();
        let settings = config.render_settings();

        assert_eq!(settings.max_iterations, 70);
        assert_eq!(settings.colour_offset, 180.0);
        assert_eq!(settings.formula_params, config.formula_params);
    }

    #[test]
    fn test_viewport_errors_keep_their_meaning() {
        let center = Complex::new(f64::NAN, 1.0);

        assert!(matches!(
            viewport_error_to_config_error(ViewportError::InvalidCenter { center }, 3.0),
            ConfigError::InvalidCenter { real, imag } if real.is_nan() && imag == 1.0
        ));
        assert_eq!(
            viewport_error_to_config_error(ViewportError::InvalidScale { scale: -1.0 }, 3.0),
            ConfigError::InvalidInitialScale { scale: -1.0 }
        );
    }
}
