use crate::controllers::render_file::RenderMode;
use crate::core::colour_mapping::kinds::ColourMapKinds;
use crate::core::config::explorer_config::ExplorerConfig;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::complex::Complex;
use crate::core::data::formula_params::FormulaParams;
use crate::core::fractals::quadratic_family::kinds::EvaluatorKinds;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(ValueEnum, Debug, Copy, Clone, PartialEq, Eq)]
pub enum FormulaArg {
    Tuned,
    Classic,
}

impl From<FormulaArg> for EvaluatorKinds {
    fn from(arg: FormulaArg) -> Self {
        match arg {
            FormulaArg::Tuned => Self::Tuned,
            FormulaArg::Classic => Self::Classic,
        }
    }
}

#[derive(ValueEnum, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ColoursArg {
    TwoTone,
    SmoothHue,
}

impl From<ColoursArg> for ColourMapKinds {
    fn from(arg: ColoursArg) -> Self {
        match arg {
            ColoursArg::TwoTone => Self::TwoToneGradient,
            ColoursArg::SmoothHue => Self::SmoothHue,
        }
    }
}

/// Renders one frame of the fractal canvas to a PPM image.
///
/// Unset options fall back to the default (or `--showcase`) configuration.
#[derive(Parser, Debug)]
#[command(name = "fractal_canvas", version)]
pub struct RenderArgs {
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    #[arg(long, default_value_t = 600)]
    pub height: u32,

    #[arg(short, long, default_value = "output/fractal.ppm")]
    pub output: PathBuf,

    /// Start from the close-up background framing.
    #[arg(long)]
    pub showcase: bool,

    #[arg(long)]
    pub max_iterations: Option<u32>,

    /// Plane extent covered by the canvas along each axis.
    #[arg(long)]
    pub scale: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    pub center_x: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    pub center_y: Option<f64>,

    /// Hue rotation in degrees, used by the smooth hue colours.
    #[arg(long, allow_hyphen_values = true)]
    pub offset: Option<f64>,

    #[arg(long, value_enum)]
    pub formula: Option<FormulaArg>,

    #[arg(long, value_enum)]
    pub colours: Option<ColoursArg>,

    /// Five comma separated formula coefficients, e.g. `2003,8,999,2024,2019`.
    #[arg(long, value_parser = parse_formula_params, allow_hyphen_values = true)]
    pub params: Option<FormulaParams>,

    /// Split rows across all cores.
    #[arg(long)]
    pub parallel: bool,
}

impl RenderArgs {
    #[must_use]
    pub fn canvas_size(&self) -> CanvasSize {
        CanvasSize::new(self.width, self.height)
    }

    #[must_use]
    pub fn render_mode(&self) -> RenderMode {
        if self.parallel {
            RenderMode::Parallel
        } else {
            RenderMode::Sequential
        }
    }

    /// Layers the given flags over the selected preset.
    ///
    /// Choosing a formula without `--params` also switches to that formula's
    /// default coefficients.
    #[must_use]
    pub fn to_config(&self) -> ExplorerConfig {
        let mut config = if self.showcase {
            ExplorerConfig::showcase()
        } else {
            ExplorerConfig::default()
        };

        if let Some(formula) = self.formula {
            config.evaluator_kind = formula.into();
            config.formula_params = config.evaluator_kind.default_params();
        }

        if let Some(colours) = self.colours {
            config.colour_map_kind = colours.into();
        }

        if let Some(params) = self.params {
            config.formula_params = params;
        }

        if let Some(max_iterations) = self.max_iterations {
            config.max_iterations = max_iterations;
        }

        if let Some(scale) = self.scale {
            config.initial_scale = scale;
        }

        if let Some(offset) = self.offset {
            config.colour_offset = offset;
        }

        config.center = Complex::new(
            self.center_x.unwrap_or(config.center.real),
            self.center_y.unwrap_or(config.center.imag),
        );

        config
    }
}

fn parse_formula_params(value: &str) -> Result<FormulaParams, String> {
    let parsed = value
        .split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<f64>()
                .map_err(|err| format!("`{}`: {}", part, err))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let coefficients: [f64; 5] = parsed
        .try_into()
        .map_err(|values: Vec<f64>| {
            format!("expected 5 coefficients, got {}", values.len())
        })?;

    Ok(FormulaParams::from(coefficients))
}
