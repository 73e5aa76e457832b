use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    ZeroMaxIterations,
    InvalidInitialScale { scale: f64 },
    InvalidCenter { real: f64, imag: f64 },
    InvalidColourOffset { offset: f64 },
    NonFiniteFormulaParams,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::InvalidInitialScale { scale } => {
                write!(
                    f,
                    "initial scale must be finite and positive, got {}",
                    scale
                )
            }
            Self::InvalidCenter { real, imag } => {
                write!(f, "center must be finite, got ({}, {})", real, imag)
            }
            Self::InvalidColourOffset { offset } => {
                write!(f, "colour offset must be finite, got {}", offset)
            }
            Self::NonFiniteFormulaParams => {
                write!(f, "formula params must all be finite")
            }
        }
    }
}

impl Error for ConfigError {}
