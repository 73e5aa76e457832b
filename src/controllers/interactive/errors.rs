use crate::core::config::errors::ConfigError;
use crate::core::data::canvas_size::CanvasSize;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SetupError {
    EmptyCanvas { size: CanvasSize },
    Config(ConfigError),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCanvas { size } => write!(
                f,
                "canvas is {}x{}; an interactive renderer needs a non-empty canvas",
                size.width, size.height
            ),
            Self::Config(err) => write!(f, "invalid configuration: {}", err),
        }
    }
}

impl Error for SetupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::EmptyCanvas { .. } => None,
        }
    }
}

impl From<ConfigError> for SetupError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}
