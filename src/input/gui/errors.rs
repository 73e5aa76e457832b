use crate::controllers::interactive::errors::SetupError;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum GuiError {
    EventLoop(winit::error::EventLoopError),
    Window(winit::error::OsError),
    Surface(pixels::Error),
    Setup(SetupError),
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoop(err) => write!(f, "event loop failed: {}", err),
            Self::Window(err) => write!(f, "could not open window: {}", err),
            Self::Surface(err) => write!(f, "could not create pixel surface: {}", err),
            Self::Setup(err) => write!(f, "{}", err),
        }
    }
}

impl Error for GuiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EventLoop(err) => Some(err),
            Self::Window(err) => Some(err),
            Self::Surface(err) => Some(err),
            Self::Setup(err) => Some(err),
        }
    }
}

impl From<winit::error::EventLoopError> for GuiError {
    fn from(err: winit::error::EventLoopError) -> Self {
        Self::EventLoop(err)
    }
}

impl From<winit::error::OsError> for GuiError {
    fn from(err: winit::error::OsError) -> Self {
        Self::Window(err)
    }
}

impl From<pixels::Error> for GuiError {
    fn from(err: pixels::Error) -> Self {
        Self::Surface(err)
    }
}

impl From<SetupError> for GuiError {
    fn from(err: SetupError) -> Self {
        Self::Setup(err)
    }
}
