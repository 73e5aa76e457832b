pub mod adapters;
pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;

pub use controllers::interactive::{
    CanvasSurfacePort, EventResponse, GestureController, GestureSession, InputEvent, SetupError,
};
pub use controllers::render_file::{RenderFileController, RenderFileError, RenderMode};
pub use crate::core::actions::rasterize::pipeline::RenderPipeline;
pub use crate::core::actions::rasterize::rasterize::{RenderSettings, rasterize};
pub use crate::core::actions::rasterize::rasterize_rayon::rasterize_rayon;
pub use crate::core::colour_mapping::kinds::ColourMapKinds;
pub use crate::core::config::explorer_config::ExplorerConfig;
pub use crate::core::data::canvas_size::CanvasSize;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::formula_params::FormulaParams;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::point::ScreenPoint;
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::quadratic_family::kinds::EvaluatorKinds;
pub use input::cli::args::RenderArgs;
#[cfg(feature = "gui")]
pub use input::gui::{GuiError, run_gui};
pub use presenters::file::ppm::PpmFilePresenter;
