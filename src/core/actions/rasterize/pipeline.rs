use crate::core::actions::rasterize::ports::colour_map::ColourMap;
use crate::core::actions::rasterize::ports::escape_evaluator::EscapeEvaluator;
use crate::core::actions::rasterize::rasterize::{RenderSettings, rasterize};
use crate::core::actions::rasterize::rasterize_rayon::rasterize_rayon;
use crate::core::colour_mapping::factory::colour_map_factory;
use crate::core::config::explorer_config::ExplorerConfig;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::quadratic_family::factory::escape_evaluator_factory;

/// The evaluator, colour map and settings chosen for one render session.
pub struct RenderPipeline {
    evaluator: Box<dyn EscapeEvaluator>,
    colour_map: Box<dyn ColourMap>,
    settings: RenderSettings,
}

impl RenderPipeline {
    #[must_use]
    pub fn new(
        evaluator: Box<dyn EscapeEvaluator>,
        colour_map: Box<dyn ColourMap>,
        settings: RenderSettings,
    ) -> Self {
        Self {
            evaluator,
            colour_map,
            settings,
        }
    }

    #[must_use]
    pub fn from_config(config: &ExplorerConfig) -> Self {
        Self::new(
            escape_evaluator_factory(config.evaluator_kind),
            colour_map_factory(config.colour_map_kind),
            config.render_settings(),
        )
    }

    #[must_use]
    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    #[must_use]
    pub fn evaluator(&self) -> &dyn EscapeEvaluator {
        self.evaluator.as_ref()
    }

    #[must_use]
    pub fn colour_map(&self) -> &dyn ColourMap {
        self.colour_map.as_ref()
    }

    #[must_use]
    pub fn render(&self, viewport: &Viewport, size: CanvasSize) -> PixelBuffer {
        rasterize(
            viewport,
            size,
            self.evaluator.as_ref(),
            self.colour_map.as_ref(),
            &self.settings,
        )
    }

    #[must_use]
    pub fn render_rayon(&self, viewport: &Viewport, size: CanvasSize) -> PixelBuffer {
        rasterize_rayon(
            viewport,
            size,
            self.evaluator.as_ref(),
            self.colour_map.as_ref(),
            &self.settings,
        )
    }
}

impl std::fmt::Debug for RenderPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderPipeline")
            .field("evaluator", &self.evaluator.display_name())
            .field("colour_map", &self.colour_map.display_name())
            .field("settings", &self.settings)
            .finish()
    }
}
