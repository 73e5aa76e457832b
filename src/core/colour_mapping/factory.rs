use crate::core::actions::rasterize::ports::colour_map::ColourMap;
use crate::core::colour_mapping::kinds::ColourMapKinds;
use crate::core::colour_mapping::maps::smooth_hue::SmoothHue;
use crate::core::colour_mapping::maps::two_tone_gradient::TwoToneGradient;

#[must_use]
pub fn colour_map_factory(kind: ColourMapKinds) -> Box<dyn ColourMap> {
    match kind {
        ColourMapKinds::TwoToneGradient => Box::new(TwoToneGradient::default()),
        ColourMapKinds::SmoothHue => Box::new(SmoothHue::new()),
    }
}
