pub mod smooth_hue;
pub mod two_tone_gradient;
