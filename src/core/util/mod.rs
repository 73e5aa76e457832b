pub mod hsl_to_rgb;
