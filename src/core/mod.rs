pub mod actions;
pub mod colour_mapping;
pub mod config;
pub mod data;
pub mod fractals;
pub mod util;
