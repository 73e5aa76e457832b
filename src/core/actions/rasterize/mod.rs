pub mod pipeline;
pub mod ports;
pub mod rasterize;
pub mod rasterize_rayon;
