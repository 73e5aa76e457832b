//! GUI input adapter for interactive fractal exploration.
//!
//! This module provides a windowed interface using winit for window management,
//! pixels for framebuffer rendering, and egui for the viewport overlay.

mod app;
pub mod errors;
pub mod touch;
pub mod translate;

pub use app::run_gui;
pub use errors::GuiError;
