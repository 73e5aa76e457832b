//! Interactive controller for gesture-driven fractal exploration.
//!
//! The controller follows the ports & adapters pattern:
//! - **Input**: `InputEvent` values translated by an input adapter
//! - **Output**: the `CanvasSurfacePort` trait receiving finished frames
//! - **Core**: rasterization and viewport math from `core/`

mod controller;
pub mod errors;
pub mod events;
pub mod gesture;
pub mod ports;

pub use controller::GestureController;
pub use errors::SetupError;
pub use events::{EventResponse, InputEvent};
pub use gesture::GestureSession;
pub use ports::canvas_surface::CanvasSurfacePort;
