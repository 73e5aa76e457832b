//! Port definitions for the interactive controller.
//!
//! Contains the trait the controller renders through; adapters in
//! `presenters/` implement it.

pub mod canvas_surface;
