//! Input adapters for the fractal canvas.
//!
//! This module contains adapters that receive input from various sources
//! and translate them into controller calls.

pub mod cli;
#[cfg(feature = "gui")]
pub mod gui;
