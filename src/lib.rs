//! Helpers for setting up FDTD simulations.
//!
//! The `geometry` module sizes flux boxes around sources and builds the
//! planar flux regions of their faces. The remaining modules are small
//! text and number utilities used by simulation scripts.

pub mod build_info;
pub mod error;
pub mod file_edit;
pub mod geometry;
pub mod matrix_output;
pub mod progress;
pub mod util;

pub use error::{Error, Result};
