//! Geometry Solver and container measurement.

mod calculation;
mod types;

pub use calculation::compute_layout;
pub use types::*;
