//! The LayoutController owns the arrangement and drives the animator and
//! save endpoint from toggles, hovers and drags.

mod drag;
mod operations;
mod persistence;
mod render;
mod types;

pub use types::*;
