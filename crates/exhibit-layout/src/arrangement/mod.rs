//! Arrangement State: which blocks are shown and how they are placed.

mod initial;
mod params;
mod transitions;
mod types;

pub use initial::InitialState;
pub use params::ArrangementParams;
pub use types::*;
