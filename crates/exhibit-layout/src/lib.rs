//! Arrangement engine for an exhibit's drag box: which of the map,
//! timeline and undated-items blocks are shown, where each one sits, and
//! how dragging a block rearranges the others.

pub mod animator;
pub mod arrangement;
pub mod commands;
pub mod controller;
pub mod drag;
pub mod layout;
pub mod persist;

pub use animator::{Animator, BoxStyle, NoopAnimator, RecordingAnimator, TracingAnimator};
pub use arrangement::{ArrangementParams, ArrangementState, InitialState};
pub use commands::{Hover, LayoutCommand};
pub use controller::{ControllerOptions, DragStyle, GlossColors, GlossStyle, LayoutController};
pub use drag::resolve_drag_transition;
pub use layout::{compute_layout, ContainerMetrics, Layout, LayoutEngine};
pub use persist::{JsonLinesSaveEndpoint, MemorySaveEndpoint, SaveEndpoint};
