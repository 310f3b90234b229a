//! Core types and constructors for LayoutController.

use std::collections::HashMap;
use std::time::Duration;

use exhibit_common::{Block, Color, Rect};

use crate::animator::Animator;
use crate::arrangement::{ArrangementState, InitialState};
use crate::drag::DragSession;
use crate::layout::{compute_layout, ContainerMetrics, Layout, LayoutEngine};
use crate::persist::SaveEndpoint;

/// Look of a block while it is being dragged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragStyle {
    pub opacity: f64,
    pub z_index: i32,
}

impl Default for DragStyle {
    fn default() -> Self {
        Self {
            opacity: 0.5,
            z_index: 99,
        }
    }
}

/// Resting and hovered background of one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlossColors {
    pub default: Color,
    pub target: Color,
}

impl GlossColors {
    fn hovered_from(default: Color) -> Self {
        Self {
            default,
            target: Color::from_rgba(0xff, 0xfc, 0xf4, 0xff),
        }
    }
}

/// Background fade played when the pointer enters or leaves a block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlossStyle {
    pub fade: Duration,
    pub map: GlossColors,
    pub timeline: GlossColors,
    pub items: GlossColors,
}

impl Default for GlossStyle {
    fn default() -> Self {
        Self {
            fade: Duration::from_millis(300),
            map: GlossColors::hovered_from(Color::from_rgba(0xf9, 0xf9, 0xf9, 0xff)),
            timeline: GlossColors::hovered_from(Color::from_rgba(0xf4, 0xf4, 0xf4, 0xff)),
            items: GlossColors::hovered_from(Color::from_rgba(0xf0, 0xf0, 0xf0, 0xff)),
        }
    }
}

impl GlossStyle {
    pub fn colors(&self, block: Block) -> GlossColors {
        match block {
            Block::Map => self.map,
            Block::Timeline => self.timeline,
            Block::Items => self.items,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControllerOptions {
    pub engine: LayoutEngine,
    pub drag: DragStyle,
    pub gloss: GlossStyle,
}

/// Owns the arrangement of one exhibit's drag box and drives its
/// collaborators: the animator for every visual change, the save endpoint
/// on release or explicit save.
pub struct LayoutController {
    pub(super) state: ArrangementState,
    pub(super) record_id: u64,
    pub(super) metrics: ContainerMetrics,
    /// Geometry for `state` at `metrics`, container-relative.
    pub(super) layout: Layout,
    pub(super) options: ControllerOptions,
    pub(super) animator: Box<dyn Animator>,
    pub(super) save_endpoint: Box<dyn SaveEndpoint>,
    pub(super) drag: Option<DragSession>,
    /// Last rect handed to the animator per visible block.
    pub(super) rendered: HashMap<Block, Rect>,
}

impl LayoutController {
    /// Build the controller and draw the initial geometry without tweens.
    ///
    /// `bounds` is the container's position and size in page coordinates.
    pub fn new(
        initial: &InitialState,
        bounds: Rect,
        options: ControllerOptions,
        animator: Box<dyn Animator>,
        save_endpoint: Box<dyn SaveEndpoint>,
    ) -> Self {
        let state = ArrangementState::from(initial);
        let metrics = options.engine.measure(bounds);
        let layout = compute_layout(&state, &metrics);

        let mut controller = Self {
            state,
            record_id: initial.record_id,
            metrics,
            layout,
            options,
            animator,
            save_endpoint,
            drag: None,
            rendered: HashMap::new(),
        };
        controller.render_initial();
        controller
    }

    // -- Accessors --

    pub fn state(&self) -> &ArrangementState {
        &self.state
    }

    pub fn record_id(&self) -> u64 {
        self.record_id
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn metrics(&self) -> &ContainerMetrics {
        &self.metrics
    }

    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn dragged_block(&self) -> Option<Block> {
        self.drag.map(|d| d.block)
    }
}
