//! Drag lifecycle: grab, follow, release.

use exhibit_common::{Block, Point};
use tracing::{debug, warn};

use crate::animator::BoxStyle;
use crate::drag::{resolve_drag_transition, DragSession};

use super::LayoutController;

impl LayoutController {
    /// Start dragging `block`. Refused while another drag is active, for a
    /// hidden block, and for the items block.
    pub fn begin_drag(&mut self, block: Block, pointer: Point) -> bool {
        if self.drag.is_some() || block == Block::Items || !self.state.is_enabled(block) {
            debug!(%block, "drag refused");
            return false;
        }
        let Some(rect_start) = self.layout.get(block) else {
            return false;
        };

        let lifted = BoxStyle::default()
            .with_opacity(self.options.drag.opacity)
            .with_z_index(self.options.drag.z_index);
        self.animator.stop(block);
        self.animator.apply(block, lifted);
        self.drag = Some(DragSession::new(block, pointer, rect_start));

        debug!(%block, x = pointer.x, y = pointer.y, "drag started");
        true
    }

    /// Move the dragged block with the pointer and apply any transition the
    /// new position triggers. Returns `true` when the arrangement changed.
    pub fn on_pointer_move(&mut self, pointer: Point) -> bool {
        let Some(session) = self.drag else {
            return false;
        };
        let block = session.block;
        let follow = session.follow_rect(pointer);

        self.animator.apply(
            block,
            BoxStyle {
                rect: Some(follow),
                ..BoxStyle::default()
            },
        );
        self.rendered.insert(block, follow);

        match resolve_drag_transition(&self.state, block, pointer, &self.metrics) {
            Some(next) => {
                self.state = next;
                self.reflow(Some(block));
                true
            }
            None => false,
        }
    }

    /// Finish the drag: snap the block into its slot, restore its look and
    /// save the arrangement.
    ///
    /// Returns `Ok(false)` when no drag was active. A save failure is
    /// returned after the block has already settled.
    pub fn end_drag(&mut self) -> exhibit_common::Result<bool> {
        let Some(session) = self.drag.take() else {
            return Ok(false);
        };
        let block = session.block;

        match self.layout.get(block) {
            Some(rect) => {
                let settled = BoxStyle::at(rect).with_opacity(1.0).with_z_index(0);
                self.animator.animate(block, settled, None);
                self.rendered.insert(block, rect);
            }
            None => warn!(%block, "dragged block has no slot"),
        }

        let colors = self.options.gloss.colors(block);
        self.animator.animate(
            block,
            BoxStyle::background(colors.default),
            Some(self.options.gloss.fade),
        );

        debug!(%block, state = ?self.state, "drag released");
        self.save()?;
        Ok(true)
    }
}
