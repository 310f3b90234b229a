//! Drag session bookkeeping.

use exhibit_common::{Block, Point, Rect};

/// An active drag: which block, where the pointer went down, and where the
/// block's box was at that moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub block: Block,
    pub pointer_start: Point,
    /// Container-relative rect of the block when the drag began.
    pub rect_start: Rect,
}

impl DragSession {
    pub fn new(block: Block, pointer_start: Point, rect_start: Rect) -> Self {
        Self {
            block,
            pointer_start,
            rect_start,
        }
    }

    /// The dragged box follows the raw pointer delta, not the grid.
    pub fn follow_rect(&self, pointer: Point) -> Rect {
        self.rect_start.translate(
            pointer.x - self.pointer_start.x,
            pointer.y - self.pointer_start.y,
        )
    }
}
