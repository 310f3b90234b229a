//! Toggle transitions and the "level with items" relation.

use exhibit_common::Block;

use super::types::{ArrangementState, ItemsHeight};

impl ArrangementState {
    /// The state after pressing a block's toggle, or `None` when the press
    /// is refused.
    ///
    /// Turning off the last of map/timeline forces items on at full height.
    /// Turning items off is refused when it is the only visible block.
    pub fn toggled(&self, block: Block) -> Option<Self> {
        let enabled = self.is_enabled(block);
        if block == Block::Items && enabled && !self.map_enabled && !self.timeline_enabled {
            return None;
        }
        Some(self.with_enabled(block, !enabled))
    }

    /// True when `block` shares a band with a partial-height items block, or
    /// when it is the only block beside items.
    pub fn is_level_with_items(&self, block: Block) -> bool {
        if block == Block::Items || !self.items_enabled || !self.is_enabled(block) {
            return false;
        }

        if self.is_stacked() {
            self.items_height == ItemsHeight::Partial
                && self.band_of(block) == Some(self.items_vertical)
        } else {
            // Only this block and items remain; items runs alongside it.
            true
        }
    }
}
