//! Core types for the arrangement: placement enums and ArrangementState.

use exhibit_common::Block;
use serde::{Deserialize, Serialize};

/// Which of map/timeline holds the top band when both are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopElement {
    #[default]
    Map,
    Timeline,
}

impl TopElement {
    pub fn block(self) -> Block {
        match self {
            TopElement::Map => Block::Map,
            TopElement::Timeline => Block::Timeline,
        }
    }

    pub fn other(self) -> Self {
        match self {
            TopElement::Map => TopElement::Timeline,
            TopElement::Timeline => TopElement::Map,
        }
    }

    /// `None` for the items block, which never stacks.
    pub fn from_block(block: Block) -> Option<Self> {
        match block {
            Block::Map => Some(TopElement::Map),
            Block::Timeline => Some(TopElement::Timeline),
            Block::Items => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalPosition {
    Left,
    #[default]
    Right,
}

impl HorizontalPosition {
    pub fn flipped(self) -> Self {
        match self {
            HorizontalPosition::Left => HorizontalPosition::Right,
            HorizontalPosition::Right => HorizontalPosition::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalPosition {
    #[default]
    Top,
    Bottom,
}

/// Whether the items block spans the container height or shares a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemsHeight {
    Full,
    #[default]
    Partial,
}

/// The discrete layout configuration of the drag box.
///
/// Fields are private: every constructor and transition re-establishes the
/// rule that at least one block is visible, so a state with nothing to draw
/// cannot be built outside this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ArrangementState {
    pub(super) map_enabled: bool,
    pub(super) timeline_enabled: bool,
    pub(super) items_enabled: bool,
    pub(super) top_element: TopElement,
    pub(super) items_height: ItemsHeight,
    pub(super) items_horizontal: HorizontalPosition,
    pub(super) items_vertical: VerticalPosition,
}

impl Default for ArrangementState {
    fn default() -> Self {
        Self {
            map_enabled: true,
            timeline_enabled: true,
            items_enabled: true,
            top_element: TopElement::default(),
            items_height: ItemsHeight::default(),
            items_horizontal: HorizontalPosition::default(),
            items_vertical: VerticalPosition::default(),
        }
    }
}

impl ArrangementState {
    // -- Accessors --

    pub fn is_enabled(&self, block: Block) -> bool {
        match block {
            Block::Map => self.map_enabled,
            Block::Timeline => self.timeline_enabled,
            Block::Items => self.items_enabled,
        }
    }

    /// Enabled blocks in `map, timeline, items` order.
    pub fn enabled_blocks(&self) -> Vec<Block> {
        Block::ALL
            .into_iter()
            .filter(|b| self.is_enabled(*b))
            .collect()
    }

    pub fn top_element(&self) -> TopElement {
        self.top_element
    }

    pub fn items_height(&self) -> ItemsHeight {
        self.items_height
    }

    pub fn items_horizontal(&self) -> HorizontalPosition {
        self.items_horizontal
    }

    pub fn items_vertical(&self) -> VerticalPosition {
        self.items_vertical
    }

    /// True when map and timeline share the container in two bands.
    pub fn is_stacked(&self) -> bool {
        self.map_enabled && self.timeline_enabled
    }

    /// The band a map/timeline block occupies when the two are stacked.
    pub fn band_of(&self, block: Block) -> Option<VerticalPosition> {
        if !self.is_stacked() {
            return None;
        }
        let element = TopElement::from_block(block)?;
        if element == self.top_element {
            Some(VerticalPosition::Top)
        } else {
            Some(VerticalPosition::Bottom)
        }
    }

    // -- Builders (all normalise) --

    pub fn with_enabled(mut self, block: Block, enabled: bool) -> Self {
        match block {
            Block::Map => self.map_enabled = enabled,
            Block::Timeline => self.timeline_enabled = enabled,
            Block::Items => self.items_enabled = enabled,
        }
        self.normalized()
    }

    pub fn with_top_element(mut self, top: TopElement) -> Self {
        self.top_element = top;
        self
    }

    pub fn with_items_height(mut self, height: ItemsHeight) -> Self {
        self.items_height = height;
        self.normalized()
    }

    pub fn with_items_horizontal(mut self, position: HorizontalPosition) -> Self {
        self.items_horizontal = position;
        self
    }

    pub fn with_items_vertical(mut self, position: VerticalPosition) -> Self {
        self.items_vertical = position;
        self
    }

    /// Force items on and full height when neither map nor timeline is shown.
    pub(crate) fn normalized(mut self) -> Self {
        if !self.map_enabled && !self.timeline_enabled {
            self.items_enabled = true;
            self.items_height = ItemsHeight::Full;
        }
        self
    }
}
