//! Commands accepted by the layout controller.

use exhibit_common::{Block, Point, Rect};
use serde::{Deserialize, Serialize};

/// Pointer entering or leaving a block's box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hover {
    Enter,
    Leave,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutCommand {
    Toggle(Block),
    Hover(Block, Hover),
    BeginDrag(Block, Point),
    PointerMove(Point),
    EndDrag,
    Resize(Rect),
    Save,
}
