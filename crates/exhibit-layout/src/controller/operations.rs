//! Toggles, hover gloss, resize and command dispatch.

use exhibit_common::{Block, Rect};
use tracing::{debug, warn};

use crate::animator::BoxStyle;
use crate::commands::{Hover, LayoutCommand};

use super::LayoutController;

impl LayoutController {
    /// Dispatch a command. Returns whether it had any effect.
    pub fn execute(&mut self, cmd: LayoutCommand) -> exhibit_common::Result<bool> {
        Ok(match cmd {
            LayoutCommand::Toggle(block) => self.toggle_block(block),
            LayoutCommand::Hover(block, hover) => self.hover(block, hover),
            LayoutCommand::BeginDrag(block, pointer) => self.begin_drag(block, pointer),
            LayoutCommand::PointerMove(pointer) => self.on_pointer_move(pointer),
            LayoutCommand::EndDrag => return self.end_drag(),
            LayoutCommand::Resize(bounds) => {
                self.resize(bounds);
                true
            }
            LayoutCommand::Save => {
                self.save()?;
                true
            }
        })
    }

    /// Press a block's visibility toggle.
    pub fn toggle_block(&mut self, block: Block) -> bool {
        if self.drag.is_some() {
            warn!(%block, "toggle refused during drag");
            return false;
        }
        let Some(next) = self.state.toggled(block) else {
            warn!(%block, "toggle refused: nothing would be shown");
            return false;
        };

        debug!(%block, enabled = next.is_enabled(block), "block toggled");
        self.state = next;
        self.reflow(None);
        true
    }

    /// Fade the block's background towards its hovered or resting colour.
    pub fn hover(&mut self, block: Block, hover: Hover) -> bool {
        if self.drag.is_some() || !self.state.is_enabled(block) {
            return false;
        }
        let colors = self.options.gloss.colors(block);
        let color = match hover {
            Hover::Enter => colors.target,
            Hover::Leave => colors.default,
        };
        self.animator
            .animate(block, BoxStyle::background(color), Some(self.options.gloss.fade));
        true
    }

    /// Re-measure the container and move blocks to the new geometry.
    pub fn resize(&mut self, bounds: Rect) {
        self.metrics = self.options.engine.measure(bounds);
        debug!(
            width = bounds.width,
            height = bounds.height,
            "container resized"
        );
        self.reflow(self.dragged_block());
    }
}
