//! Pushing geometry to the animator.

use exhibit_common::Block;
use tracing::debug;

use crate::animator::BoxStyle;
use crate::layout::compute_layout;

use super::LayoutController;

impl LayoutController {
    /// Place every block immediately and hide the disabled ones.
    pub(super) fn render_initial(&mut self) {
        for block in Block::ALL {
            match self.layout.get(block) {
                Some(rect) => {
                    let mut style = BoxStyle::at(rect);
                    style.background = Some(self.options.gloss.colors(block).default);
                    self.animator.apply(block, style);
                    self.rendered.insert(block, rect);
                }
                None => self.animator.apply(block, BoxStyle::hidden()),
            }
        }
        debug!(blocks = ?self.layout.blocks(), "initial layout rendered");
    }

    /// Recompute the geometry and animate every block whose rect changed,
    /// pre-empting any tween still running on it.
    ///
    /// `skip` is the dragged block, which follows the pointer instead.
    pub(super) fn reflow(&mut self, skip: Option<Block>) {
        self.layout = compute_layout(&self.state, &self.metrics);

        for block in Block::ALL {
            match self.layout.get(block) {
                Some(_) if skip == Some(block) => {}
                Some(rect) => {
                    if self.rendered.get(&block) == Some(&rect) {
                        continue;
                    }
                    self.animator.stop(block);
                    self.animator.animate(block, BoxStyle::at(rect), None);
                    self.rendered.insert(block, rect);
                }
                None => {
                    if self.rendered.remove(&block).is_some() {
                        self.animator.stop(block);
                        self.animator.apply(block, BoxStyle::hidden());
                    }
                }
            }
        }
        debug!(state = ?self.state, "layout reflowed");
    }
}
