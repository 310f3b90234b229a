//! No-op Animator implementation.
//!
//! Used when nothing is drawn, e.g. headless replays.

use std::time::Duration;

use exhibit_common::Block;

use super::{Animator, BoxStyle};

/// Drops every call.
pub struct NoopAnimator;

impl Animator for NoopAnimator {
    fn apply(&mut self, _block: Block, _style: BoxStyle) {}

    fn animate(&mut self, _block: Block, _style: BoxStyle, _duration: Option<Duration>) {}

    fn stop(&mut self, _block: Block) {}
}
