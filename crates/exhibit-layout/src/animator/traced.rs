//! Animator that only logs.

use std::time::Duration;

use exhibit_common::Block;
use tracing::debug;

use super::{Animator, BoxStyle};

/// Logs each call at debug level and draws nothing.
pub struct TracingAnimator;

impl Animator for TracingAnimator {
    fn apply(&mut self, block: Block, style: BoxStyle) {
        debug!(%block, ?style, "apply");
    }

    fn animate(&mut self, block: Block, style: BoxStyle, duration: Option<Duration>) {
        debug!(%block, ?style, ?duration, "animate");
    }

    fn stop(&mut self, block: Block) {
        debug!(%block, "stop");
    }
}
