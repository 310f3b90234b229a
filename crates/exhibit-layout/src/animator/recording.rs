//! Animator that keeps a log of every call.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use exhibit_common::{Block, Rect};
use serde::Serialize;

use super::{Animator, BoxStyle};

/// One recorded animator call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum AnimatorCall {
    Apply {
        block: Block,
        style: BoxStyle,
    },
    Animate {
        block: Block,
        style: BoxStyle,
        #[serde(skip_serializing_if = "Option::is_none")]
        duration_ms: Option<u64>,
    },
    Stop {
        block: Block,
    },
}

impl AnimatorCall {
    pub fn block(&self) -> Block {
        match self {
            AnimatorCall::Apply { block, .. }
            | AnimatorCall::Animate { block, .. }
            | AnimatorCall::Stop { block } => *block,
        }
    }

    pub fn style(&self) -> Option<&BoxStyle> {
        match self {
            AnimatorCall::Apply { style, .. } | AnimatorCall::Animate { style, .. } => Some(style),
            AnimatorCall::Stop { .. } => None,
        }
    }
}

/// Records calls into a log shared between clones, so a caller can hand
/// one clone to the controller and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingAnimator {
    calls: Rc<RefCell<Vec<AnimatorCall>>>,
}

impl RecordingAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<AnimatorCall> {
        self.calls.borrow().clone()
    }

    /// Take and clear the log.
    pub fn drain(&self) -> Vec<AnimatorCall> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }

    pub fn calls_for(&self, block: Block) -> Vec<AnimatorCall> {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.block() == block)
            .cloned()
            .collect()
    }

    /// The last rect sent for `block`, whether applied or animated.
    pub fn last_rect(&self, block: Block) -> Option<Rect> {
        self.calls
            .borrow()
            .iter()
            .rev()
            .filter(|c| c.block() == block)
            .find_map(|c| c.style().and_then(|s| s.rect))
    }

    /// The last visibility sent for `block`.
    pub fn last_visible(&self, block: Block) -> Option<bool> {
        self.calls
            .borrow()
            .iter()
            .rev()
            .filter(|c| c.block() == block)
            .find_map(|c| c.style().and_then(|s| s.visible))
    }

    fn push(&self, call: AnimatorCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl Animator for RecordingAnimator {
    fn apply(&mut self, block: Block, style: BoxStyle) {
        self.push(AnimatorCall::Apply { block, style });
    }

    fn animate(&mut self, block: Block, style: BoxStyle, duration: Option<Duration>) {
        self.push(AnimatorCall::Animate {
            block,
            style,
            duration_ms: duration.map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX)),
        });
    }

    fn stop(&mut self, block: Block) {
        self.push(AnimatorCall::Stop { block });
    }
}
