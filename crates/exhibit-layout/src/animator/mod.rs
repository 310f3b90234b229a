use std::time::Duration;

use exhibit_common::{Block, Color, Rect};
use serde::Serialize;

pub mod noop;
pub mod recording;
pub mod traced;

pub use noop::NoopAnimator;
pub use recording::{AnimatorCall, RecordingAnimator};
pub use traced::TracingAnimator;

/// Visual properties for one block's box. Unset fields are left alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BoxStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rect: Option<Rect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

impl BoxStyle {
    /// Visible at `rect`.
    pub fn at(rect: Rect) -> Self {
        Self {
            rect: Some(rect),
            visible: Some(true),
            ..Self::default()
        }
    }

    pub fn hidden() -> Self {
        Self {
            visible: Some(false),
            ..Self::default()
        }
    }

    pub fn background(color: Color) -> Self {
        Self {
            background: Some(color),
            ..Self::default()
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = Some(z_index);
        self
    }
}

/// Presentation collaborator that moves and styles the block boxes.
///
/// Calls never fail; an animator that cannot draw simply drops them.
pub trait Animator {
    /// Set the style immediately.
    fn apply(&mut self, block: Block, style: BoxStyle);

    /// Tween towards the style. `None` uses the animator's own duration.
    fn animate(&mut self, block: Block, style: BoxStyle, duration: Option<Duration>);

    /// Cancel any tween running on the block.
    fn stop(&mut self, block: Block);
}
