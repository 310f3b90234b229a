//! Layout engine configuration, container metrics and computed geometry.

use exhibit_common::{Block, Rect};
use serde::Serialize;

/// Split constants used to measure the container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutEngine {
    /// Height share of the top band when map and timeline are stacked.
    pub major_fraction: f64,
    /// Width of the undated items block in pixels.
    pub items_width: f64,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self {
            major_fraction: 0.6,
            items_width: 150.0,
        }
    }
}

impl LayoutEngine {
    /// Derive the band sizes for a container at `bounds` (page coordinates).
    ///
    /// The split fraction is clamped to `[0, 1]` and the items width to the
    /// container width, so no band ever has negative size.
    pub fn measure(&self, bounds: Rect) -> ContainerMetrics {
        let fraction = self.major_fraction.clamp(0.0, 1.0);
        let items_width = self.items_width.clamp(0.0, bounds.width.max(0.0));
        let major_height = bounds.height * fraction;
        ContainerMetrics {
            bounds,
            major_height,
            minor_height: bounds.height - major_height,
            major_width: bounds.width - items_width,
            minor_width: items_width,
            items_width,
        }
    }
}

/// Measured container plus the band sizes derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContainerMetrics {
    /// Container position and size in page coordinates.
    pub bounds: Rect,
    pub major_height: f64,
    pub minor_height: f64,
    pub major_width: f64,
    pub minor_width: f64,
    pub items_width: f64,
}

impl ContainerMetrics {
    pub fn width(&self) -> f64 {
        self.bounds.width
    }

    pub fn height(&self) -> f64 {
        self.bounds.height
    }

    /// Page-space y lines for the stacking flip: `(downward, upward)`.
    ///
    /// The downward line is never above the upward one.
    pub fn vertical_thresholds(&self) -> (f64, f64) {
        let top = self.bounds.y;
        let (low, high) = min_max(self.major_height, self.minor_height);
        (top + high, top + low)
    }

    /// Page-space x lines for the items side flip: `(rightward, leftward)`.
    pub fn horizontal_thresholds(&self) -> (f64, f64) {
        let left = self.bounds.x;
        let (low, high) = min_max(self.major_width, self.minor_width);
        (left + high, left + low)
    }
}

fn min_max(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Rects for the enabled blocks, relative to the container origin, in
/// `map, timeline, items` order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Layout {
    entries: Vec<(Block, Rect)>,
}

impl Layout {
    pub(crate) fn push(&mut self, block: Block, rect: Rect) {
        self.entries.push((block, rect));
    }

    pub fn get(&self, block: Block) -> Option<Rect> {
        self.entries
            .iter()
            .find(|(b, _)| *b == block)
            .map(|(_, r)| *r)
    }

    pub fn contains(&self, block: Block) -> bool {
        self.get(block).is_some()
    }

    pub fn blocks(&self) -> Vec<Block> {
        self.entries.iter().map(|(b, _)| *b).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Block, Rect)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
