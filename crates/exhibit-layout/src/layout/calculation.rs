//! Geometry Solver: arrangement state to block rects.

use exhibit_common::{Block, Rect};

use crate::arrangement::{ArrangementState, HorizontalPosition, ItemsHeight, VerticalPosition};

use super::{ContainerMetrics, Layout, LayoutEngine};

impl LayoutEngine {
    /// Measure `bounds` and solve the layout in one step.
    pub fn compute(&self, state: &ArrangementState, bounds: Rect) -> Layout {
        compute_layout(state, &self.measure(bounds))
    }
}

/// Compute rects for every enabled block.
///
/// Rects are relative to the container origin. Disabled blocks are absent.
pub fn compute_layout(state: &ArrangementState, metrics: &ContainerMetrics) -> Layout {
    let width = metrics.width();
    let height = metrics.height();
    let mut layout = Layout::default();

    // (block, top, height) for map/timeline, top band first.
    let majors: Vec<(Block, f64, f64)> = match (
        state.is_enabled(Block::Map),
        state.is_enabled(Block::Timeline),
    ) {
        (true, true) => {
            let top = state.top_element();
            vec![
                (top.block(), 0.0, metrics.major_height),
                (top.other().block(), metrics.major_height, metrics.minor_height),
            ]
        }
        (true, false) => vec![(Block::Map, 0.0, height)],
        (false, true) => vec![(Block::Timeline, 0.0, height)],
        (false, false) => {
            if !state.is_enabled(Block::Items) {
                unreachable!("arrangement with no visible block");
            }
            layout.push(Block::Items, Rect::new(0.0, 0.0, width, height));
            return layout;
        }
    };

    let items = state
        .is_enabled(Block::Items)
        .then(|| items_rect(state, metrics));

    let mut rects: Vec<(Block, Rect)> = majors
        .into_iter()
        .map(|(block, y, h)| {
            let full = Rect::new(0.0, y, width, h);
            match items {
                Some(items) if bands_touch(&full, &items) => {
                    (block, beside(full, &items, state.items_horizontal()))
                }
                _ => (block, full),
            }
        })
        .collect();
    rects.sort_by_key(|(block, _)| order(*block));

    for (block, rect) in rects {
        layout.push(block, rect);
    }
    if let Some(items) = items {
        layout.push(Block::Items, items);
    }
    layout
}

/// Items rect when at least one of map/timeline is shown.
fn items_rect(state: &ArrangementState, metrics: &ContainerMetrics) -> Rect {
    let width = metrics.items_width.min(metrics.width());
    let x = match state.items_horizontal() {
        HorizontalPosition::Left => 0.0,
        HorizontalPosition::Right => metrics.width() - width,
    };

    let (y, height) = if state.is_stacked() && state.items_height() == ItemsHeight::Partial {
        match state.items_vertical() {
            VerticalPosition::Top => (0.0, metrics.major_height),
            VerticalPosition::Bottom => (metrics.major_height, metrics.minor_height),
        }
    } else {
        (0.0, metrics.height())
    };

    Rect::new(x, y, width, height)
}

/// True when the items column shares some height with a full-width band.
fn bands_touch(band: &Rect, items: &Rect) -> bool {
    band.y < items.bottom() && items.y < band.bottom()
}

/// Shrink a full-width band so it sits beside the items column.
fn beside(band: Rect, items: &Rect, side: HorizontalPosition) -> Rect {
    let width = (band.width - items.width).max(0.0);
    let x = match side {
        HorizontalPosition::Left => items.width,
        HorizontalPosition::Right => 0.0,
    };
    Rect::new(x, band.y, width, band.height)
}

fn order(block: Block) -> usize {
    match block {
        Block::Map => 0,
        Block::Timeline => 1,
        Block::Items => 2,
    }
}
