//! Drag Transition Resolver.
//!
//! Two independent families of threshold checks run on every pointer move:
//! the vertical family swaps which of map/timeline holds the top band, the
//! horizontal family moves the items column to the other side. Both compare
//! the pointer against lines derived from the container metrics; neither
//! reads or writes anything else.

use exhibit_common::{Block, Point};
use tracing::debug;

use crate::arrangement::{ArrangementState, HorizontalPosition, TopElement};
use crate::layout::ContainerMetrics;

/// Decide whether the pointer crossed a threshold while `dragged` is held.
///
/// Returns the merged new state when either family fired, `None` otherwise.
pub fn resolve_drag_transition(
    state: &ArrangementState,
    dragged: Block,
    pointer: Point,
    metrics: &ContainerMetrics,
) -> Option<ArrangementState> {
    let mut next = *state;

    if let Some(stacked) = resolve_vertical(&next, dragged, pointer, metrics) {
        debug!(
            block = %dragged,
            top = ?stacked.top_element(),
            "stacking order flipped"
        );
        next = stacked;
    }

    // Evaluated after the vertical flip: the dragged block may now sit in
    // the other band.
    if let Some(moved) = resolve_horizontal(&next, dragged, pointer, metrics) {
        debug!(
            block = %dragged,
            side = ?moved.items_horizontal(),
            "items side flipped"
        );
        next = moved;
    }

    (next != *state).then_some(next)
}

fn resolve_vertical(
    state: &ArrangementState,
    dragged: Block,
    pointer: Point,
    metrics: &ContainerMetrics,
) -> Option<ArrangementState> {
    if !state.is_stacked() {
        return None;
    }
    let element = TopElement::from_block(dragged)?;
    let (downward, upward) = metrics.vertical_thresholds();

    if state.top_element() == element {
        (pointer.y > downward).then(|| state.with_top_element(element.other()))
    } else {
        (pointer.y < upward).then(|| state.with_top_element(element))
    }
}

fn resolve_horizontal(
    state: &ArrangementState,
    dragged: Block,
    pointer: Point,
    metrics: &ContainerMetrics,
) -> Option<ArrangementState> {
    if !state.is_level_with_items(dragged) {
        return None;
    }
    let (rightward, leftward) = metrics.horizontal_thresholds();

    match state.items_horizontal() {
        HorizontalPosition::Right => (pointer.x > rightward)
            .then(|| state.with_items_horizontal(HorizontalPosition::Left)),
        HorizontalPosition::Left => (pointer.x < leftward)
            .then(|| state.with_items_horizontal(HorizontalPosition::Right)),
    }
}
