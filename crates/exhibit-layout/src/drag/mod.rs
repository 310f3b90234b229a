//! Drag Transition Resolver and drag session state.

mod resolver;
mod types;

pub use resolver::resolve_drag_transition;
pub use types::DragSession;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arrangement::{
        ArrangementState, HorizontalPosition, ItemsHeight, TopElement, VerticalPosition,
    };
    use crate::layout::{ContainerMetrics, LayoutEngine};
    use exhibit_common::{Block, Point, Rect};

    /// Container at page offset (100, 50), 800x600.
    fn metrics() -> ContainerMetrics {
        LayoutEngine::default().measure(Rect::new(100.0, 50.0, 800.0, 600.0))
    }

    fn stacked() -> ArrangementState {
        ArrangementState::default().with_enabled(Block::Items, false)
    }

    fn at(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    // -- Session --

    #[test]
    fn session_follows_pointer_delta() {
        let session = DragSession::new(
            Block::Map,
            at(300.0, 200.0),
            Rect::new(0.0, 0.0, 800.0, 360.0),
        );
        assert_eq!(
            session.follow_rect(at(320.0, 150.0)),
            Rect::new(20.0, -50.0, 800.0, 360.0)
        );
    }

    // -- Vertical family --

    #[test]
    fn dragging_map_below_major_band_flips_to_timeline() {
        let state = stacked();
        // Boundary at 50 + 360 = 410.
        assert_eq!(resolve_drag_transition(&state, Block::Map, at(400.0, 409.0), &metrics()), None);
        let next = resolve_drag_transition(&state, Block::Map, at(400.0, 411.0), &metrics()).unwrap();
        assert_eq!(next.top_element(), TopElement::Timeline);
    }

    #[test]
    fn dragging_map_back_up_across_new_boundary_flips_back() {
        let state = stacked().with_top_element(TopElement::Timeline);
        // New boundary at 50 + 240 = 290.
        assert_eq!(resolve_drag_transition(&state, Block::Map, at(400.0, 300.0), &metrics()), None);
        let next = resolve_drag_transition(&state, Block::Map, at(400.0, 289.0), &metrics()).unwrap();
        assert_eq!(next.top_element(), TopElement::Map);
    }

    #[test]
    fn oscillating_around_stale_boundary_flips_once() {
        let m = metrics();
        let mut state = stacked();
        let mut flips = 0;
        for y in [405.0, 415.0, 405.0, 415.0, 395.0, 420.0, 300.0, 412.0] {
            if let Some(next) = resolve_drag_transition(&state, Block::Map, at(400.0, y), &m) {
                state = next;
                flips += 1;
            }
        }
        assert_eq!(flips, 1);
        assert_eq!(state.top_element(), TopElement::Timeline);

        // Crossing the new boundary flips back.
        state = resolve_drag_transition(&state, Block::Map, at(400.0, 280.0), &m).unwrap();
        assert_eq!(state.top_element(), TopElement::Map);
    }

    #[test]
    fn dragging_bottom_timeline_up_takes_top_band() {
        let state = stacked();
        let next =
            resolve_drag_transition(&state, Block::Timeline, at(400.0, 100.0), &metrics()).unwrap();
        assert_eq!(next.top_element(), TopElement::Timeline);
    }

    #[test]
    fn dragging_top_timeline_down_gives_map_top_band() {
        let state = stacked().with_top_element(TopElement::Timeline);
        let next =
            resolve_drag_transition(&state, Block::Timeline, at(400.0, 500.0), &metrics()).unwrap();
        assert_eq!(next.top_element(), TopElement::Map);
    }

    #[test]
    fn no_vertical_flip_with_single_major() {
        let state = stacked().with_enabled(Block::Timeline, false);
        assert_eq!(
            resolve_drag_transition(&state, Block::Map, at(400.0, 640.0), &metrics()),
            None
        );
    }

    #[test]
    fn items_drag_never_flips_stacking() {
        let state = ArrangementState::default();
        assert_eq!(
            resolve_drag_transition(&state, Block::Items, at(890.0, 640.0), &metrics()),
            None
        );
    }

    // -- Horizontal family --

    #[test]
    fn level_block_pushes_items_left() {
        let state = ArrangementState::default()
            .with_items_height(ItemsHeight::Partial)
            .with_items_vertical(VerticalPosition::Top);
        // Rightward line at 100 + 650 = 750; stay in the top band.
        assert_eq!(resolve_drag_transition(&state, Block::Map, at(749.0, 100.0), &metrics()), None);
        let next = resolve_drag_transition(&state, Block::Map, at(751.0, 100.0), &metrics()).unwrap();
        assert_eq!(next.items_horizontal(), HorizontalPosition::Left);
        assert_eq!(next.top_element(), TopElement::Map);
    }

    #[test]
    fn level_block_pushes_items_right() {
        let state = ArrangementState::default()
            .with_items_horizontal(HorizontalPosition::Left)
            .with_items_vertical(VerticalPosition::Top);
        // Leftward line at 100 + 150 = 250.
        assert_eq!(resolve_drag_transition(&state, Block::Map, at(260.0, 100.0), &metrics()), None);
        let next = resolve_drag_transition(&state, Block::Map, at(240.0, 100.0), &metrics()).unwrap();
        assert_eq!(next.items_horizontal(), HorizontalPosition::Right);
    }

    #[test]
    fn block_in_other_band_does_not_move_items() {
        let state = ArrangementState::default().with_items_vertical(VerticalPosition::Top);
        // Timeline sits in the bottom band; pointer stays there.
        assert_eq!(
            resolve_drag_transition(&state, Block::Timeline, at(890.0, 600.0), &metrics()),
            None
        );
    }

    #[test]
    fn full_height_items_ignored_when_stacked() {
        let state = ArrangementState::default().with_items_height(ItemsHeight::Full);
        assert_eq!(
            resolve_drag_transition(&state, Block::Map, at(890.0, 100.0), &metrics()),
            None
        );
    }

    #[test]
    fn single_major_beside_items_moves_items() {
        let state = ArrangementState::default()
            .with_enabled(Block::Timeline, false)
            .with_items_height(ItemsHeight::Full);
        let next = resolve_drag_transition(&state, Block::Map, at(800.0, 600.0), &metrics()).unwrap();
        assert_eq!(next.items_horizontal(), HorizontalPosition::Left);
    }

    #[test]
    fn both_families_fire_on_one_tick() {
        // Items shares the bottom band; map drops into it past the right line.
        let state = ArrangementState::default().with_items_vertical(VerticalPosition::Bottom);
        let next = resolve_drag_transition(&state, Block::Map, at(800.0, 500.0), &metrics()).unwrap();
        assert_eq!(next.top_element(), TopElement::Timeline);
        assert_eq!(next.items_horizontal(), HorizontalPosition::Left);
    }

    #[test]
    fn vertical_flip_out_of_items_band_skips_horizontal() {
        let state = ArrangementState::default().with_items_vertical(VerticalPosition::Top);
        let next = resolve_drag_transition(&state, Block::Map, at(800.0, 500.0), &metrics()).unwrap();
        assert_eq!(next.top_element(), TopElement::Timeline);
        assert_eq!(next.items_horizontal(), HorizontalPosition::Right);
    }

    #[test]
    fn repeated_pointer_is_idempotent() {
        let m = metrics();
        let starts = [
            ArrangementState::default(),
            ArrangementState::default().with_items_vertical(VerticalPosition::Bottom),
            ArrangementState::default().with_items_horizontal(HorizontalPosition::Left),
            stacked().with_top_element(TopElement::Timeline),
            ArrangementState::default().with_enabled(Block::Timeline, false),
        ];
        let pointers = [at(800.0, 500.0), at(150.0, 60.0), at(500.0, 350.0), at(880.0, 630.0)];
        for start in starts {
            for block in [Block::Map, Block::Timeline] {
                for pointer in pointers {
                    let first = resolve_drag_transition(&start, block, pointer, &m);
                    let settled = first.unwrap_or(start);
                    assert_eq!(
                        resolve_drag_transition(&settled, block, pointer, &m),
                        None,
                        "{start:?} {block} {pointer:?}"
                    );
                }
            }
        }
    }
}
