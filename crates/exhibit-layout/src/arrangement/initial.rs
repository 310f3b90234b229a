//! Render-time initial parameters handed over by the host page.

use serde::{Deserialize, Deserializer, Serialize};

use super::types::{
    ArrangementState, HorizontalPosition, ItemsHeight, TopElement, VerticalPosition,
};

/// Initial arrangement as injected by the exhibit editor page.
///
/// The `is_*` flags arrive either as booleans or as `0`/`1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialState {
    pub record_id: u64,
    pub top_element: TopElement,
    pub items_h_pos: HorizontalPosition,
    pub items_v_pos: VerticalPosition,
    pub items_height: ItemsHeight,
    #[serde(deserialize_with = "flag")]
    pub is_map: bool,
    #[serde(deserialize_with = "flag")]
    pub is_timeline: bool,
    #[serde(deserialize_with = "flag")]
    pub is_items: bool,
}

impl Default for InitialState {
    fn default() -> Self {
        Self {
            record_id: 0,
            top_element: TopElement::default(),
            items_h_pos: HorizontalPosition::default(),
            items_v_pos: VerticalPosition::default(),
            items_height: ItemsHeight::default(),
            is_map: true,
            is_timeline: true,
            is_items: true,
        }
    }
}

impl From<&InitialState> for ArrangementState {
    fn from(initial: &InitialState) -> Self {
        ArrangementState {
            map_enabled: initial.is_map,
            timeline_enabled: initial.is_timeline,
            items_enabled: initial.is_items,
            top_element: initial.top_element,
            items_height: initial.items_height,
            items_horizontal: initial.items_h_pos,
            items_vertical: initial.items_v_pos,
        }
        .normalized()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Int(i64),
}

fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => Ok(b),
        Flag::Int(i) => Ok(i != 0),
    }
}
