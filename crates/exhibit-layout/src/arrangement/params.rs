//! The flat parameter object handed to the save endpoint.

use serde::{Deserialize, Serialize};

use super::types::{ArrangementState, HorizontalPosition, ItemsHeight, TopElement};

/// Arrangement as persisted on the exhibit record.
///
/// Block flags are `0`/`1` to match the record columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrangementParams {
    pub record_id: u64,
    pub is_map: u8,
    pub is_timeline: u8,
    pub is_undated_items: u8,
    pub top_element: TopElement,
    pub udi_position: HorizontalPosition,
    pub udi_height: ItemsHeight,
}

impl ArrangementState {
    pub fn to_params(&self, record_id: u64) -> ArrangementParams {
        ArrangementParams {
            record_id,
            is_map: self.map_enabled.into(),
            is_timeline: self.timeline_enabled.into(),
            is_undated_items: self.items_enabled.into(),
            top_element: self.top_element,
            udi_position: self.items_horizontal,
            udi_height: self.items_height,
        }
    }
}
