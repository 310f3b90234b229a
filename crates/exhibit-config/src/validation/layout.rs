//! Drag box geometry and drag styling validation.

use crate::schema::ExhibitConfig;

use super::helpers::{validate_range, validate_range_f64};

/// Validate the band split and items width.
pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &ExhibitConfig) {
    validate_range(
        errors,
        "layout.top_block_percentage",
        config.layout.top_block_percentage,
        50,
        90,
    );
    validate_range(
        errors,
        "layout.undated_items_width",
        config.layout.undated_items_width,
        50,
        400,
    );
}

/// Validate drag styling.
pub(crate) fn validate_drag(errors: &mut Vec<String>, config: &ExhibitConfig) {
    validate_range_f64(errors, "drag.opacity", config.drag.opacity, 0.0, 1.0);
}
