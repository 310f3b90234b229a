//! Hover gloss validation (fade duration and colour formats).

use crate::schema::{BlockGloss, ExhibitConfig};

use super::helpers::validate_hex_color;

/// Longest accepted colour fade, in milliseconds.
const MAX_FADE_MS: u64 = 5000;

pub(crate) fn validate_gloss(errors: &mut Vec<String>, config: &ExhibitConfig) {
    let gloss = &config.gloss;
    if gloss.fade_duration_ms > MAX_FADE_MS {
        errors.push(format!(
            "gloss.fade_duration_ms = {} is out of range [0, {MAX_FADE_MS}]",
            gloss.fade_duration_ms
        ));
    }

    validate_block(errors, "gloss.map", &gloss.map);
    validate_block(errors, "gloss.timeline", &gloss.timeline);
    validate_block(errors, "gloss.items", &gloss.items);
}

fn validate_block(errors: &mut Vec<String>, prefix: &str, block: &BlockGloss) {
    validate_hex_color(errors, &format!("{prefix}.default"), &block.default);
    validate_hex_color(errors, &format!("{prefix}.target"), &block.target);
}
