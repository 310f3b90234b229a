//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    let config = ExhibitConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_top_percentage_below_half() {
    let mut config = ExhibitConfig::default();
    config.layout.top_block_percentage = 40;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.top_block_percentage"));
}

#[test]
fn catches_top_percentage_too_large() {
    let mut config = ExhibitConfig::default();
    config.layout.top_block_percentage = 95;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.top_block_percentage"));
}

#[test]
fn catches_items_width_too_small() {
    let mut config = ExhibitConfig::default();
    config.layout.undated_items_width = 10;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.undated_items_width"));
}

#[test]
fn catches_drag_opacity_over_one() {
    let mut config = ExhibitConfig::default();
    config.drag.opacity = 1.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("drag.opacity"));
}

#[test]
fn catches_nan_drag_opacity() {
    let mut config = ExhibitConfig::default();
    config.drag.opacity = f64::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("drag.opacity"));
}

#[test]
fn catches_fade_too_long() {
    let mut config = ExhibitConfig::default();
    config.gloss.fade_duration_ms = 10_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("gloss.fade_duration_ms"));
}

#[test]
fn catches_bad_gloss_colour() {
    let mut config = ExhibitConfig::default();
    config.gloss.timeline.target = "yellow".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("gloss.timeline.target"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = ExhibitConfig::default();
    config.layout.top_block_percentage = 10;
    config.gloss.map.default = "#12".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.top_block_percentage"));
    assert!(err.contains("gloss.map.default"));
    assert!(err.contains("; "));
}
