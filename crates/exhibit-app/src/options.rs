//! Config loading and conversion to controller options.

use std::path::Path;
use std::time::Duration;

use exhibit_common::{Color, ConfigError};
use exhibit_config::schema::BlockGloss;
use exhibit_config::ExhibitConfig;
use exhibit_layout::{ControllerOptions, DragStyle, GlossColors, GlossStyle, LayoutEngine};
use tracing::warn;

/// Load the override file when given, the platform default otherwise.
/// Both routes validate strictly.
pub fn load_config(path: Option<&Path>) -> Result<ExhibitConfig, ConfigError> {
    match path {
        Some(path) => exhibit_config::load_config_from(path),
        None => exhibit_config::load_config(),
    }
}

pub fn controller_options(config: &ExhibitConfig) -> ControllerOptions {
    let fallback = GlossStyle::default();
    ControllerOptions {
        engine: LayoutEngine {
            major_fraction: config.layout.major_fraction(),
            items_width: config.layout.undated_items_width as f64,
        },
        drag: DragStyle {
            opacity: config.drag.opacity,
            z_index: config.drag.z_index,
        },
        gloss: GlossStyle {
            fade: Duration::from_millis(config.gloss.fade_duration_ms),
            map: gloss_colors("map", &config.gloss.map, fallback.map),
            timeline: gloss_colors("timeline", &config.gloss.timeline, fallback.timeline),
            items: gloss_colors("items", &config.gloss.items, fallback.items),
        },
    }
}

fn gloss_colors(name: &str, gloss: &BlockGloss, fallback: GlossColors) -> GlossColors {
    GlossColors {
        default: parse_or(name, &gloss.default, fallback.default),
        target: parse_or(name, &gloss.target, fallback.target),
    }
}

fn parse_or(name: &str, hex: &str, fallback: Color) -> Color {
    Color::from_hex(hex).unwrap_or_else(|| {
        warn!(block = name, colour = hex, "invalid gloss colour, using default");
        fallback
    })
}
