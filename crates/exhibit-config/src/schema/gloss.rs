//! Hover gloss colours.

use serde::{Deserialize, Serialize};

/// Resting and hovered background colours for one block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockGloss {
    pub default: String,
    pub target: String,
}

impl BlockGloss {
    fn new(default: &str, target: &str) -> Self {
        Self {
            default: default.into(),
            target: target.into(),
        }
    }
}

/// Hover gloss settings for all three blocks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlossConfig {
    /// Colour fade duration in milliseconds (valid range: 0-5000).
    pub fade_duration_ms: u64,
    pub map: BlockGloss,
    pub timeline: BlockGloss,
    pub items: BlockGloss,
}

impl Default for GlossConfig {
    fn default() -> Self {
        Self {
            fade_duration_ms: 300,
            map: BlockGloss::new("#f9f9f9", "#fffcf4"),
            timeline: BlockGloss::new("#f4f4f4", "#fffcf4"),
            items: BlockGloss::new("#f0f0f0", "#fffcf4"),
        }
    }
}
