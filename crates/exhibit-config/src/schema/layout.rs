//! Drag box geometry and drag styling.

use serde::{Deserialize, Serialize};

/// Geometry constants for the drag box.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Height share of the top band when map and timeline are both shown,
    /// in percent (valid range: 50-90).
    pub top_block_percentage: u32,
    /// Width of the undated items block in pixels (valid range: 50-400).
    pub undated_items_width: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            top_block_percentage: 60,
            undated_items_width: 150,
        }
    }
}

impl LayoutConfig {
    pub fn major_fraction(&self) -> f64 {
        self.top_block_percentage as f64 / 100.0
    }
}

/// Styling applied to a block while it is being dragged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Opacity of the dragged block (valid range: 0.0-1.0).
    pub opacity: f64,
    /// Stacking order of the dragged block.
    pub z_index: i32,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            opacity: 0.5,
            z_index: 99,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn major_fraction_from_percentage() {
        let config = LayoutConfig::default();
        assert!((config.major_fraction() - 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn layout_config_partial_toml() {
        let config: LayoutConfig = toml::from_str("undated_items_width = 200").unwrap();
        assert_eq!(config.undated_items_width, 200);
        assert_eq!(config.top_block_percentage, 60);
    }

    #[test]
    fn drag_config_partial_toml() {
        let config: DragConfig = toml::from_str("z_index = 10").unwrap();
        assert_eq!(config.z_index, 10);
        assert!((config.opacity - 0.5).abs() < f64::EPSILON);
    }
}
