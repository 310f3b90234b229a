//! Configuration schema types for the layout builder.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod gloss;
mod layout;
mod system;

pub use gloss::*;
pub use layout::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct ExhibitConfig {
    pub layout: LayoutConfig,
    pub drag: DragConfig,
    pub gloss: GlossConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
