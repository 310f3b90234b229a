//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Exhibit layout builder configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[layout]
# top_block_percentage = 60   # 50-90, height share of the top band
# undated_items_width = 150   # 50-400 px

[drag]
# opacity = 0.5               # 0.0-1.0 while a block is dragged
# z_index = 99

[gloss]
# fade_duration_ms = 300      # 0-5000

# [gloss.map]
# default = "#f9f9f9"
# target = "#fffcf4"

# [gloss.timeline]
# default = "#f4f4f4"
# target = "#fffcf4"

# [gloss.items]
# default = "#f0f0f0"
# target = "#fffcf4"

[logging]
# level = "info"              # trace, debug, info, warn, error
"##
    .to_string()
}
