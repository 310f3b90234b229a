//! Replay script format.

use std::path::Path;

use exhibit_common::{Block, ExhibitError, Point, Rect};
use exhibit_layout::{Hover, LayoutCommand};
use serde::{Deserialize, Serialize};

/// One event in a replay script, tagged by `"type"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    Toggle {
        block: Block,
    },
    Hover {
        block: Block,
        hover: Hover,
    },
    DragStart {
        block: Block,
        x: f64,
        y: f64,
    },
    Move {
        x: f64,
        y: f64,
    },
    Release,
    /// New container bounds; the origin defaults to the page corner.
    Resize {
        width: f64,
        height: f64,
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
    },
    Save,
}

impl ScriptEvent {
    pub fn to_command(&self) -> LayoutCommand {
        match *self {
            ScriptEvent::Toggle { block } => LayoutCommand::Toggle(block),
            ScriptEvent::Hover { block, hover } => LayoutCommand::Hover(block, hover),
            ScriptEvent::DragStart { block, x, y } => {
                LayoutCommand::BeginDrag(block, Point::new(x, y))
            }
            ScriptEvent::Move { x, y } => LayoutCommand::PointerMove(Point::new(x, y)),
            ScriptEvent::Release => LayoutCommand::EndDrag,
            ScriptEvent::Resize {
                width,
                height,
                x,
                y,
            } => LayoutCommand::Resize(Rect::new(x, y, width, height)),
            ScriptEvent::Save => LayoutCommand::Save,
        }
    }
}

pub fn parse_script(json: &str) -> Result<Vec<ScriptEvent>, ExhibitError> {
    serde_json::from_str(json).map_err(|e| ExhibitError::Script(e.to_string()))
}

pub fn load_script(path: &Path) -> Result<Vec<ScriptEvent>, ExhibitError> {
    let json = std::fs::read_to_string(path)?;
    parse_script(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_event_kind() {
        let json = r#"[
            {"type": "toggle", "block": "items"},
            {"type": "hover", "block": "map", "hover": "enter"},
            {"type": "drag_start", "block": "map", "x": 400, "y": 100},
            {"type": "move", "x": 400, "y": 370},
            {"type": "release"},
            {"type": "resize", "width": 1024, "height": 768},
            {"type": "save"}
        ]"#;
        let events = parse_script(json).unwrap();
        assert_eq!(events.len(), 7);
        assert_eq!(
            events[2].to_command(),
            LayoutCommand::BeginDrag(Block::Map, Point::new(400.0, 100.0))
        );
        assert_eq!(
            events[5].to_command(),
            LayoutCommand::Resize(Rect::new(0.0, 0.0, 1024.0, 768.0))
        );
        assert_eq!(events[4].to_command(), LayoutCommand::EndDrag);
    }

    #[test]
    fn unknown_event_is_a_script_error() {
        let err = parse_script(r#"[{"type": "teleport"}]"#).unwrap_err();
        assert!(matches!(err, ExhibitError::Script(_)));
    }

    #[test]
    fn unknown_block_is_a_script_error() {
        let err = parse_script(r#"[{"type": "toggle", "block": "gallery"}]"#).unwrap_err();
        assert!(matches!(err, ExhibitError::Script(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_script(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ExhibitError::Io(_)));
    }
}
