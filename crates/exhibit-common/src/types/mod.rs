mod color;
mod core;

pub use self::core::*;
pub use color::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.bottom(), 70.0);
    }

    #[test]
    fn rect_translate_keeps_size() {
        let r = Rect::new(0.0, 0.0, 800.0, 360.0).translate(15.0, -5.0);
        assert_eq!(r, Rect::new(15.0, -5.0, 800.0, 360.0));
    }

    #[test]
    fn rect_shared_edge_is_not_overlap() {
        let top = Rect::new(0.0, 0.0, 800.0, 360.0);
        let bottom = Rect::new(0.0, 360.0, 800.0, 240.0);
        assert!(!top.overlaps(&bottom));
        assert!(!bottom.overlaps(&top));
    }

    #[test]
    fn rect_overlap_detected() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 50.0, 100.0, 100.0);
        assert!(a.overlaps(&b));
    }

    #[test]
    fn rect_serialization() {
        let r = Rect::new(0.0, 360.0, 650.0, 240.0);
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(r, deserialized);
    }

    #[test]
    fn block_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Block::Timeline).unwrap(), "\"timeline\"");
        let block: Block = serde_json::from_str("\"items\"").unwrap();
        assert_eq!(block, Block::Items);
    }

    #[test]
    fn block_display() {
        assert_eq!(Block::Map.to_string(), "map");
        assert_eq!(Block::ALL.len(), 3);
    }

    #[test]
    fn color_from_hex_6() {
        let c = Color::from_hex("#fffcf4").unwrap();
        assert_eq!(c, Color::from_rgba(255, 252, 244, 255));
    }

    #[test]
    fn color_from_hex_8() {
        let c = Color::from_hex("#f9f9f980").unwrap();
        assert_eq!(c, Color::from_rgba(249, 249, 249, 128));
    }

    #[test]
    fn color_from_hex_invalid() {
        assert!(Color::from_hex("zzzzzz").is_none());
        assert!(Color::from_hex("#abc").is_none());
        assert!(Color::from_hex("").is_none());
        assert!(Color::from_hex("#ffé0f").is_none());
    }

    #[test]
    fn color_roundtrip_hex() {
        let original = Color::from_rgba(244, 244, 244, 255);
        assert_eq!(Color::from_hex(&original.to_hex()), Some(original));
    }
}
