//! Stroke segment primitives.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Stroke color used when the caller does not supply one.
pub const DEFAULT_COLOR: &str = "black";

/// One straight line from `start` to `end` drawn in a single color.
///
/// Coordinates are CSS pixels with the origin at the canvas's top-left;
/// values may be fractional. The color is an opaque token accepted by the
/// rendering context (a CSS color name or `#rrggbb`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Where the stroke begins.
    pub start: Point,
    /// Where the stroke ends.
    pub end: Point,
    /// Stroke color token.
    pub color: String,
}

impl Segment {
    /// Create a new segment.
    pub fn new(start: Point, end: Point, color: impl Into<String>) -> Self {
        Self {
            start,
            end,
            color: color.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_construction() {
        let seg = Segment::new(Point::new(1.0, 2.0), Point::new(3.5, 4.0), "red");
        assert_eq!(seg.start, Point::new(1.0, 2.0));
        assert_eq!(seg.end, Point::new(3.5, 4.0));
        assert_eq!(seg.color, "red");
    }
}
