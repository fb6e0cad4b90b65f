//! Wire payloads exchanged with a relay transport.
//!
//! The widget never opens a connection itself. A transport subscribes to the
//! `draw` topic, frames each announced segment as a [`WireMessage`], and
//! injects frames received from peers through the remote entry point
//! ([`crate::board::Whiteboard::apply_remote`]), which renders without
//! re-broadcasting.

use crate::segment::Segment;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A message on the wire between peers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WireMessage {
    /// One stroke segment, with `[x, y]` coordinate pairs in CSS pixels.
    Segment {
        start: [f64; 2],
        end: [f64; 2],
        color: String,
    },
}

impl WireMessage {
    /// Frame a segment for the wire.
    pub fn from_segment(segment: &Segment) -> Self {
        WireMessage::Segment {
            start: [segment.start.x, segment.start.y],
            end: [segment.end.x, segment.end.y],
            color: segment.color.clone(),
        }
    }

    /// Unframe a received message into a segment.
    pub fn into_segment(self) -> Segment {
        match self {
            WireMessage::Segment { start, end, color } => Segment::new(
                Point::new(start[0], start[1]),
                Point::new(end[0], end[1]),
                color,
            ),
        }
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
