//! Inkwire Core Library
//!
//! Platform-agnostic drawing, palette, and broadcast logic for the Inkwire
//! whiteboard widget.

pub mod board;
pub mod bus;
pub mod config;
pub mod input;
pub mod palette;
pub mod protocol;
pub mod segment;
pub mod surface;

pub use board::Whiteboard;
pub use bus::{BusError, DrawBus, ListenerId};
pub use config::BoardConfig;
pub use input::{PointerInput, PointerTracker, TrackerState};
pub use palette::{Palette, PALETTE};
pub use protocol::WireMessage;
pub use segment::{Segment, DEFAULT_COLOR};
pub use surface::{Surface, LINE_WIDTH};
