//! Pointer state machine converting raw pointer events into stroke segments.

use kurbo::Point;

/// Raw pointer input fed by the host event loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    /// Pointer-down anywhere in the window.
    Down { position: Point },
    /// Pointer movement carrying the DOM `buttons` bitmask.
    Move { position: Point, buttons: u16 },
}

/// Gesture state: `Idle` until the first pointer-down, `Tracking` afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackerState {
    #[default]
    Idle,
    Tracking,
}

/// Tracks pointer positions across events and yields one segment per
/// button-held movement.
///
/// No segment is drawn on the down edge; the down position becomes the start
/// of the first segment once the pointer moves with a button held. The
/// button mask is authoritative for whether a move draws: there is no
/// explicit pointer-up transition, and a move with `buttons == 0` is ignored
/// without disturbing the continuity of the gesture.
#[derive(Debug, Default)]
pub struct PointerTracker {
    state: TrackerState,
    last: Option<Point>,
    current: Option<Point>,
}

impl PointerTracker {
    /// Create a tracker in the `Idle` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current gesture state.
    pub fn state(&self) -> TrackerState {
        self.state
    }

    /// Feed one pointer event.
    ///
    /// Returns the `(start, end)` endpoints of the segment this event
    /// completes, if any. A pointer-down while already tracking refreshes
    /// `current` and discards the prior continuity, so a new gesture begins.
    pub fn update(&mut self, input: PointerInput) -> Option<(Point, Point)> {
        match input {
            PointerInput::Down { position } => {
                self.last = None;
                self.current = Some(position);
                self.state = TrackerState::Tracking;
                None
            }
            PointerInput::Move { position, buttons } => {
                if buttons == 0 {
                    return None;
                }
                self.last = self.current;
                self.current = Some(position);
                match (self.last, self.current) {
                    (Some(start), Some(end)) => Some((start, end)),
                    _ => None,
                }
            }
        }
    }
}
