//! The draw primitive: local rendering plus broadcast on the event bus.

use crate::bus::{BusError, DrawBus, ListenerId};
use crate::input::{PointerInput, PointerTracker};
use crate::palette::Palette;
use crate::segment::{Segment, DEFAULT_COLOR};
use crate::surface::Surface;
use kurbo::Point;

/// One whiteboard instance: a surface, its draw bus, the pointer tracker,
/// and the palette state.
///
/// Locally-originated segments go through [`Whiteboard::apply_local`], which
/// renders and then announces the segment on the bus. Segments delivered by
/// a transport go through [`Whiteboard::apply_remote`], which renders
/// without announcing. That split is what keeps a relay from echoing its
/// own strokes forever.
pub struct Whiteboard<S> {
    surface: S,
    bus: DrawBus,
    tracker: PointerTracker,
    palette: Palette,
}

impl<S: Surface> Whiteboard<S> {
    /// Create a whiteboard over `surface` with the default palette.
    pub fn new(surface: S) -> Self {
        Self::with_palette(surface, Palette::new())
    }

    /// Create a whiteboard over `surface` with a custom palette.
    pub fn with_palette(surface: S, palette: Palette) -> Self {
        Self {
            surface,
            bus: DrawBus::new(),
            tracker: PointerTracker::new(),
            palette,
        }
    }

    /// Render a segment and announce it on the `draw` topic.
    ///
    /// A listener failure propagates after the segment has been rendered;
    /// the board never suppresses listener errors.
    pub fn apply_local(&mut self, start: Point, end: Point, color: &str) -> Result<(), BusError> {
        log::trace!("local segment {start:?} -> {end:?} ({color})");
        self.surface.draw_segment(start, end, color);
        self.bus.emit(&Segment::new(start, end, color))
    }

    /// Render a segment delivered by the transport without re-broadcasting.
    pub fn apply_remote(&mut self, start: Point, end: Point, color: &str) {
        log::trace!("remote segment {start:?} -> {end:?} ({color})");
        self.surface.draw_segment(start, end, color);
    }

    /// Flag-based entry point matching the transport-facing API: renders,
    /// and broadcasts unless `should_broadcast` is false. A missing color
    /// falls back to [`DEFAULT_COLOR`].
    pub fn draw(
        &mut self,
        start: Point,
        end: Point,
        color: Option<&str>,
        should_broadcast: bool,
    ) -> Result<(), BusError> {
        let color = color.unwrap_or(DEFAULT_COLOR);
        if should_broadcast {
            self.apply_local(start, end, color)
        } else {
            self.apply_remote(start, end, color);
            Ok(())
        }
    }

    /// Feed one raw pointer event through the tracker.
    ///
    /// When the event completes a segment it is applied locally with the
    /// currently selected color. Returns whether a segment was drawn.
    pub fn pointer_input(&mut self, input: PointerInput) -> Result<bool, BusError> {
        match self.tracker.update(input) {
            Some((start, end)) => {
                let color = self.palette.selected().to_owned();
                self.apply_local(start, end, &color)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Reconcile the surface backing store with its current CSS size.
    pub fn resize(&mut self) {
        self.surface.resize();
    }

    /// Subscribe to the `draw` topic.
    pub fn on_draw(
        &mut self,
        listener: impl FnMut(&Segment) -> Result<(), BusError> + 'static,
    ) -> ListenerId {
        self.bus.on(listener)
    }

    /// Remove a `draw` listener.
    pub fn off_draw(&mut self, id: ListenerId) -> bool {
        self.bus.off(id)
    }

    /// The palette state.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Mutable palette state (selection updates from the color selector).
    pub fn palette_mut(&mut self) -> &mut Palette {
        &mut self.palette
    }

    /// The underlying surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the underlying surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Surface double that records every rendered segment.
    #[derive(Default)]
    struct RecordingSurface {
        segments: Vec<Segment>,
        resizes: usize,
    }

    impl Surface for RecordingSurface {
        fn draw_segment(&mut self, start: Point, end: Point, color: &str) {
            self.segments.push(Segment::new(start, end, color));
        }

        fn resize(&mut self) {
            self.resizes += 1;
        }
    }

    fn board() -> Whiteboard<RecordingSurface> {
        Whiteboard::new(RecordingSurface::default())
    }

    fn collect_emitted(board: &mut Whiteboard<RecordingSurface>) -> Rc<RefCell<Vec<Segment>>> {
        let emitted = Rc::new(RefCell::new(Vec::new()));
        let sink = emitted.clone();
        board.on_draw(move |seg| {
            sink.borrow_mut().push(seg.clone());
            Ok(())
        });
        emitted
    }

    fn down(x: f64, y: f64) -> PointerInput {
        PointerInput::Down {
            position: Point::new(x, y),
        }
    }

    fn drag(x: f64, y: f64) -> PointerInput {
        PointerInput::Move {
            position: Point::new(x, y),
            buttons: 1,
        }
    }

    #[test]
    fn test_local_draw_emits_exactly_once() {
        let mut board = board();
        let emitted = collect_emitted(&mut board);

        board
            .draw(Point::new(1.0, 2.0), Point::new(3.0, 4.0), Some("red"), true)
            .unwrap();

        assert_eq!(board.surface().segments.len(), 1);
        let emitted = emitted.borrow();
        assert_eq!(emitted.len(), 1);
        assert_eq!(
            emitted[0],
            Segment::new(Point::new(1.0, 2.0), Point::new(3.0, 4.0), "red")
        );
    }

    #[test]
    fn test_remote_draw_renders_without_emitting() {
        let mut board = board();
        let emitted = collect_emitted(&mut board);

        board
            .draw(
                Point::new(1.0, 2.0),
                Point::new(3.0, 4.0),
                Some("red"),
                false,
            )
            .unwrap();

        assert_eq!(board.surface().segments.len(), 1);
        assert!(emitted.borrow().is_empty());
    }

    #[test]
    fn test_draw_defaults_to_black() {
        let mut board = board();
        let emitted = collect_emitted(&mut board);

        board
            .draw(Point::new(0.0, 0.0), Point::new(1.0, 1.0), None, true)
            .unwrap();

        assert_eq!(emitted.borrow()[0].color, DEFAULT_COLOR);
    }

    #[test]
    fn test_pointer_gesture_broadcast_parity() {
        let mut board = board();
        let emitted = collect_emitted(&mut board);

        board.pointer_input(down(10.0, 10.0)).unwrap();
        board.pointer_input(drag(20.0, 20.0)).unwrap();
        board.pointer_input(drag(30.0, 25.0)).unwrap();

        // One emitted event per rendered segment, identical payloads.
        assert_eq!(board.surface().segments.len(), 2);
        assert_eq!(*emitted.borrow(), board.surface().segments);
        assert_eq!(
            board.surface().segments[0],
            Segment::new(Point::new(10.0, 10.0), Point::new(20.0, 20.0), "black")
        );
        assert_eq!(
            board.surface().segments[1],
            Segment::new(Point::new(20.0, 20.0), Point::new(30.0, 25.0), "black")
        );
    }

    #[test]
    fn test_buttonless_move_between_drags_is_ignored() {
        let mut board = board();

        board.pointer_input(down(10.0, 10.0)).unwrap();
        assert!(board.pointer_input(drag(20.0, 20.0)).unwrap());
        let hovered = board
            .pointer_input(PointerInput::Move {
                position: Point::new(40.0, 40.0),
                buttons: 0,
            })
            .unwrap();
        assert!(!hovered);
        assert!(board.pointer_input(drag(30.0, 25.0)).unwrap());

        assert_eq!(
            board.surface().segments[1],
            Segment::new(Point::new(20.0, 20.0), Point::new(30.0, 25.0), "black")
        );
    }

    #[test]
    fn test_pointer_segment_uses_selected_color() {
        let mut board = board();
        let emitted = collect_emitted(&mut board);

        board.palette_mut().select_token("red").unwrap();
        board.pointer_input(down(0.0, 0.0)).unwrap();
        board.pointer_input(drag(5.0, 5.0)).unwrap();

        assert_eq!(emitted.borrow()[0].color, "red");
    }

    #[test]
    fn test_pointer_segment_defaults_to_first_palette_entry() {
        let mut board = board();
        let emitted = collect_emitted(&mut board);

        board.pointer_input(down(0.0, 0.0)).unwrap();
        board.pointer_input(drag(5.0, 5.0)).unwrap();

        assert_eq!(emitted.borrow()[0].color, "black");
    }

    #[test]
    fn test_listener_error_propagates_after_render() {
        let mut board = board();
        board.on_draw(|_| Err(BusError::Listener("transport gone".into())));

        let err = board
            .draw(Point::new(0.0, 0.0), Point::new(1.0, 1.0), None, true)
            .unwrap_err();

        assert!(matches!(err, BusError::Listener(_)));
        // The segment was rendered before the listener ran.
        assert_eq!(board.surface().segments.len(), 1);
    }

    #[test]
    fn test_off_draw_stops_delivery() {
        let mut board = board();
        let emitted = Rc::new(RefCell::new(0));
        let sink = emitted.clone();
        let id = board.on_draw(move |_| {
            *sink.borrow_mut() += 1;
            Ok(())
        });

        board
            .draw(Point::new(0.0, 0.0), Point::new(1.0, 1.0), None, true)
            .unwrap();
        assert!(board.off_draw(id));
        board
            .draw(Point::new(0.0, 0.0), Point::new(1.0, 1.0), None, true)
            .unwrap();

        assert_eq!(*emitted.borrow(), 1);
    }

    #[test]
    fn test_resize_forwards_to_surface() {
        let mut board = board();
        board.resize();
        board.resize();
        assert_eq!(board.surface().resizes, 2);
    }
}
