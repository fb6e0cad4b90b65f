//! Single-topic event bus for `draw` announcements.

use crate::segment::Segment;
use thiserror::Error;

/// Error raised by a bus listener and propagated to the emitter.
#[derive(Debug, Error)]
pub enum BusError {
    /// A listener failed while handling a `draw` event. Dispatch stops at
    /// the failing listener; later listeners do not run.
    #[error("draw listener failed: {0}")]
    Listener(String),
}

/// Opaque subscription handle returned by [`DrawBus::on`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Raw numeric form, for crossing the JS boundary.
    pub fn into_raw(self) -> u64 {
        self.0
    }

    /// Rebuild a handle from its raw form. An id that was never issued (or
    /// was already removed) simply fails to match in [`DrawBus::off`].
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

type Listener = Box<dyn FnMut(&Segment) -> Result<(), BusError>>;

/// Synchronous single-topic emitter.
///
/// Listeners run in registration order on the caller's stack; there is no
/// buffering or back-pressure. A listener must not re-enter the local draw
/// path with broadcasting enabled on the same inputs; replayed segments go
/// through [`crate::board::Whiteboard::apply_remote`] instead.
#[derive(Default)]
pub struct DrawBus {
    next_id: u64,
    listeners: Vec<(ListenerId, Listener)>,
}

impl DrawBus {
    /// Create an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to the `draw` topic. Returns the handle used to
    /// unsubscribe.
    pub fn on(
        &mut self,
        listener: impl FnMut(&Segment) -> Result<(), BusError> + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if the handle was not subscribed.
    pub fn off(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Announce a segment to every listener, in registration order.
    ///
    /// The first listener error aborts the dispatch and is returned to the
    /// caller; the bus itself never suppresses listener failures.
    pub fn emit(&mut self, segment: &Segment) -> Result<(), BusError> {
        for (_, listener) in &mut self.listeners {
            listener(segment)?;
        }
        Ok(())
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listeners are registered.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
