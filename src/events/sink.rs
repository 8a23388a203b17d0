//! Event sinks
//!
//! The monitor reports every transition to an [`EventSink`]. The sink is the
//! only observability surface of the core: what gets logged, buffered, or
//! dropped is entirely up to the sink installed at construction.

use parking_lot::Mutex;
use tracing::info;

use super::shop_event::ShopEvent;

/// Receiver for shop transitions.
///
/// `record` is called while the monitor lock is held, so implementations
/// must be quick and must never call back into the shop.
pub trait EventSink: Send + Sync {
    /// Record one transition.
    fn record(&self, event: ShopEvent);
}

/// Sink that forwards transitions to `tracing` as structured log events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&self, event: ShopEvent) {
        info!(
            actor_kind = event.actor.kind(),
            actor_id = event.actor.id(),
            event = event.transition.name(),
            "{} {}",
            event.actor,
            event.transition,
        );
    }
}

/// Sink that retains every transition in arrival order.
///
/// Used by tests and reports to replay what the shop did. Because `record`
/// runs under the monitor lock, the stored order is the true serialization
/// order of the transitions.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<ShopEvent>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded events, in order.
    pub fn events(&self) -> Vec<ShopEvent> {
        self.events.lock().clone()
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// True if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl EventSink for MemorySink {
    fn record(&self, event: ShopEvent) {
        self.events.lock().push(event);
    }
}

/// Sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&self, _event: ShopEvent) {}
}
