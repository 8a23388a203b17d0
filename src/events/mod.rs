//! Shop transition events and sinks
//!
//! Each transition the monitor makes (a customer taking a chair, a barber
//! dozing off, a payment changing hands) is reported as a [`ShopEvent`]
//! through an [`EventSink`]. The default sink logs via `tracing`; tests use
//! [`MemorySink`] to replay the exact serialization order of a run.

pub mod shop_event;
pub mod sink;

pub use shop_event::{Actor, ShopEvent, Transition};
pub use sink::{EventSink, MemorySink, NullSink, TracingSink};
