//! Per-barber chair state and rendezvous signals
//!
//! Each barber slot bundles the mutable chair state (inside the monitor
//! lock) with the three condition signals of one service cycle (outside it,
//! owned by the monitor and released with it).

use parking_lot::Condvar;

use crate::types::CustomerId;

/// Mutable per-barber chair state. Lives inside the monitor's mutex.
#[derive(Debug, Default)]
pub(crate) struct BarberChair {
    /// The customer being served, if any
    pub occupant: Option<CustomerId>,
    /// True while the hair-cut is in progress
    pub chair_occupied: bool,
    /// True once the customer has paid for the current cycle
    pub payment_received: bool,
    /// True once the barber has enrolled in the ready queue at least once
    pub enrolled: bool,
}

/// The three condition signals of one barber's service cycle.
///
/// Signalled and waited on only while holding the monitor lock, per classic
/// monitor semantics.
#[derive(Debug, Default)]
pub(crate) struct BarberRendezvous {
    /// Wakes the barber when a customer takes the chair
    pub wake_up: Condvar,
    /// Wakes the seated customer when the hair-cut is done
    pub service_done: Condvar,
    /// Wakes the barber when the customer has paid
    pub payment_done: Condvar,
}
