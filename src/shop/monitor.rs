//! The shop monitor
//!
//! All coordination between customer and barber threads goes through one
//! [`Shop`]: a single mutex over the waiting area, the idle-barber queue and
//! the per-barber chair state, plus the condition signals of each service
//! cycle. Four operations are exposed: [`arrive`], [`depart`], [`summon`]
//! and [`dismiss`]. Threads never talk to each other directly.
//!
//! Every wait releases the lock while parked and reacquires it atomically on
//! wake-up; every wait sits in a re-checked loop, so spurious wake-ups and
//! broadcast storms are harmless.
//!
//! [`arrive`]: Shop::arrive
//! [`depart`]: Shop::depart
//! [`summon`]: Shop::summon
//! [`dismiss`]: Shop::dismiss

use std::fmt;
use std::sync::Arc;

use parking_lot::{Condvar, Mutex, MutexGuard};

use crate::events::{Actor, EventSink, ShopEvent, TracingSink, Transition};
use crate::shop::error::ShopError;
use crate::shop::ready_queue::BarberReadyQueue;
use crate::shop::rendezvous::{BarberChair, BarberRendezvous};
use crate::shop::waiting_area::WaitingArea;
use crate::types::{BarberId, CustomerId, ShopConfig};

/// Result of one customer's [`Shop::arrive`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrivalOutcome {
    /// The customer is in the given barber's service chair.
    Seated(BarberId),
    /// The shop was at capacity; the visit is over and was counted as
    /// dropped. This is an expected outcome, not an error, and carries no
    /// retry.
    Rejected,
}

/// Result of one barber's [`Shop::summon`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummonOutcome {
    /// A customer is in the chair; cut their hair, then call
    /// [`Shop::dismiss`].
    BeganService(CustomerId),
    /// The shop has been closed; the barber's loop should end.
    ShopClosed,
}

/// State guarded by the monitor's single lock.
struct ShopState {
    waiting: WaitingArea,
    ready: BarberReadyQueue,
    chairs: Vec<BarberChair>,
    dropped: u64,
    closed: bool,
}

/// The barbershop monitor.
///
/// One instance is shared (via `Arc`) by every customer and barber thread;
/// it is never reached through globals. Barber indices are 1-based
/// (`1..=barber_count`); slot 0 is never used.
pub struct Shop {
    config: ShopConfig,
    state: Mutex<ShopState>,
    /// Shop-wide signal: a waiting chair or a barber became available.
    /// Broadcast so every parked customer re-checks its own queue position.
    chair_freed: Condvar,
    /// Per-barber rendezvous signals, index = barber index - 1.
    rendezvous: Vec<BarberRendezvous>,
    sink: Arc<dyn EventSink>,
}

impl Shop {
    /// Open a shop that reports transitions through `tracing`.
    pub fn new(config: ShopConfig) -> Result<Self, ShopError> {
        Self::with_sink(config, Arc::new(TracingSink))
    }

    /// Open a shop with a custom event sink.
    pub fn with_sink(config: ShopConfig, sink: Arc<dyn EventSink>) -> Result<Self, ShopError> {
        config.validate()?;

        let chairs = (0..config.barber_count).map(|_| BarberChair::default()).collect();
        let rendezvous = (0..config.barber_count).map(|_| BarberRendezvous::default()).collect();

        Ok(Self {
            state: Mutex::new(ShopState {
                waiting: WaitingArea::new(config.chair_capacity),
                ready: BarberReadyQueue::new(),
                chairs,
                dropped: 0,
                closed: false,
            }),
            chair_freed: Condvar::new(),
            rendezvous,
            sink,
            config,
        })
    }

    /// The configuration this shop was built with.
    pub fn config(&self) -> &ShopConfig {
        &self.config
    }

    /// Number of visits rejected for lack of capacity so far.
    ///
    /// Only meaningful as a final tally once all customer threads have
    /// finished; mid-run it is a racy snapshot.
    pub fn dropped_count(&self) -> u64 {
        self.state.lock().dropped
    }

    /// Number of customers currently in the waiting area (racy snapshot).
    pub fn waiting_count(&self) -> usize {
        self.state.lock().waiting.len()
    }

    /// True once [`close`](Shop::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// One customer visit: take a waiting chair if needed, then move to the
    /// chair of the earliest-queued idle barber.
    ///
    /// Returns [`ArrivalOutcome::Rejected`] without blocking when the shop is
    /// at capacity. With at least one waiting chair, "at capacity" means the
    /// waiting area is full; with zero chairs the shop is a pure rendezvous
    /// and a visit is rejected only when every barber already has a customer.
    ///
    /// Blocks until a barber is available; waiting customers are seated in
    /// strict arrival order, enforced by queue position rather than wake-up
    /// order.
    pub fn arrive(&self, customer: CustomerId) -> Result<ArrivalOutcome, ShopError> {
        if customer.get() == 0 {
            return Err(ShopError::InvalidCustomer);
        }

        let mut state = self.state.lock();
        if state.closed {
            return Err(ShopError::ShopClosed);
        }

        let at_capacity = if self.config.chair_capacity == 0 {
            state.chairs.iter().all(|chair| chair.occupant.is_some())
        } else {
            state.waiting.is_full()
        };
        if at_capacity {
            state.dropped += 1;
            self.emit(Actor::Customer(customer), Transition::TurnedAway);
            return Ok(ArrivalOutcome::Rejected);
        }

        // With no waiting chairs the customer stands at the door and only
        // needs an idle barber; otherwise a seat is taken unless a barber is
        // idle and nobody is ahead of us.
        let waits_in_chair = self.config.chair_capacity > 0
            && (state.ready.is_empty() || !state.waiting.is_empty());
        if waits_in_chair {
            state.waiting.take_seat(customer);
            let seats_free = state.waiting.seats_free();
            self.emit(Actor::Customer(customer), Transition::TookWaitingSeat { seats_free });
        }

        let barber = loop {
            let my_turn = !waits_in_chair || state.waiting.front() == Some(customer);
            if my_turn {
                if let Some(barber) = state.ready.next_idle() {
                    break barber;
                }
            }
            self.chair_freed.wait(&mut state);
            if state.closed {
                if waits_in_chair {
                    state.waiting.abandon(customer);
                }
                return Err(ShopError::ShopClosed);
            }
        };

        if waits_in_chair {
            let stood_up = state.waiting.leave_front();
            debug_assert_eq!(stood_up, Some(customer));
            // A waiting chair just freed up; everyone re-checks.
            self.chair_freed.notify_all();
        }

        self.seat(&mut state, customer, barber);
        let seats_free = state.waiting.seats_free();
        self.emit(Actor::Customer(customer), Transition::Seated { barber, seats_free });

        Ok(ArrivalOutcome::Seated(barber))
    }

    /// Put `customer` in `barber`'s chair and start the service cycle.
    fn seat(&self, state: &mut MutexGuard<'_, ShopState>, customer: CustomerId, barber: BarberId) {
        let idx = (barber.get() - 1) as usize;
        // Wake the barber in case they dozed off waiting.
        self.rendezvous[idx].wake_up.notify_one();
        let chair = &mut state.chairs[idx];
        chair.occupant = Some(customer);
        chair.chair_occupied = true;
        chair.payment_received = false;
    }

    /// Wait for the barber to finish, then pay and leave.
    ///
    /// Returns only after this specific barber has marked the hair-cut
    /// complete. Calling this without being seated in that barber's chair is
    /// protocol misuse and fails without touching shared state.
    pub fn depart(&self, customer: CustomerId, barber: BarberId) -> Result<(), ShopError> {
        let idx = self.chair_index(barber)?;
        let mut state = self.state.lock();

        if state.chairs[idx].occupant != Some(customer) {
            return Err(ShopError::NotSeated { customer, barber });
        }
        if state.chairs[idx].payment_received {
            return Err(ShopError::AlreadyPaid { customer, barber });
        }

        self.emit(Actor::Customer(customer), Transition::AwaitingService { barber });
        while state.chairs[idx].chair_occupied {
            self.rendezvous[idx].service_done.wait(&mut state);
        }

        state.chairs[idx].payment_received = true;
        self.rendezvous[idx].payment_done.notify_one();
        self.emit(Actor::Customer(customer), Transition::Paid { barber });
        Ok(())
    }

    /// One barber requesting their next customer.
    ///
    /// Enrolls the barber in the idle queue on first call, then blocks until
    /// a customer is in the chair or the shop closes.
    pub fn summon(&self, barber: BarberId) -> Result<SummonOutcome, ShopError> {
        let idx = self.chair_index(barber)?;
        let mut state = self.state.lock();

        if !state.chairs[idx].enrolled {
            state.chairs[idx].enrolled = true;
            state.ready.enroll(barber);
            // Customers who arrived before any barber was ready re-check now.
            self.chair_freed.notify_all();
        }

        if state.chairs[idx].occupant.is_none() && state.waiting.is_empty() && !state.closed {
            self.emit(Actor::Barber(barber), Transition::Dozing);
        }

        let customer = loop {
            if let Some(customer) = state.chairs[idx].occupant {
                break customer;
            }
            if state.closed {
                return Ok(SummonOutcome::ShopClosed);
            }
            self.rendezvous[idx].wake_up.wait(&mut state);
        };

        self.emit(Actor::Barber(barber), Transition::BeganService { customer });
        Ok(SummonOutcome::BeganService(customer))
    }

    /// End the current hair-cut: free the service chair, wait for payment,
    /// then re-join the idle queue.
    ///
    /// The cut itself is timed by the caller, outside the monitor; this only
    /// performs the completion handshake. Calling it with nobody in the
    /// chair is protocol misuse.
    pub fn dismiss(&self, barber: BarberId) -> Result<(), ShopError> {
        let idx = self.chair_index(barber)?;
        let mut state = self.state.lock();

        let customer = match state.chairs[idx].occupant {
            Some(customer) => customer,
            None => return Err(ShopError::ChairEmpty { barber }),
        };
        if !state.chairs[idx].chair_occupied {
            return Err(ShopError::ServiceAlreadyFinished { barber });
        }

        state.chairs[idx].chair_occupied = false;
        state.chairs[idx].payment_received = false;
        self.rendezvous[idx].service_done.notify_one();
        self.emit(Actor::Barber(barber), Transition::FinishedService { customer });

        while !state.chairs[idx].payment_received {
            self.rendezvous[idx].payment_done.wait(&mut state);
        }

        state.chairs[idx].occupant = None;
        state.chairs[idx].enrolled = true;
        state.ready.enroll(barber);
        self.emit(Actor::Barber(barber), Transition::ReadyForNext);
        // A barber is idle again; parked customers re-check their position.
        self.chair_freed.notify_all();
        Ok(())
    }

    /// Close the shop cooperatively.
    ///
    /// Wakes every sleeping barber (their `summon` returns
    /// [`SummonOutcome::ShopClosed`]) and every customer still parked in
    /// `arrive` (which returns [`ShopError::ShopClosed`]). In-flight
    /// service/payment handshakes complete normally. Idempotent.
    pub fn close(&self) {
        let mut state = self.state.lock();
        if state.closed {
            return;
        }
        state.closed = true;
        for rendezvous in &self.rendezvous {
            rendezvous.wake_up.notify_all();
        }
        self.chair_freed.notify_all();
    }

    fn chair_index(&self, barber: BarberId) -> Result<usize, ShopError> {
        let raw = barber.get() as usize;
        if raw == 0 || raw > self.config.barber_count {
            return Err(ShopError::UnknownBarber {
                index: barber.get(),
                barber_count: self.config.barber_count,
            });
        }
        Ok(raw - 1)
    }

    fn emit(&self, actor: Actor, transition: Transition) {
        self.sink.record(ShopEvent::now(actor, transition));
    }
}

impl fmt::Debug for Shop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shop").field("config", &self.config).finish_non_exhaustive()
    }
}
