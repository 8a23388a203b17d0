//! Shop transition events
//!
//! Every state transition inside the monitor is reported as a structured
//! event: who did it, what happened, and any per-transition context.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{BarberId, CustomerId};

/// The agent a transition belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Actor {
    /// A customer visit
    Customer(CustomerId),
    /// A barber's service loop
    Barber(BarberId),
}

impl Actor {
    /// Actor kind as a static label, for structured log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Actor::Customer(_) => "customer",
            Actor::Barber(_) => "barber",
        }
    }

    /// Raw numeric identity of the actor.
    pub fn id(&self) -> u32 {
        match self {
            Actor::Customer(c) => c.get(),
            Actor::Barber(b) => b.get(),
        }
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Actor::Customer(c) => c.fmt(f),
            Actor::Barber(b) => b.fmt(f),
        }
    }
}

/// One state transition inside the shop, with its context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// The customer found the shop at capacity and left unserved.
    TurnedAway,
    /// The customer sat down in the waiting area.
    TookWaitingSeat {
        /// Waiting seats still free after sitting down
        seats_free: usize,
    },
    /// The customer moved into a barber's service chair.
    Seated {
        /// The barber whose chair was taken
        barber: BarberId,
        /// Waiting seats free at that moment
        seats_free: usize,
    },
    /// The customer is waiting for the hair-cut to finish.
    AwaitingService {
        /// The barber doing the cut
        barber: BarberId,
    },
    /// The customer paid and said good-bye.
    Paid {
        /// The barber who was paid
        barber: BarberId,
    },
    /// The barber fell asleep in their chair; the shop is empty.
    Dozing,
    /// The barber started cutting.
    BeganService {
        /// The customer in the chair
        customer: CustomerId,
    },
    /// The barber finished cutting and is waiting for payment.
    FinishedService {
        /// The customer who was served
        customer: CustomerId,
    },
    /// The barber pocketed the payment and re-joined the idle queue.
    ReadyForNext,
}

impl Transition {
    /// Transition name as a static label, for structured log fields.
    pub fn name(&self) -> &'static str {
        match self {
            Transition::TurnedAway => "turned_away",
            Transition::TookWaitingSeat { .. } => "took_waiting_seat",
            Transition::Seated { .. } => "seated",
            Transition::AwaitingService { .. } => "awaiting_service",
            Transition::Paid { .. } => "paid",
            Transition::Dozing => "dozing",
            Transition::BeganService { .. } => "began_service",
            Transition::FinishedService { .. } => "finished_service",
            Transition::ReadyForNext => "ready_for_next",
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::TurnedAway => {
                write!(f, "leaves the shop because no waiting chair is free")
            }
            Transition::TookWaitingSeat { seats_free } => {
                write!(f, "takes a waiting chair ({seats_free} seats still free)")
            }
            Transition::Seated { barber, seats_free } => {
                write!(f, "moves to {barber}'s chair ({seats_free} waiting seats free)")
            }
            Transition::AwaitingService { barber } => {
                write!(f, "waits for {barber} to finish the hair-cut")
            }
            Transition::Paid { barber } => write!(f, "pays and says good-bye to {barber}"),
            Transition::Dozing => write!(f, "dozes off; no customers around"),
            Transition::BeganService { customer } => {
                write!(f, "starts a hair-cut for {customer}")
            }
            Transition::FinishedService { customer } => {
                write!(f, "finishes the hair-cut for {customer}")
            }
            Transition::ReadyForNext => write!(f, "calls in the next customer"),
        }
    }
}

/// A timestamped, attributed shop transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopEvent {
    /// When the transition happened
    pub timestamp: DateTime<Utc>,
    /// Who the transition belongs to
    pub actor: Actor,
    /// What happened
    pub transition: Transition,
}

impl ShopEvent {
    /// Create an event stamped with the current time.
    pub fn now(actor: Actor, transition: Transition) -> Self {
        Self { timestamp: Utc::now(), actor, transition }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_labels() {
        let actor = Actor::Customer(CustomerId::new(4));
        assert_eq!(actor.kind(), "customer");
        assert_eq!(actor.id(), 4);
        assert_eq!(actor.to_string(), "customer[4]");

        let actor = Actor::Barber(BarberId::new(2));
        assert_eq!(actor.kind(), "barber");
        assert_eq!(actor.to_string(), "barber[2]");
    }

    #[test]
    fn test_transition_display() {
        let t = Transition::BeganService { customer: CustomerId::new(9) };
        assert_eq!(t.to_string(), "starts a hair-cut for customer[9]");
        assert_eq!(t.name(), "began_service");

        let t = Transition::TookWaitingSeat { seats_free: 2 };
        assert_eq!(t.to_string(), "takes a waiting chair (2 seats still free)");
    }

    #[test]
    fn test_event_serialization() {
        let event = ShopEvent::now(
            Actor::Barber(BarberId::new(1)),
            Transition::FinishedService { customer: CustomerId::new(3) },
        );

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("FinishedService"));

        let back: ShopEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back.actor, event.actor);
        assert_eq!(back.transition, event.transition);
    }
}
