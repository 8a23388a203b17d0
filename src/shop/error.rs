//! Shop monitor errors
//!
//! Capacity rejection is NOT an error (it is the [`Rejected`] outcome of
//! `arrive`); these errors cover invalid construction, out-of-range
//! identities, protocol misuse, and teardown.
//!
//! [`Rejected`]: crate::shop::ArrivalOutcome::Rejected

use thiserror::Error;

use crate::types::{BarberId, ConfigValidationError, CustomerId};

/// Errors produced by the shop monitor.
#[derive(Debug, Error)]
pub enum ShopError {
    /// The shop cannot be built from the given configuration
    #[error("invalid shop configuration: {0}")]
    InvalidConfiguration(#[from] ConfigValidationError),

    /// A barber index outside 1..=barber_count was used
    #[error("barber index {index} is outside 1..={barber_count}")]
    UnknownBarber {
        /// The offending index
        index: u32,
        /// Number of barbers in this shop
        barber_count: usize,
    },

    /// Customer identities must be positive integers
    #[error("customer identity must be a positive integer")]
    InvalidCustomer,

    /// `depart` was called by a customer who is not in that barber's chair
    #[error("{customer} is not seated in {barber}'s chair")]
    NotSeated {
        /// The customer attempting to depart
        customer: CustomerId,
        /// The chair the customer claimed to occupy
        barber: BarberId,
    },

    /// `depart` was called twice for the same service cycle
    #[error("{customer} has already paid {barber}")]
    AlreadyPaid {
        /// The customer attempting to pay again
        customer: CustomerId,
        /// The barber in question
        barber: BarberId,
    },

    /// `dismiss` was called with no customer in the chair
    #[error("{barber} has no customer in the chair")]
    ChairEmpty {
        /// The barber with the empty chair
        barber: BarberId,
    },

    /// `dismiss` was called twice for the same service cycle
    #[error("{barber} already finished this hair-cut and is awaiting payment")]
    ServiceAlreadyFinished {
        /// The barber in question
        barber: BarberId,
    },

    /// The shop has been closed; no further visits are accepted
    #[error("the shop is closed")]
    ShopClosed,
}
