//! Barbershop Simulator
//!
//! A sleeping-barbers simulation: many customer threads against a few barber
//! threads, coordinated by one monitor guarding a bounded waiting area, the
//! service chairs, and the payment handshake.
//!
//! # Overview
//!
//! The heart of the crate is [`Shop`], a monitor exposing four blocking
//! operations. Customer threads call [`Shop::arrive`] (take a waiting chair,
//! or be turned away at capacity) and [`Shop::depart`] (wait for the cut to
//! finish, then pay). Barber threads cycle [`Shop::summon`] (sleep until a
//! customer is in the chair) and [`Shop::dismiss`] (free the chair, wait for
//! payment, call in the next customer). All state lives behind one lock;
//! every wait is a re-checked loop on a condition signal, so lost and
//! spurious wake-ups cannot corrupt a run.
//!
//! Around the monitor, [`ShopSimulation`] owns the thread-per-agent driver
//! and produces a [`SimulationReport`]; every monitor transition is reported
//! through an [`EventSink`] for logging or inspection.
//!
//! ## Quick Start
//!
//! ```rust
//! use barbershop_simulator::{ArrivalOutcome, BarberId, CustomerId, Shop, ShopConfig, SummonOutcome};
//! use std::sync::Arc;
//! use std::thread;
//!
//! let shop = Arc::new(Shop::new(ShopConfig::default())?);
//!
//! let barber_shop = Arc::clone(&shop);
//! let barber = thread::spawn(move || {
//!     let me = BarberId::new(1);
//!     while let Ok(SummonOutcome::BeganService(_)) = barber_shop.summon(me) {
//!         barber_shop.dismiss(me).expect("a customer is in the chair");
//!     }
//! });
//!
//! let visitor = CustomerId::new(1);
//! match shop.arrive(visitor)? {
//!     ArrivalOutcome::Seated(assigned) => shop.depart(visitor, assigned)?,
//!     ArrivalOutcome::Rejected => unreachable!("an empty shop never rejects"),
//! }
//!
//! shop.close();
//! barber.join().unwrap();
//! # Ok::<(), barbershop_simulator::ShopError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`shop`]: the monitor, waiting area, idle-barber queue and errors
//! - [`events`]: structured transition events and sinks
//! - [`simulation`]: thread-per-agent driver, report, logging setup
//! - [`types`]: identities and configuration
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod events;
pub mod shop;
pub mod simulation;
pub mod types;

// Core types and identifiers
pub use types::{
    BarberId,
    CliArgs,
    ConfigError,
    ConfigValidationError,
    CustomerId,
    ShopConfig,
    SimulationConfig,
};

// The shop monitor
pub use shop::{ArrivalOutcome, BarberReadyQueue, Shop, ShopError, SummonOutcome, WaitingArea};

// Events and sinks
pub use events::{Actor, EventSink, MemorySink, NullSink, ShopEvent, TracingSink, Transition};

// Simulation driver
pub use simulation::{
    LoggingConfig, ShopSimulation, SimulationError, SimulationReport, SimulationResult,
};
