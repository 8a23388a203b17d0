//! Core types and identifiers for the barbershop simulator
//!
//! This module contains the fundamental types shared across the system:
//!
//! - **Identifiers**: integer identities for customers and barbers
//! - **Configuration**: shop and simulation configuration with validation
//!   and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use barbershop_simulator::types::*;
//!
//! let customer = CustomerId::new(1);
//! let barber = BarberId::new(1);
//!
//! let shop = ShopConfig::new(2, 4).unwrap();
//! assert_eq!(shop.barber_count, 2);
//!
//! let sim = SimulationConfig::default();
//! assert!(sim.validate().is_ok());
//! ```

pub mod config;
pub mod identifiers;

pub use config::{CliArgs, ConfigError, ConfigFile, ConfigValidationError, ShopConfig, SimulationConfig};
pub use identifiers::{BarberId, CustomerId};
