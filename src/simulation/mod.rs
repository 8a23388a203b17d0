//! Simulation orchestration and control
//!
//! This module contains everything around the shop monitor that makes a run
//! happen:
//!
//! - **ShopSimulation**: spawns and joins the customer/barber threads
//! - **SimulationReport**: final tally with derived percentages
//! - **SimulationError**: typed errors for the driver
//! - **LoggingConfig**: tracing subscriber setup
//!
//! # Usage Example
//!
//! ```rust
//! use barbershop_simulator::simulation::ShopSimulation;
//! use barbershop_simulator::types::SimulationConfig;
//!
//! let config = SimulationConfig {
//!     barbers: 2,
//!     customers: 5,
//!     min_service_ms: 1,
//!     max_service_ms: 2,
//!     max_arrival_gap_ms: 1,
//!     ..Default::default()
//! };
//!
//! let report = ShopSimulation::new(config)?.run()?;
//! assert!(report.is_conserved());
//! # Ok::<(), barbershop_simulator::simulation::SimulationError>(())
//! ```

pub mod error;
pub mod logging;
pub mod orchestrator;
pub mod statistics;

pub use error::{SimulationError, SimulationResult};
pub use logging::LoggingConfig;
pub use orchestrator::ShopSimulation;
pub use statistics::SimulationReport;
