//! Error types and handling
//!
//! This module contains error types for the simulation driver. Blocking in
//! the shop is intentional coordination, never a failure, so there is no
//! retry machinery: the only designed failure path of a visit is the
//! capacity rejection, which is an outcome, not an error.

use thiserror::Error;

use crate::shop::ShopError;
use crate::types::ConfigValidationError;

/// Errors that can occur while driving a simulation run
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    Configuration(#[from] ConfigValidationError),

    /// The shop monitor refused an operation
    #[error("Shop error: {0}")]
    Shop(#[from] ShopError),

    /// An agent thread could not be spawned or crashed
    #[error("{role} thread failure: {details}")]
    AgentFailure {
        /// "customer" or "barber"
        role: &'static str,
        /// What went wrong
        details: String,
    },

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SimulationError {
    /// Create an agent failure error
    pub fn agent_failure(role: &'static str, details: impl Into<String>) -> Self {
        Self::AgentFailure { role, details: details.into() }
    }
}

/// Result type for simulation operations
pub type SimulationResult<T> = Result<T, SimulationError>;
