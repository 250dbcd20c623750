//! Error types for structured error handling.
//!
//! This module provides [`SimulationError`], the error type shared by the
//! statistics kernel and the Monte Carlo engine. Errors are raised at the
//! first operation that detects a violated precondition; the numeric
//! layers never substitute defaults, retry, or log.

use thiserror::Error;

/// Errors from simulation configuration and result queries.
///
/// # Variants
/// - `InvalidArgument`: a caller-supplied value violates its precondition
/// - `NotSimulated`: a result query was issued before a successful
///   `simulate()` call
///
/// # Examples
/// ```
/// use fxcast_core::SimulationError;
///
/// let err = SimulationError::invalid("days", "must be at least 1, got 0");
/// assert_eq!(
///     format!("{}", err),
///     "Invalid argument 'days': must be at least 1, got 0"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// A caller-supplied value violates its precondition.
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        name: &'static str,
        /// Description of the violated precondition.
        reason: String,
    },

    /// A prediction, risk, or probability query was issued before a
    /// successful `simulate()` call.
    #[error("no simulation results available: call simulate() first")]
    NotSimulated,
}

impl SimulationError {
    /// Creates an `InvalidArgument` error.
    ///
    /// # Arguments
    /// * `name` - Name of the offending parameter
    /// * `reason` - Description of the violated precondition
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is an `InvalidArgument` error.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Returns `true` if this is a `NotSimulated` error.
    pub fn is_not_simulated(&self) -> bool {
        matches!(self, Self::NotSimulated)
    }
}
