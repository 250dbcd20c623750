//! Error types for portfolio orchestration.

use fxcast_core::SimulationError;
use thiserror::Error;

/// Errors from multi-asset orchestration.
///
/// Per-asset failures surface as the transparent
/// [`SimulationError`](fxcast_core::SimulationError) they originated as.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortfolioError {
    /// A batch operation was requested with no assets registered.
    #[error("portfolio is empty: add at least one currency before simulating")]
    EmptyPortfolio,

    /// An underlying single-asset simulation failed.
    #[error(transparent)]
    Simulation(#[from] SimulationError),
}

impl PortfolioError {
    /// Returns `true` if this is an `EmptyPortfolio` error.
    pub fn is_empty_portfolio(&self) -> bool {
        matches!(self, Self::EmptyPortfolio)
    }
}
