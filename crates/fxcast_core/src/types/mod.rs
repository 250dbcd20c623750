//! Core types: simulation parameters and shared error definitions.

mod error;
mod params;

pub use error::SimulationError;
pub use params::{SimulationParameters, DEFAULT_TRADING_DAYS_PER_YEAR};
