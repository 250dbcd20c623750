//! # FxCast Core (L1: Foundation)
//!
//! Foundation layer for the FxCast exchange-rate forecasting workspace.
//!
//! This crate provides:
//! - Validated simulation parameters ([`types::SimulationParameters`])
//! - Shared error types ([`types::SimulationError`])
//! - The statistics kernel used by the result reducers ([`math::stats`])
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         fxcast_portfolio (L3)           │
//! │  multi-asset batch + comparison table   │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │            fxcast_mc (L2)               │
//! │  RNG, GBM paths, simulator, reducers    │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │           fxcast_core (L1)              │
//! │  types/  - parameters, errors           │
//! │  math/   - percentile, summary stats    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! This layer has no dependency on the simulation engine; it only defines
//! the contracts the engine and application layers build on.

pub mod math;
pub mod types;

pub use types::{SimulationError, SimulationParameters};
