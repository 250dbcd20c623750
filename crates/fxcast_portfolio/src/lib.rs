//! # FxCast Portfolio (L3: Application)
//!
//! Multi-asset orchestration over the Monte Carlo engine: an
//! insertion-ordered collection of per-currency simulators, deterministic
//! sub-seed derivation for independent-but-reproducible random streams,
//! parallel batch simulation, and an ordered comparison table.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         fxcast_portfolio (L3)           │
//! ├─────────────────────────────────────────┤
//! │  portfolio.rs - MultiCurrencyPortfolio, │
//! │                 ComparisonRow           │
//! │  seeds.rs     - SplitMix64 sub-seeds    │
//! │  error.rs     - PortfolioError          │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │            fxcast_mc (L2)               │
//! │  GBM path simulation + reducers         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Batch reproducibility
//!
//! `simulate_all` derives one sub-seed per asset from the base seed and
//! the asset's insertion position, single-threaded and before any worker
//! starts. The per-asset simulations then run on the rayon pool; because
//! every stream is fixed up front, the batch result is independent of
//! scheduling.
//!
//! ## Example
//!
//! ```
//! use fxcast_portfolio::MultiCurrencyPortfolio;
//!
//! let mut portfolio = MultiCurrencyPortfolio::new();
//! portfolio.add_currency("USD/RUB", 75.0, 0.05, 0.15).unwrap();
//! portfolio.add_currency("EUR/USD", 1.08, 0.02, 0.10).unwrap();
//!
//! portfolio.simulate_all(30, 2_000, Some(42)).unwrap();
//!
//! let comparison = portfolio.get_comparison();
//! assert_eq!(comparison.len(), 2);
//! assert_eq!(comparison[0].id, "USD/RUB");
//! assert_eq!(comparison[1].id, "EUR/USD");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod error;
mod portfolio;
pub mod seeds;

pub use error::PortfolioError;
pub use portfolio::{
    ComparisonRow, MultiCurrencyPortfolio, DEFAULT_COMPARISON_CONFIDENCE,
    DEFAULT_COMPARISON_INVESTMENT,
};
