//! # FxCast Monte Carlo Engine (L2: Engine)
//!
//! Monte Carlo simulation of exchange rates under Geometric Brownian
//! Motion, with prediction and tail-risk statistics derived from the
//! simulated terminal distribution.
//!
//! # Architecture
//!
//! ```text
//! CurrencySimulator
//! ├── SimulationParameters  (validated model inputs, from fxcast_core)
//! ├── ForecastRng           (seeded random number generation)
//! └── Orchestration
//!     ├── generate_paths()        (GBM path matrix)
//!     ├── prediction_summary()    (mean/median/std + confidence interval)
//!     ├── value_at_risk()         (VaR / CVaR over terminal returns)
//!     └── probability_above()     (empirical survival probability)
//! ```
//!
//! # Reproducibility
//!
//! Every `simulate()` call constructs a fresh [`rng::ForecastRng`] from
//! the caller's seed. There is no ambient or shared generator state, so a
//! simulator's output depends only on its own arguments, never on call
//! order elsewhere in the process. Passing no seed draws from the entropy
//! source instead; that run is deliberately non-reproducible.
//!
//! # Examples
//!
//! ```rust
//! use fxcast_core::SimulationParameters;
//! use fxcast_mc::CurrencySimulator;
//!
//! let params = SimulationParameters::new(75.0, 0.05, 0.15).unwrap();
//! let mut simulator = CurrencySimulator::new(params);
//!
//! let paths = simulator.simulate(30, 5_000, Some(42)).unwrap();
//! assert_eq!(paths.n_simulations(), 5_000);
//! assert_eq!(paths.n_steps(), 30);
//!
//! let prediction = simulator.prediction(0.95).unwrap();
//! assert!(prediction.confidence_interval.0 < prediction.mean);
//! assert!(prediction.mean < prediction.confidence_interval.1);
//!
//! let var = simulator.value_at_risk(0.95, 10_000.0).unwrap();
//! assert!(var.var_amount >= 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analysis;
pub mod paths;
pub mod rng;
pub mod simulator;

// Re-exports for convenient access
pub use analysis::{prediction_summary, probability_above, value_at_risk};
pub use analysis::{PredictionResult, VaRResult};
pub use paths::{generate_paths, PathMatrix};
pub use rng::ForecastRng;
pub use simulator::{CurrencySimulator, SimulatorState};
