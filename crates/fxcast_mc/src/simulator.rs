//! Single-asset Monte Carlo simulator.
//!
//! [`CurrencySimulator`] owns validated parameters and, after a
//! successful `simulate()` call, the resulting path matrix together with
//! its terminal column. Prediction and risk queries are computed on
//! demand from the cached terminal column and never cached themselves.
//!
//! # State machine
//!
//! ```text
//! Configured ──simulate()──► Simulated ──simulate()──► Simulated ...
//! ```
//!
//! Construction with valid parameters yields `Configured`. Each
//! successful `simulate()` replaces the cached matrix and terminal column
//! (no accumulation); a failed call leaves the previous state untouched.
//! There is no terminal state.
//!
//! # Concurrency
//!
//! The simulator is synchronous and CPU-bound, with no I/O and no global
//! state. Callers must not invoke `simulate()` concurrently on the same
//! instance; this single-writer rule is a documented precondition, not
//! enforced internally. Accessors hand out copies, never aliases, so
//! concurrent readers cannot observe in-place mutation.

use fxcast_core::{SimulationError, SimulationParameters};

use crate::analysis::{
    prediction_summary, probability_above, value_at_risk, PredictionResult, VaRResult,
};
use crate::paths::{generate_paths, PathMatrix};
use crate::rng::ForecastRng;

/// Lifecycle state of a [`CurrencySimulator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimulatorState {
    /// Parameters are set; no simulation has completed yet.
    Configured,
    /// A path matrix and terminal column are cached.
    Simulated,
}

/// Cached output of the most recent successful `simulate()` call.
struct SimulatedData {
    paths: PathMatrix,
    terminal_rates: Vec<f64>,
}

/// Monte Carlo simulator for a single exchange rate.
///
/// # Examples
///
/// ```rust
/// use fxcast_core::SimulationParameters;
/// use fxcast_mc::{CurrencySimulator, SimulatorState};
///
/// let params = SimulationParameters::new(75.0, 0.05, 0.15).unwrap();
/// let mut simulator = CurrencySimulator::new(params);
/// assert_eq!(simulator.state(), SimulatorState::Configured);
///
/// simulator.simulate(30, 1_000, Some(42)).unwrap();
/// assert_eq!(simulator.state(), SimulatorState::Simulated);
///
/// let probability = simulator.probability_above(75.0).unwrap();
/// assert!((0.0..=1.0).contains(&probability));
/// ```
pub struct CurrencySimulator {
    params: SimulationParameters,
    simulated: Option<SimulatedData>,
}

impl CurrencySimulator {
    /// Creates a simulator in the `Configured` state.
    ///
    /// Parameters are validated by
    /// [`SimulationParameters`](fxcast_core::SimulationParameters) at
    /// their own construction; the simulator trusts them.
    pub fn new(params: SimulationParameters) -> Self {
        Self {
            params,
            simulated: None,
        }
    }

    /// Returns the simulation parameters.
    #[inline]
    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    /// Returns the current lifecycle state.
    #[inline]
    pub fn state(&self) -> SimulatorState {
        if self.simulated.is_some() {
            SimulatorState::Simulated
        } else {
            SimulatorState::Configured
        }
    }

    /// Returns `true` once a simulation has completed successfully.
    #[inline]
    pub fn is_simulated(&self) -> bool {
        self.simulated.is_some()
    }

    /// Runs a Monte Carlo simulation and caches its output.
    ///
    /// A fresh [`ForecastRng`] is constructed per call from `seed`; with
    /// `None` the variates come from the entropy source and the run is
    /// deliberately non-reproducible. On success the previous cached
    /// matrix (if any) is replaced and a copy of the new one is returned.
    ///
    /// # Arguments
    ///
    /// * `days` - Number of time steps including day 0, at least 1
    /// * `n_simulations` - Number of trajectories, at least 1
    /// * `seed` - Seed for reproducibility, or `None` for entropy
    ///
    /// # Errors
    ///
    /// Re-raises [`SimulationError::InvalidArgument`] from the path
    /// generator unchanged; the cached state is left untouched on error.
    pub fn simulate(
        &mut self,
        days: usize,
        n_simulations: usize,
        seed: Option<u64>,
    ) -> Result<PathMatrix, SimulationError> {
        let mut rng = ForecastRng::from_optional_seed(seed);
        let paths = generate_paths(&self.params, days, n_simulations, &mut rng)?;
        let terminal_rates = paths.terminal_rates();

        self.simulated = Some(SimulatedData {
            paths: paths.clone(),
            terminal_rates,
        });

        Ok(paths)
    }

    /// Copies out the cached path matrix.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::NotSimulated`] before the first
    /// successful `simulate()` call.
    pub fn paths(&self) -> Result<PathMatrix, SimulationError> {
        self.simulated
            .as_ref()
            .map(|data| data.paths.clone())
            .ok_or(SimulationError::NotSimulated)
    }

    /// Copies out the cached terminal column.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::NotSimulated`] before the first
    /// successful `simulate()` call.
    pub fn terminal_rates(&self) -> Result<Vec<f64>, SimulationError> {
        self.simulated
            .as_ref()
            .map(|data| data.terminal_rates.clone())
            .ok_or(SimulationError::NotSimulated)
    }

    /// Computes prediction statistics over the cached terminal column.
    ///
    /// # Arguments
    ///
    /// * `confidence_level` - Interval coverage, in (0, 1)
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::NotSimulated`] before the first
    /// successful `simulate()` call, or `InvalidArgument` for a
    /// confidence level outside (0, 1).
    pub fn prediction(&self, confidence_level: f64) -> Result<PredictionResult, SimulationError> {
        let data = self.simulated.as_ref().ok_or(SimulationError::NotSimulated)?;
        prediction_summary(&data.terminal_rates, confidence_level)
    }

    /// Computes VaR and CVaR figures over the cached terminal column.
    ///
    /// # Arguments
    ///
    /// * `confidence_level` - VaR confidence, in (0, 1)
    /// * `initial_investment` - Monetary exposure, must be positive
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::NotSimulated`] before the first
    /// successful `simulate()` call, or `InvalidArgument` for an invalid
    /// confidence level or investment.
    pub fn value_at_risk(
        &self,
        confidence_level: f64,
        initial_investment: f64,
    ) -> Result<VaRResult, SimulationError> {
        let data = self.simulated.as_ref().ok_or(SimulationError::NotSimulated)?;
        value_at_risk(
            &data.terminal_rates,
            self.params.initial_rate(),
            confidence_level,
            initial_investment,
        )
    }

    /// Computes the empirical probability of reaching `target_rate`.
    ///
    /// # Arguments
    ///
    /// * `target_rate` - Target level, must be positive
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::NotSimulated`] before the first
    /// successful `simulate()` call, or `InvalidArgument` for a
    /// non-positive target.
    pub fn probability_above(&self, target_rate: f64) -> Result<f64, SimulationError> {
        let data = self.simulated.as_ref().ok_or(SimulationError::NotSimulated)?;
        probability_above(&data.terminal_rates, target_rate)
    }
}
