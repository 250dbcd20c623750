//! Insertion-ordered multi-currency portfolio and comparison table.

use rayon::prelude::*;

use fxcast_core::{SimulationError, SimulationParameters};
use fxcast_mc::{CurrencySimulator, PathMatrix};

use crate::error::PortfolioError;
use crate::seeds::derive_sub_seeds;

/// Confidence level used for the comparison table's prediction and VaR
/// columns.
pub const DEFAULT_COMPARISON_CONFIDENCE: f64 = 0.95;

/// Monetary investment the comparison table's VaR column refers to.
pub const DEFAULT_COMPARISON_INVESTMENT: f64 = 10_000.0;

/// One registered asset: identifier plus its owned simulator.
struct AssetEntry {
    id: String,
    simulator: CurrencySimulator,
}

/// One row of the comparison table.
///
/// Prediction fields are computed at
/// [`DEFAULT_COMPARISON_CONFIDENCE`]; the VaR fields additionally use
/// [`DEFAULT_COMPARISON_INVESTMENT`]. Values are unrounded; formatting
/// is a presentation concern of the reporting layer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonRow {
    /// Asset identifier, e.g. `"USD/RUB"`.
    pub id: String,
    /// Initial exchange rate of the asset.
    pub initial_rate: f64,
    /// Mean predicted terminal rate.
    pub mean: f64,
    /// Median predicted terminal rate.
    pub median: f64,
    /// Sample standard deviation of the terminal rates.
    pub std_dev: f64,
    /// Smallest terminal rate.
    pub min: f64,
    /// Largest terminal rate.
    pub max: f64,
    /// Lower bound of the central confidence interval.
    pub ci_lower: f64,
    /// Upper bound of the central confidence interval.
    pub ci_upper: f64,
    /// VaR as a signed return in percent; negative denotes a loss.
    pub var_percent: f64,
    /// Monetary VaR against the default comparison investment.
    pub var_amount: f64,
    /// Conditional VaR as a signed return in percent.
    pub cvar_percent: f64,
}

/// Orchestrator for Monte Carlo simulation of several independent
/// exchange rates.
///
/// Assets are kept in an explicitly insertion-ordered collection;
/// iteration order (and therefore sub-seed assignment and comparison
/// row order) is a documented contract, not an accident of a map's
/// internals.
///
/// # Examples
///
/// ```
/// use fxcast_portfolio::MultiCurrencyPortfolio;
///
/// let mut portfolio = MultiCurrencyPortfolio::new();
/// portfolio.add_currency("USD/RUB", 75.0, 0.05, 0.15).unwrap();
/// portfolio.add_currency("EUR/USD", 1.08, 0.02, 0.10).unwrap();
///
/// let results = portfolio.simulate_all(30, 2_000, Some(42)).unwrap();
/// assert_eq!(results[0].0, "USD/RUB");
/// assert_eq!(results[1].0, "EUR/USD");
/// ```
#[derive(Default)]
pub struct MultiCurrencyPortfolio {
    entries: Vec<AssetEntry>,
}

impl MultiCurrencyPortfolio {
    /// Creates an empty portfolio.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a currency pair with the default 252 trading days.
    ///
    /// Re-adding an existing `id` replaces its simulator in place (an
    /// idempotent overwrite) and keeps the original insertion position.
    ///
    /// # Arguments
    ///
    /// * `id` - Non-empty identifier, e.g. `"USD/RUB"`
    /// * `initial_rate` - Initial exchange rate, positive
    /// * `annual_drift` - Annualised drift, any sign
    /// * `annual_volatility` - Annualised volatility, non-negative
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an empty identifier or invalid
    /// model parameters.
    pub fn add_currency(
        &mut self,
        id: impl Into<String>,
        initial_rate: f64,
        annual_drift: f64,
        annual_volatility: f64,
    ) -> Result<(), PortfolioError> {
        let params = SimulationParameters::new(initial_rate, annual_drift, annual_volatility)?;
        self.add_currency_with_params(id, params)
    }

    /// Registers a currency pair with pre-built parameters.
    ///
    /// Same overwrite semantics as [`add_currency`](Self::add_currency).
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an empty identifier.
    pub fn add_currency_with_params(
        &mut self,
        id: impl Into<String>,
        params: SimulationParameters,
    ) -> Result<(), PortfolioError> {
        let id = id.into();
        if id.is_empty() {
            return Err(SimulationError::invalid("id", "must be a non-empty identifier").into());
        }

        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => entry.simulator = CurrencySimulator::new(params),
            None => self.entries.push(AssetEntry {
                id,
                simulator: CurrencySimulator::new(params),
            }),
        }
        Ok(())
    }

    /// Returns the number of registered assets.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no assets are registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the asset identifiers in insertion order.
    pub fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.id.as_str()).collect()
    }

    /// Looks up the simulator registered under `id`.
    pub fn simulator(&self, id: &str) -> Option<&CurrencySimulator> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.simulator)
    }

    /// Simulates every registered asset and returns the path matrices in
    /// insertion order.
    ///
    /// With a base seed, one sub-seed per asset is derived from the
    /// asset's insertion position, single-threaded and before any worker
    /// dispatch, so the batch is reproducible regardless of how the
    /// rayon pool schedules the per-asset simulations. With `None`,
    /// every asset independently draws from the entropy source.
    ///
    /// # Arguments
    ///
    /// * `days` - Number of time steps including day 0, at least 1
    /// * `n_simulations` - Trajectories per asset, at least 1
    /// * `base_seed` - Batch seed, or `None` for non-reproducible runs
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::EmptyPortfolio`] when no assets are
    /// registered, or the first per-asset `InvalidArgument` otherwise.
    pub fn simulate_all(
        &mut self,
        days: usize,
        n_simulations: usize,
        base_seed: Option<u64>,
    ) -> Result<Vec<(String, PathMatrix)>, PortfolioError> {
        if self.entries.is_empty() {
            return Err(PortfolioError::EmptyPortfolio);
        }

        // Sub-seed assignment is fixed before any worker starts.
        let seeds: Vec<Option<u64>> = match base_seed {
            Some(base) => derive_sub_seeds(base, self.entries.len())
                .into_iter()
                .map(Some)
                .collect(),
            None => vec![None; self.entries.len()],
        };

        let results: Result<Vec<(String, PathMatrix)>, SimulationError> = self
            .entries
            .par_iter_mut()
            .zip(seeds.par_iter())
            .map(|(entry, seed)| {
                let paths = entry.simulator.simulate(days, n_simulations, *seed)?;
                Ok((entry.id.clone(), paths))
            })
            .collect();

        results.map_err(PortfolioError::from)
    }

    /// Assembles the comparison table: one row per simulated asset, in
    /// insertion order.
    ///
    /// Assets that have not reached the simulated state are silently
    /// excluded; an empty portfolio (or one where nothing has been
    /// simulated yet) yields an empty table rather than an error.
    pub fn get_comparison(&self) -> Vec<ComparisonRow> {
        self.entries
            .iter()
            .filter_map(|entry| {
                let simulator = &entry.simulator;
                let prediction = simulator.prediction(DEFAULT_COMPARISON_CONFIDENCE).ok()?;
                let var = simulator
                    .value_at_risk(DEFAULT_COMPARISON_CONFIDENCE, DEFAULT_COMPARISON_INVESTMENT)
                    .ok()?;

                Some(ComparisonRow {
                    id: entry.id.clone(),
                    initial_rate: simulator.params().initial_rate(),
                    mean: prediction.mean,
                    median: prediction.median,
                    std_dev: prediction.std_dev,
                    min: prediction.min,
                    max: prediction.max,
                    ci_lower: prediction.confidence_interval.0,
                    ci_upper: prediction.confidence_interval.1,
                    var_percent: var.var_percent,
                    var_amount: var.var_amount,
                    cvar_percent: var.cvar_percent,
                })
            })
            .collect()
    }
}
