//! GBM path generation for Monte Carlo simulation.
//!
//! Implements the log-space Euler discretisation of Geometric Brownian
//! Motion:
//!
//! ```text
//! S(t+dt) = S(t) × exp((μ − 0.5σ²)dt + σ√dt × Z)
//! ```
//!
//! # Memory layout
//!
//! Paths are stored in a contiguous row-major buffer:
//! `data[sim_idx * n_steps + step_idx]`, where `step_idx = 0` holds the
//! initial rate. Random variates are consumed in the same order, one per
//! `(simulation, step)` cell with time increasing fastest, so the stepped
//! loop below is numerically identical to the cumulative-log-sum
//! formulation.

use fxcast_core::{SimulationError, SimulationParameters};

use crate::rng::ForecastRng;

/// A matrix of simulated exchange-rate trajectories.
///
/// Shape is `(n_simulations, n_steps)`: each row is one trajectory, each
/// column a time step, with column 0 equal to the initial rate for every
/// row. Instances are produced by [`generate_paths`] and owned by the
/// simulator that requested them; accessors either borrow immutably or
/// copy, so callers can never mutate a cached matrix in place.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathMatrix {
    /// Row-major trajectory data, length `n_simulations * n_steps`.
    data: Vec<f64>,
    /// Number of simulated trajectories (rows).
    n_simulations: usize,
    /// Number of time steps per trajectory (columns), including day 0.
    n_steps: usize,
}

impl PathMatrix {
    /// Assembles a matrix from a row-major buffer.
    ///
    /// Crate-internal: only the path generator builds matrices.
    pub(crate) fn from_raw(data: Vec<f64>, n_simulations: usize, n_steps: usize) -> Self {
        debug_assert_eq!(data.len(), n_simulations * n_steps);
        Self {
            data,
            n_simulations,
            n_steps,
        }
    }

    /// Returns the number of simulated trajectories (rows).
    #[inline]
    pub fn n_simulations(&self) -> usize {
        self.n_simulations
    }

    /// Returns the number of time steps per trajectory (columns).
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the value at `(simulation, step)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn value(&self, simulation: usize, step: usize) -> f64 {
        assert!(simulation < self.n_simulations && step < self.n_steps);
        self.data[simulation * self.n_steps + step]
    }

    /// Returns one trajectory as a slice of `n_steps` values.
    ///
    /// # Panics
    ///
    /// Panics if `simulation` is out of bounds.
    #[inline]
    pub fn path(&self, simulation: usize) -> &[f64] {
        assert!(simulation < self.n_simulations);
        let offset = simulation * self.n_steps;
        &self.data[offset..offset + self.n_steps]
    }

    /// Returns the whole row-major buffer.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.data
    }

    /// Copies out the terminal column (one value per trajectory).
    pub fn terminal_rates(&self) -> Vec<f64> {
        (0..self.n_simulations)
            .map(|sim| self.data[sim * self.n_steps + self.n_steps - 1])
            .collect()
    }
}

/// Generates a reproducible sample of GBM trajectories.
///
/// # Arguments
///
/// * `params` - Validated model parameters
/// * `days` - Number of time steps including day 0, at least 1
/// * `n_simulations` - Number of trajectories, at least 1
/// * `rng` - Generator supplying the standard-normal variates
///
/// # Errors
///
/// Returns [`SimulationError::InvalidArgument`] when `days` or
/// `n_simulations` is zero.
///
/// # Algorithm
///
/// 1. Precompute `drift_dt = (μ − 0.5σ²)dt` and `vol_sqrt_dt = σ√dt`
///    with `dt = 1 / trading_days_per_year`
/// 2. Fill an `n_simulations × (days − 1)` standard-normal buffer in
///    row-major order
/// 3. For each trajectory, set `S[0] = initial_rate` and evolve
///    `S[t+1] = S[t] × exp(drift_dt + vol_sqrt_dt × Z)`
///
/// For `days == 1` the matrix is a single column of the initial rate and
/// no variates are consumed.
pub fn generate_paths(
    params: &SimulationParameters,
    days: usize,
    n_simulations: usize,
    rng: &mut ForecastRng,
) -> Result<PathMatrix, SimulationError> {
    if days == 0 {
        return Err(SimulationError::invalid("days", "must be at least 1, got 0"));
    }
    if n_simulations == 0 {
        return Err(SimulationError::invalid(
            "n_simulations",
            "must be at least 1, got 0",
        ));
    }

    let initial_rate = params.initial_rate();

    if days == 1 {
        return Ok(PathMatrix::from_raw(
            vec![initial_rate; n_simulations],
            n_simulations,
            1,
        ));
    }

    let dt = params.dt();
    let sigma = params.annual_volatility();
    let drift_dt = (params.annual_drift() - 0.5 * sigma * sigma) * dt;
    let vol_sqrt_dt = sigma * dt.sqrt();

    let n_increments = days - 1;
    let mut randoms = vec![0.0; n_simulations * n_increments];
    rng.fill_normal(&mut randoms);

    let mut data = vec![0.0; n_simulations * days];
    for sim in 0..n_simulations {
        let path_offset = sim * days;
        let random_offset = sim * n_increments;

        data[path_offset] = initial_rate;
        for step in 0..n_increments {
            let z = randoms[random_offset + step];
            let increment = drift_dt + vol_sqrt_dt * z;
            data[path_offset + step + 1] = data[path_offset + step] * increment.exp();
        }
    }

    Ok(PathMatrix::from_raw(data, n_simulations, days))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn default_params() -> SimulationParameters {
        SimulationParameters::new(75.0, 0.05, 0.15).unwrap()
    }

    #[test]
    fn test_shape_and_initial_column() {
        let params = default_params();
        let mut rng = ForecastRng::from_seed(42);
        let paths = generate_paths(&params, 30, 100, &mut rng).unwrap();

        assert_eq!(paths.n_simulations(), 100);
        assert_eq!(paths.n_steps(), 30);
        for sim in 0..100 {
            assert_eq!(paths.value(sim, 0), 75.0);
        }
    }

    #[test]
    fn test_single_day_consumes_no_randomness() {
        let params = default_params();
        let mut rng = ForecastRng::from_seed(42);
        let paths = generate_paths(&params, 1, 10, &mut rng).unwrap();

        assert_eq!(paths.n_steps(), 1);
        assert!(paths.values().iter().all(|&v| v == 75.0));

        // The stream is untouched: the next draw matches a fresh generator.
        let mut fresh = ForecastRng::from_seed(42);
        assert_eq!(rng.gen_normal(), fresh.gen_normal());
    }

    #[test]
    fn test_invalid_arguments() {
        let params = default_params();
        let mut rng = ForecastRng::from_seed(42);

        let err = generate_paths(&params, 0, 100, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            SimulationError::InvalidArgument { name: "days", .. }
        ));

        let err = generate_paths(&params, 30, 0, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            SimulationError::InvalidArgument {
                name: "n_simulations",
                ..
            }
        ));
    }

    #[test]
    fn test_reproducibility() {
        let params = default_params();
        let mut rng1 = ForecastRng::from_seed(12345);
        let mut rng2 = ForecastRng::from_seed(12345);

        let paths1 = generate_paths(&params, 30, 50, &mut rng1).unwrap();
        let paths2 = generate_paths(&params, 30, 50, &mut rng2).unwrap();

        assert_eq!(paths1, paths2);
    }

    #[test]
    fn test_different_seeds_produce_different_paths() {
        let params = default_params();
        let mut rng1 = ForecastRng::from_seed(1);
        let mut rng2 = ForecastRng::from_seed(2);

        let paths1 = generate_paths(&params, 30, 50, &mut rng1).unwrap();
        let paths2 = generate_paths(&params, 30, 50, &mut rng2).unwrap();

        assert_ne!(paths1, paths2);
    }

    #[test]
    fn test_all_rates_positive_and_finite() {
        let params = default_params();
        let mut rng = ForecastRng::from_seed(42);
        let paths = generate_paths(&params, 50, 200, &mut rng).unwrap();

        for &rate in paths.values() {
            assert!(rate > 0.0, "rate must be positive: {}", rate);
            assert!(rate.is_finite(), "rate must be finite: {}", rate);
        }
    }

    #[test]
    fn test_zero_drift_zero_volatility_is_constant() {
        let params = SimulationParameters::new(75.0, 0.0, 0.0).unwrap();
        let mut rng = ForecastRng::from_seed(42);
        let paths = generate_paths(&params, 30, 20, &mut rng).unwrap();

        for &rate in paths.values() {
            assert_eq!(rate, 75.0);
        }
    }

    #[test]
    fn test_terminal_rates_match_last_column() {
        let params = default_params();
        let mut rng = ForecastRng::from_seed(42);
        let paths = generate_paths(&params, 30, 40, &mut rng).unwrap();

        let terminals = paths.terminal_rates();
        assert_eq!(terminals.len(), 40);
        for (sim, &terminal) in terminals.iter().enumerate() {
            assert_eq!(terminal, paths.value(sim, 29));
        }
    }

    #[test]
    fn test_statistical_mean_of_terminal_rates() {
        // E[S(T)] = S0 · exp(μ · T) with T = (days − 1) · dt
        let params = default_params();
        let mut rng = ForecastRng::from_seed(42);
        let days = 30;
        let n = 50_000;

        let paths = generate_paths(&params, days, n, &mut rng).unwrap();
        let terminals = paths.terminal_rates();
        let mean = terminals.iter().sum::<f64>() / n as f64;

        let t = (days - 1) as f64 * params.dt();
        let expected = params.initial_rate() * (params.annual_drift() * t).exp();
        assert_relative_eq!(mean, expected, max_relative = 0.01);
    }

    #[test]
    fn test_matches_cumulative_log_sum_formulation() {
        let params = default_params();
        let days = 10;
        let n = 5;

        let mut rng = ForecastRng::from_seed(77);
        let paths = generate_paths(&params, days, n, &mut rng).unwrap();

        // Re-derive the same matrix by cumulative summation of log-returns
        // drawn from an identically seeded stream.
        let mut check_rng = ForecastRng::from_seed(77);
        let mut randoms = vec![0.0; n * (days - 1)];
        check_rng.fill_normal(&mut randoms);

        let dt = params.dt();
        let sigma = params.annual_volatility();
        let drift_dt = (params.annual_drift() - 0.5 * sigma * sigma) * dt;
        let vol_sqrt_dt = sigma * dt.sqrt();

        for sim in 0..n {
            let mut log_path = 0.0;
            assert_eq!(paths.value(sim, 0), params.initial_rate());
            for step in 0..days - 1 {
                log_path += drift_dt + vol_sqrt_dt * randoms[sim * (days - 1) + step];
                let expected = params.initial_rate() * log_path.exp();
                assert_relative_eq!(paths.value(sim, step + 1), expected, max_relative = 1e-12);
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_initial_column_equals_initial_rate(
            initial_rate in 0.01_f64..1000.0,
            drift in -0.5_f64..0.5,
            sigma in 0.0_f64..1.0,
            days in 1_usize..40,
            n in 1_usize..40,
            seed in any::<u64>(),
        ) {
            let params = SimulationParameters::new(initial_rate, drift, sigma).unwrap();
            let mut rng = ForecastRng::from_seed(seed);
            let paths = generate_paths(&params, days, n, &mut rng).unwrap();

            for sim in 0..n {
                prop_assert_eq!(paths.value(sim, 0), initial_rate);
            }
        }
    }
}
