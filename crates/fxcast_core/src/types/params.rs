//! Simulation parameters for the GBM exchange-rate model.

use serde::{Deserialize, Serialize};

use super::error::SimulationError;

/// Default trading-day count per year used to convert annual parameters
/// to a daily time step.
pub const DEFAULT_TRADING_DAYS_PER_YEAR: u32 = 252;

/// Parameters for a single simulated exchange rate.
///
/// # Model
///
/// The rate is assumed to follow Geometric Brownian Motion:
/// ```text
/// dS = μ S dt + σ S dW
/// ```
///
/// where:
/// - S is the exchange rate
/// - μ is the annualised drift
/// - σ is the annualised volatility
/// - W is a Wiener process
///
/// Parameters are validated at construction and immutable afterwards;
/// the simulator trusts them without re-checking.
///
/// # Examples
///
/// ```
/// use fxcast_core::SimulationParameters;
///
/// let params = SimulationParameters::new(75.0, 0.05, 0.15).unwrap();
/// assert_eq!(params.initial_rate(), 75.0);
/// assert_eq!(params.trading_days_per_year(), 252);
///
/// // Invalid inputs are rejected at construction
/// assert!(SimulationParameters::new(-1.0, 0.05, 0.15).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Initial exchange rate (S₀).
    initial_rate: f64,
    /// Annualised drift (μ).
    annual_drift: f64,
    /// Annualised volatility (σ).
    annual_volatility: f64,
    /// Trading days per year, used for the daily time step.
    trading_days_per_year: u32,
}

impl SimulationParameters {
    /// Creates parameters with the default 252 trading days per year.
    ///
    /// # Arguments
    ///
    /// * `initial_rate` - Initial exchange rate, must be positive and finite
    /// * `annual_drift` - Annualised drift, any sign, must be finite
    /// * `annual_volatility` - Annualised volatility, must be non-negative and finite
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidArgument`] naming the first
    /// parameter that violates its precondition.
    pub fn new(
        initial_rate: f64,
        annual_drift: f64,
        annual_volatility: f64,
    ) -> Result<Self, SimulationError> {
        Self::with_trading_days(
            initial_rate,
            annual_drift,
            annual_volatility,
            DEFAULT_TRADING_DAYS_PER_YEAR,
        )
    }

    /// Creates parameters with an explicit trading-day convention.
    ///
    /// # Arguments
    ///
    /// * `initial_rate` - Initial exchange rate, must be positive and finite
    /// * `annual_drift` - Annualised drift, any sign, must be finite
    /// * `annual_volatility` - Annualised volatility, must be non-negative and finite
    /// * `trading_days_per_year` - Must be at least 1
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidArgument`] naming the first
    /// parameter that violates its precondition.
    pub fn with_trading_days(
        initial_rate: f64,
        annual_drift: f64,
        annual_volatility: f64,
        trading_days_per_year: u32,
    ) -> Result<Self, SimulationError> {
        if !initial_rate.is_finite() || initial_rate <= 0.0 {
            return Err(SimulationError::invalid(
                "initial_rate",
                format!("must be positive and finite, got {}", initial_rate),
            ));
        }
        if !annual_drift.is_finite() {
            return Err(SimulationError::invalid(
                "annual_drift",
                format!("must be finite, got {}", annual_drift),
            ));
        }
        if !annual_volatility.is_finite() || annual_volatility < 0.0 {
            return Err(SimulationError::invalid(
                "annual_volatility",
                format!("must be non-negative and finite, got {}", annual_volatility),
            ));
        }
        if trading_days_per_year == 0 {
            return Err(SimulationError::invalid(
                "trading_days_per_year",
                "must be at least 1, got 0",
            ));
        }

        Ok(Self {
            initial_rate,
            annual_drift,
            annual_volatility,
            trading_days_per_year,
        })
    }

    /// Returns the initial exchange rate (S₀).
    #[inline]
    pub fn initial_rate(&self) -> f64 {
        self.initial_rate
    }

    /// Returns the annualised drift (μ).
    #[inline]
    pub fn annual_drift(&self) -> f64 {
        self.annual_drift
    }

    /// Returns the annualised volatility (σ).
    #[inline]
    pub fn annual_volatility(&self) -> f64 {
        self.annual_volatility
    }

    /// Returns the trading-day count per year.
    #[inline]
    pub fn trading_days_per_year(&self) -> u32 {
        self.trading_days_per_year
    }

    /// Returns the daily time step `dt = 1 / trading_days_per_year`.
    #[inline]
    pub fn dt(&self) -> f64 {
        1.0 / self.trading_days_per_year as f64
    }
}

impl Default for SimulationParameters {
    /// Reference scenario used throughout tests and benchmarks: rate 75.0,
    /// 5% drift, 15% volatility, 252 trading days.
    fn default() -> Self {
        Self {
            initial_rate: 75.0,
            annual_drift: 0.05,
            annual_volatility: 0.15,
            trading_days_per_year: DEFAULT_TRADING_DAYS_PER_YEAR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_valid_construction() {
        let params = SimulationParameters::new(75.0, 0.05, 0.15).unwrap();
        assert_eq!(params.initial_rate(), 75.0);
        assert_eq!(params.annual_drift(), 0.05);
        assert_eq!(params.annual_volatility(), 0.15);
        assert_eq!(params.trading_days_per_year(), 252);
        assert_relative_eq!(params.dt(), 1.0 / 252.0);
    }

    #[test]
    fn test_negative_drift_is_valid() {
        assert!(SimulationParameters::new(1.08, -0.02, 0.10).is_ok());
    }

    #[test]
    fn test_zero_volatility_is_valid() {
        assert!(SimulationParameters::new(75.0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn test_invalid_initial_rate() {
        for rate in [0.0, -75.0, f64::NAN, f64::INFINITY] {
            let err = SimulationParameters::new(rate, 0.05, 0.15).unwrap_err();
            assert!(matches!(
                err,
                SimulationError::InvalidArgument {
                    name: "initial_rate",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_invalid_drift() {
        let err = SimulationParameters::new(75.0, f64::NAN, 0.15).unwrap_err();
        assert!(matches!(
            err,
            SimulationError::InvalidArgument {
                name: "annual_drift",
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_volatility() {
        for sigma in [-0.15, f64::NAN] {
            let err = SimulationParameters::new(75.0, 0.05, sigma).unwrap_err();
            assert!(matches!(
                err,
                SimulationError::InvalidArgument {
                    name: "annual_volatility",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_invalid_trading_days() {
        let err = SimulationParameters::with_trading_days(75.0, 0.05, 0.15, 0).unwrap_err();
        assert!(matches!(
            err,
            SimulationError::InvalidArgument {
                name: "trading_days_per_year",
                ..
            }
        ));
    }

    #[test]
    fn test_default_is_reference_scenario() {
        let params = SimulationParameters::default();
        assert_eq!(params.initial_rate(), 75.0);
        assert_eq!(params.annual_drift(), 0.05);
        assert_eq!(params.annual_volatility(), 0.15);
        assert_eq!(params.trading_days_per_year(), 252);
    }

    #[test]
    fn test_custom_trading_days() {
        let params = SimulationParameters::with_trading_days(75.0, 0.05, 0.15, 365).unwrap();
        assert_relative_eq!(params.dt(), 1.0 / 365.0);
    }
}
