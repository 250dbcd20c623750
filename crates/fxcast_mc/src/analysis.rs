//! Result reducers over the simulated terminal distribution.
//!
//! Stateless functions that reduce a terminal-value sample to prediction
//! statistics, Value-at-Risk figures, or an empirical survival
//! probability. They are invoked by
//! [`CurrencySimulator`](crate::simulator::CurrencySimulator) on its
//! cached terminal column and never cache anything themselves.
//!
//! # Sign conventions
//!
//! VaR quantiles are signed fractional returns scaled to percent: a
//! negative `var_percent` denotes a loss. `var_amount` is a monetary
//! exposure magnitude and therefore always non-negative. The tail mean
//! cannot be less extreme than its own cutoff, so
//! `|cvar_percent| ≥ |var_percent|` on the loss side.

use fxcast_core::math::stats;
use fxcast_core::SimulationError;

/// Prediction statistics over the simulated terminal distribution.
///
/// All fields are derived from the terminal column of a single
/// simulation run; the record itself is an immutable value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PredictionResult {
    /// Mean terminal rate.
    pub mean: f64,
    /// Median terminal rate.
    pub median: f64,
    /// Sample standard deviation (ddof = 1) of the terminal rates.
    pub std_dev: f64,
    /// Smallest terminal rate.
    pub min: f64,
    /// Largest terminal rate.
    pub max: f64,
    /// Central confidence interval `(lower, upper)` at `confidence_level`.
    pub confidence_interval: (f64, f64),
    /// Confidence level the interval was computed at, in (0, 1).
    pub confidence_level: f64,
}

impl PredictionResult {
    /// Returns the width of the confidence interval.
    #[inline]
    pub fn interval_width(&self) -> f64 {
        self.confidence_interval.1 - self.confidence_interval.0
    }
}

/// Value-at-Risk figures over the simulated terminal returns.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VaRResult {
    /// VaR as a signed return in percent; negative denotes a loss.
    pub var_percent: f64,
    /// Monetary VaR, `initial_investment · |var_percent| / 100`, always ≥ 0.
    pub var_amount: f64,
    /// Conditional VaR (expected shortfall) as a signed return in percent.
    pub cvar_percent: f64,
    /// Confidence level the figures were computed at, in (0, 1).
    pub confidence_level: f64,
    /// Investment amount the monetary VaR refers to.
    pub initial_investment: f64,
}

impl VaRResult {
    /// Returns `true` when the VaR quantile sits on the loss side.
    #[inline]
    pub fn is_loss(&self) -> bool {
        self.var_percent < 0.0
    }
}

fn validate_confidence_level(confidence_level: f64) -> Result<(), SimulationError> {
    if !(confidence_level > 0.0 && confidence_level < 1.0) {
        return Err(SimulationError::invalid(
            "confidence_level",
            format!("must be in (0, 1), got {}", confidence_level),
        ));
    }
    Ok(())
}

/// Reduces a terminal-value sample to prediction statistics.
///
/// The confidence interval is central: with `α = 1 − confidence_level`,
/// the bounds are the `100·α/2` and `100·(1 − α/2)` percentiles, computed
/// by linear interpolation between order statistics.
///
/// # Arguments
///
/// * `terminal_rates` - Non-empty terminal column of a path matrix
/// * `confidence_level` - Interval coverage, in (0, 1)
///
/// # Errors
///
/// Returns [`SimulationError::InvalidArgument`] when `confidence_level`
/// is outside (0, 1).
pub fn prediction_summary(
    terminal_rates: &[f64],
    confidence_level: f64,
) -> Result<PredictionResult, SimulationError> {
    validate_confidence_level(confidence_level)?;
    debug_assert!(!terminal_rates.is_empty());

    let alpha = 1.0 - confidence_level;
    let lower = stats::percentile(terminal_rates, alpha / 2.0 * 100.0);
    let upper = stats::percentile(terminal_rates, (1.0 - alpha / 2.0) * 100.0);

    Ok(PredictionResult {
        mean: stats::mean(terminal_rates),
        median: stats::median(terminal_rates),
        std_dev: stats::sample_std(terminal_rates),
        min: stats::min(terminal_rates),
        max: stats::max(terminal_rates),
        confidence_interval: (lower, upper),
        confidence_level,
    })
}

/// Reduces a terminal-value sample to VaR and CVaR figures.
///
/// Simple returns are taken against `initial_rate`; the VaR quantile is
/// the `100·(1 − confidence_level)` percentile of those returns. The
/// CVaR is the mean of the tail `{r : r ≤ quantile}`; when that tail is
/// empty the quantile itself is used as a degenerate fallback.
///
/// # Arguments
///
/// * `terminal_rates` - Non-empty terminal column of a path matrix
/// * `initial_rate` - Rate the returns are measured against, positive
/// * `confidence_level` - VaR confidence, in (0, 1)
/// * `initial_investment` - Monetary exposure, must be positive
///
/// # Errors
///
/// Returns [`SimulationError::InvalidArgument`] when `confidence_level`
/// is outside (0, 1) or `initial_investment` is not positive.
pub fn value_at_risk(
    terminal_rates: &[f64],
    initial_rate: f64,
    confidence_level: f64,
    initial_investment: f64,
) -> Result<VaRResult, SimulationError> {
    validate_confidence_level(confidence_level)?;
    if !initial_investment.is_finite() || initial_investment <= 0.0 {
        return Err(SimulationError::invalid(
            "initial_investment",
            format!("must be positive and finite, got {}", initial_investment),
        ));
    }
    debug_assert!(!terminal_rates.is_empty());
    debug_assert!(initial_rate > 0.0);

    let returns: Vec<f64> = terminal_rates
        .iter()
        .map(|rate| (rate - initial_rate) / initial_rate)
        .collect();

    let var_quantile = stats::percentile(&returns, (1.0 - confidence_level) * 100.0);
    let var_amount = initial_investment * var_quantile.abs();

    let tail: Vec<f64> = returns.iter().copied().filter(|r| *r <= var_quantile).collect();
    let cvar = if tail.is_empty() {
        var_quantile
    } else {
        stats::mean(&tail)
    };

    Ok(VaRResult {
        var_percent: var_quantile * 100.0,
        var_amount,
        cvar_percent: cvar * 100.0,
        confidence_level,
        initial_investment,
    })
}

/// Empirical probability that the terminal rate reaches `target_rate`.
///
/// Inclusive boundary: a terminal value exactly equal to the target
/// counts as reached.
///
/// # Arguments
///
/// * `terminal_rates` - Non-empty terminal column of a path matrix
/// * `target_rate` - Target level, must be positive
///
/// # Errors
///
/// Returns [`SimulationError::InvalidArgument`] when `target_rate` is
/// not positive.
pub fn probability_above(
    terminal_rates: &[f64],
    target_rate: f64,
) -> Result<f64, SimulationError> {
    if !target_rate.is_finite() || target_rate <= 0.0 {
        return Err(SimulationError::invalid(
            "target_rate",
            format!("must be positive and finite, got {}", target_rate),
        ));
    }
    debug_assert!(!terminal_rates.is_empty());

    let hits = terminal_rates.iter().filter(|rate| **rate >= target_rate).count();
    Ok(hits as f64 / terminal_rates.len() as f64)
}
