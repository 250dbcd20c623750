//! Summary statistics over simulated terminal-value samples.
//!
//! All functions operate on unsorted `&[f64]` slices and treat the input
//! as a sample (Bessel's correction for the standard deviation). The
//! percentile convention is linear interpolation between order statistics,
//! i.e. `rank = p/100 · (n − 1)` on the sorted sample.
//!
//! Callers guarantee non-empty input; the reducers only run over a
//! terminal column with at least one simulation.

use std::cmp::Ordering;

/// Arithmetic mean of the sample.
#[inline]
pub fn mean(values: &[f64]) -> f64 {
    debug_assert!(!values.is_empty());
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation with Bessel's correction (ddof = 1).
///
/// Returns `0.0` (not NaN) for a single-element sample, so a degenerate
/// one-path simulation still produces a well-defined summary.
pub fn sample_std(values: &[f64]) -> f64 {
    debug_assert!(!values.is_empty());
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let m = mean(values);
    let ss: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    (ss / (n - 1) as f64).sqrt()
}

/// Smallest sample value.
#[inline]
pub fn min(values: &[f64]) -> f64 {
    debug_assert!(!values.is_empty());
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

/// Largest sample value.
#[inline]
pub fn max(values: &[f64]) -> f64 {
    debug_assert!(!values.is_empty());
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Sample median (the 50th percentile).
#[inline]
pub fn median(values: &[f64]) -> f64 {
    percentile(values, 50.0)
}

/// Percentile via linear interpolation between order statistics.
///
/// Sorts a copy of the sample and interpolates at
/// `rank = pct/100 · (n − 1)`; `pct` is clamped to `[0, 100]`.
///
/// # Arguments
///
/// * `values` - Non-empty, unsorted sample
/// * `pct` - Percentile in percent, e.g. `2.5` or `97.5`
///
/// # Examples
///
/// ```
/// use fxcast_core::math::stats::percentile;
///
/// assert_eq!(percentile(&[1.0, 2.0, 3.0, 4.0], 25.0), 1.75);
/// assert_eq!(percentile(&[15.0, 20.0, 35.0, 40.0, 50.0], 40.0), 29.0);
/// ```
pub fn percentile(values: &[f64], pct: f64) -> f64 {
    debug_assert!(!values.is_empty());
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let rank = (pct / 100.0).clamp(0.0, 1.0) * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}
