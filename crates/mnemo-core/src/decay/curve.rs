//! Stateless retention and review-gain curves

use serde::{Deserialize, Serialize};

use crate::error::{MnemoError, Result};

/// One sampled point of a curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurvePoint {
    /// Days since the last review
    pub elapsed_days: f64,
    /// Curve value at that time
    pub value: f64,
}

fn check_elapsed(elapsed_days: f64) -> Result<()> {
    if elapsed_days.is_finite() && elapsed_days >= 0.0 {
        Ok(())
    } else {
        Err(MnemoError::parameter("elapsed_days", elapsed_days))
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(MnemoError::parameter(name, value))
    }
}

/// Probability of recall after `elapsed_days`, `e^(-t/S)`
///
/// Returns a value in `(0, 1]`; exactly 1.0 at `t = 0`.
pub fn retention(elapsed_days: f64, stability: f64) -> Result<f64> {
    check_positive("stability", stability)?;
    check_elapsed(elapsed_days)?;
    Ok((-elapsed_days / stability).exp())
}

/// Strength gained by reviewing after `elapsed_days`
///
/// Near zero when reviewing too early (cramming), exactly 1.0 at the
/// optimal interval, falling off again once the memory has faded.
pub fn review_gain(elapsed_days: f64, optimal_interval: f64) -> Result<f64> {
    check_positive("optimal_interval", optimal_interval)?;
    check_elapsed(elapsed_days)?;
    let ratio = elapsed_days / optimal_interval;
    Ok(ratio * (1.0 - ratio).exp())
}

/// Days until retention falls to `threshold`, `-S * ln(threshold)`
pub fn days_until_retention(threshold: f64, stability: f64) -> Result<f64> {
    check_positive("stability", stability)?;
    if !(threshold > 0.0 && threshold <= 1.0) {
        return Err(MnemoError::parameter("threshold", threshold));
    }
    // ln(1) is exactly 0; avoid handing back -0.0
    Ok((-stability * threshold.ln()).max(0.0))
}

fn sample(
    max_days: f64,
    steps: usize,
    f: impl Fn(f64) -> Result<f64>,
) -> Result<Vec<CurvePoint>> {
    check_elapsed(max_days)?;
    if steps < 2 {
        return Err(MnemoError::parameter("steps", steps as f64));
    }
    let stride = max_days / (steps - 1) as f64;
    (0..steps)
        .map(|i| {
            // Pin the final sample so floating error never overshoots the range.
            let t = if i == steps - 1 { max_days } else { i as f64 * stride };
            Ok(CurvePoint {
                elapsed_days: t,
                value: f(t)?,
            })
        })
        .collect()
}

/// `steps` evenly spaced retention samples over `[0, max_days]`
pub fn sample_retention(stability: f64, max_days: f64, steps: usize) -> Result<Vec<CurvePoint>> {
    check_positive("stability", stability)?;
    sample(max_days, steps, |t| retention(t, stability))
}

/// `steps` evenly spaced review-gain samples over `[0, max_days]`
pub fn sample_gain(optimal_interval: f64, max_days: f64, steps: usize) -> Result<Vec<CurvePoint>> {
    check_positive("optimal_interval", optimal_interval)?;
    sample(max_days, steps, |t| review_gain(t, optimal_interval))
}
