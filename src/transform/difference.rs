//! Differencing and annualized log growth rates.

use super::levels::log_levels;
use crate::error::{PrepError, Result};

/// Annualization factor for monthly data expressed in percent (12 * 100).
pub const MONTHLY_ANNUALIZATION: f64 = 1200.0;

/// What to do with the leading observation that differencing leaves undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DifferencePolicy {
    /// Output is one element shorter than the input.
    #[default]
    Drop,
    /// Output keeps the input length; the first element is NaN.
    FillNan,
}

impl DifferencePolicy {
    /// Output length for an input of length `n` differenced once.
    pub fn output_len(self, n: usize) -> usize {
        match self {
            DifferencePolicy::Drop => n.saturating_sub(1),
            DifferencePolicy::FillNan => n,
        }
    }
}

/// Difference a series `d` times.
///
/// Each pass shortens the series by one, so the output has
/// `n.saturating_sub(d)` elements.
pub fn difference(series: &[f64], d: usize) -> Vec<f64> {
    (0..d).fold(series.to_vec(), |acc, _| acc.windows(2).map(|w| w[1] - w[0]).collect())
}

/// Annualized percentage growth of a monthly level series:
/// `(ln x[t] - ln x[t-1]) * 1200`, with the undefined first element dropped.
///
/// ```
/// use macroprep::transform::annualized_log_difference;
///
/// assert_eq!(annualized_log_difference(&[100.0, 100.0, 100.0]), vec![0.0, 0.0]);
/// ```
pub fn annualized_log_difference(series: &[f64]) -> Vec<f64> {
    annualized_log_difference_with(series, MONTHLY_ANNUALIZATION, DifferencePolicy::Drop)
}

/// Annualized log difference with an explicit factor and boundary policy.
pub fn annualized_log_difference_with(
    series: &[f64],
    factor: f64,
    policy: DifferencePolicy,
) -> Vec<f64> {
    let mut result = Vec::with_capacity(policy.output_len(series.len()));
    if policy == DifferencePolicy::FillNan && !series.is_empty() {
        result.push(f64::NAN);
    }
    result.extend(
        difference(&log_levels(series), 1)
            .into_iter()
            .map(|g| g * factor),
    );
    result
}

/// Rebuild levels from annualized log differences.
///
/// `first_level` is the observation preceding the first difference. The
/// output has `diffs.len() + 1` elements starting with `first_level`.
///
/// # Errors
/// [`PrepError::InvalidParameter`] if `first_level` is not positive or
/// `factor` is zero or non-finite. NaN differences are carried through.
pub fn inverse_annualized_log_difference(
    diffs: &[f64],
    first_level: f64,
    factor: f64,
) -> Result<Vec<f64>> {
    if first_level.is_nan() || first_level <= 0.0 {
        return Err(PrepError::InvalidParameter(format!(
            "first level must be positive, got {}",
            first_level
        )));
    }
    if factor == 0.0 || !factor.is_finite() {
        return Err(PrepError::InvalidParameter(format!(
            "annualization factor must be finite and non-zero, got {}",
            factor
        )));
    }

    let mut levels = Vec::with_capacity(diffs.len() + 1);
    let mut log_level = first_level.ln();
    levels.push(first_level);
    for &d in diffs {
        log_level += d / factor;
        levels.push(log_level.exp());
    }
    Ok(levels)
}
