//! Serial and cross correlation of series.

use super::basic::{mean, standard_deviation};
use crate::error::{PrepError, Result};

/// Returns the autocorrelation at a specific lag.
///
/// Uses the full-sample variance in the denominator, so values shrink
/// towards zero at long lags. Constant series return 0.
///
/// # Arguments
/// * `series` - Input time series
/// * `lag` - Lag value
pub fn autocorrelation(series: &[f64], lag: usize) -> f64 {
    if series.len() <= lag {
        return f64::NAN;
    }

    let m = mean(series);

    let mut numerator = 0.0;
    let mut denominator = 0.0;

    for (i, &x) in series.iter().enumerate() {
        denominator += (x - m).powi(2);
        if i >= lag {
            numerator += (x - m) * (series[i - lag] - m);
        }
    }

    if denominator < 1e-10 {
        return 0.0;
    }

    numerator / denominator
}

/// Pearson correlation of two equally long series.
///
/// Returns 0 when either series is constant.
///
/// # Errors
/// - [`PrepError::EmptyData`] for empty input
/// - [`PrepError::DimensionMismatch`] if the lengths differ
pub fn correlation(x: &[f64], y: &[f64]) -> Result<f64> {
    check_pair(x, y)?;
    Ok(lagged(x, y, 0, mean(x), mean(y), scale(x, y)))
}

/// Cross-correlation function for lags `0..nlags`.
///
/// Element `k` correlates `x[t + k]` with `y[t]`:
///
/// ```text
/// ccf[k] = sum_{t=0}^{n-1-k} (x[t+k] - mean_x) (y[t] - mean_y) / (n - k) / (std_x * std_y)
/// ```
///
/// A peak at positive `k` means `x` lags `y` by `k` periods. `nlags` is
/// capped at the series length.
///
/// # Errors
/// - [`PrepError::EmptyData`] for empty input
/// - [`PrepError::DimensionMismatch`] if the lengths differ
pub fn cross_correlation(x: &[f64], y: &[f64], nlags: usize) -> Result<Vec<f64>> {
    check_pair(x, y)?;

    let mx = mean(x);
    let my = mean(y);
    let s = scale(x, y);

    Ok((0..nlags.min(x.len()))
        .map(|k| lagged(x, y, k, mx, my, s))
        .collect())
}

/// Correlation of `x[t + lag]` with `y[t]` for a signed lag.
///
/// Negative lags correlate `x[t]` with `y[t + |lag|]`, i.e. `x` leads `y`.
/// Returns NaN when `|lag|` is not shorter than the series.
pub fn lagged_correlation(x: &[f64], y: &[f64], lag: isize) -> Result<f64> {
    check_pair(x, y)?;

    let k = lag.unsigned_abs();
    if k >= x.len() {
        return Ok(f64::NAN);
    }

    let mx = mean(x);
    let my = mean(y);
    let s = scale(x, y);

    Ok(if lag >= 0 {
        lagged(x, y, k, mx, my, s)
    } else {
        lagged(y, x, k, my, mx, s)
    })
}

fn check_pair(x: &[f64], y: &[f64]) -> Result<()> {
    if x.is_empty() || y.is_empty() {
        return Err(PrepError::EmptyData);
    }
    if x.len() != y.len() {
        return Err(PrepError::DimensionMismatch {
            expected: x.len(),
            got: y.len(),
        });
    }
    Ok(())
}

fn scale(x: &[f64], y: &[f64]) -> f64 {
    standard_deviation(x) * standard_deviation(y)
}

/// Adjusted cross-covariance at lag `k` divided by `scale`.
fn lagged(x: &[f64], y: &[f64], k: usize, mx: f64, my: f64, scale: f64) -> f64 {
    if scale < 1e-12 {
        return 0.0;
    }
    let n = x.len();
    let cov: f64 = x[k..]
        .iter()
        .zip(y[..n - k].iter())
        .map(|(a, b)| (a - mx) * (b - my))
        .sum::<f64>()
        / (n - k) as f64;
    cov / scale
}
