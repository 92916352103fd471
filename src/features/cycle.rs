//! Business-cycle moments of detrended series.
//!
//! The standard summary for a cyclical component: how volatile it is, how
//! volatile relative to output, how persistent, and how it co-moves with
//! output at leads and lags.

use super::basic::standard_deviation;
use super::correlation::{autocorrelation, correlation, lagged_correlation};
use crate::error::{PrepError, Result};

/// Cycle statistics of a series relative to a reference (usually output).
#[derive(Debug, Clone, PartialEq)]
pub struct CycleMoments {
    /// Standard deviation of the series.
    pub std_dev: f64,
    /// Standard deviation relative to the reference's.
    pub relative_std: f64,
    /// First-order autocorrelation.
    pub autocorrelation: f64,
    /// Contemporaneous correlation with the reference.
    pub correlation: f64,
    /// Lag with the largest absolute correlation; positive when the series
    /// lags the reference.
    pub peak_lag: isize,
    /// Correlation at `peak_lag`.
    pub peak_correlation: f64,
}

impl CycleMoments {
    /// Compute moments of `series` against `reference`, searching leads and
    /// lags in `-max_lag..=max_lag`.
    ///
    /// NaN observations (e.g. a differenced column's first row) must be
    /// dropped beforehand.
    ///
    /// # Errors
    /// - [`PrepError::EmptyData`] for empty input
    /// - [`PrepError::DimensionMismatch`] if the lengths differ
    /// - [`PrepError::InsufficientData`] if the series is shorter than `max_lag + 2`
    pub fn compute(series: &[f64], reference: &[f64], max_lag: usize) -> Result<Self> {
        let contemporaneous = correlation(series, reference)?;

        let needed = max_lag.saturating_add(2);
        if series.len() < needed {
            return Err(PrepError::InsufficientData {
                needed,
                got: series.len(),
            });
        }

        let std_dev = standard_deviation(series);
        let reference_std = standard_deviation(reference);
        let relative_std = if reference_std < 1e-12 {
            f64::NAN
        } else {
            std_dev / reference_std
        };

        let mut peak_lag = 0;
        let mut peak_correlation = contemporaneous;
        let max_lag = max_lag as isize;
        for lag in -max_lag..=max_lag {
            let c = lagged_correlation(series, reference, lag)?;
            if c.abs() > peak_correlation.abs() {
                peak_lag = lag;
                peak_correlation = c;
            }
        }

        Ok(Self {
            std_dev,
            relative_std,
            autocorrelation: autocorrelation(series, 1),
            correlation: contemporaneous,
            peak_lag,
            peak_correlation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn wave(n: usize, amplitude: f64, shift: f64) -> Vec<f64> {
        (0..n)
            .map(|i| amplitude * (2.0 * std::f64::consts::PI * (i as f64 - shift) / 32.0).sin())
            .collect()
    }

    #[test]
    fn moments_of_series_against_itself() {
        let output = wave(128, 0.02, 0.0);
        let m = CycleMoments::compute(&output, &output, 4).unwrap();

        assert_relative_eq!(m.relative_std, 1.0, epsilon = 1e-12);
        assert_relative_eq!(m.correlation, 1.0, epsilon = 1e-12);
        assert_eq!(m.peak_lag, 0);
        assert!(m.autocorrelation > 0.9);
    }

    #[test]
    fn volatile_lagging_series() {
        let output = wave(128, 0.01, 0.0);
        let investment = wave(128, 0.03, 2.0);
        let m = CycleMoments::compute(&investment, &output, 6).unwrap();

        assert_relative_eq!(m.relative_std, 3.0, epsilon = 1e-9);
        assert_eq!(m.peak_lag, 2);
        assert!(m.peak_correlation > 0.95);
        assert!(m.correlation < m.peak_correlation);
    }

    #[test]
    fn leading_series_has_negative_peak_lag() {
        let output = wave(128, 0.01, 0.0);
        let leading = wave(128, 0.01, -3.0);
        let m = CycleMoments::compute(&leading, &output, 6).unwrap();
        assert_eq!(m.peak_lag, -3);
    }

    #[test]
    fn countercyclical_series() {
        let output = wave(128, 0.01, 0.0);
        let counter: Vec<f64> = output.iter().map(|x| -0.5 * x).collect();
        let m = CycleMoments::compute(&counter, &output, 2).unwrap();

        assert_relative_eq!(m.correlation, -1.0, epsilon = 1e-12);
        assert_relative_eq!(m.relative_std, 0.5, epsilon = 1e-12);
        assert_eq!(m.peak_lag, 0);
    }

    #[test]
    fn validates_input() {
        assert_eq!(
            CycleMoments::compute(&[], &[], 1).unwrap_err(),
            PrepError::EmptyData
        );
        assert!(matches!(
            CycleMoments::compute(&[1.0, 2.0, 3.0], &[1.0, 2.0], 1),
            Err(PrepError::DimensionMismatch { .. })
        ));
        assert_eq!(
            CycleMoments::compute(&[1.0, 2.0, 3.0], &[3.0, 1.0, 2.0], 4).unwrap_err(),
            PrepError::InsufficientData { needed: 6, got: 3 }
        );
    }

    #[test]
    fn huge_max_lag_is_insufficient_data() {
        let series = wave(10, 1.0, 0.0);
        assert_eq!(
            CycleMoments::compute(&series, &series, usize::MAX).unwrap_err(),
            PrepError::InsufficientData {
                needed: usize::MAX,
                got: 10
            }
        );
    }
}
