//! Hodrick-Prescott trend filter.
//!
//! The trend `tau` minimises
//!
//! ```text
//! sum_t (y_t - tau_t)^2 + lambda * sum_t (tau_{t+1} - 2 tau_t + tau_{t-1})^2
//! ```
//!
//! which amounts to solving `(I + lambda * D'D) tau = y` with `D` the
//! second-difference operator. The cycle is `y - tau`.

use crate::core::Frequency;
use crate::error::{PrepError, Result};
use crate::utils::banded::SymmetricPentadiagonal;

/// Smoothing parameter conventionally used for quarterly data, and the
/// default of the filter regardless of frequency.
pub const DEFAULT_LAMBDA: f64 = 1600.0;

/// Result of an HP decomposition.
#[derive(Debug, Clone)]
pub struct HPResult {
    /// Smooth trend component.
    pub trend: Vec<f64>,
    /// Cyclical component (`series - trend`).
    pub cycle: Vec<f64>,
}

impl HPResult {
    /// Share of the series variance explained by the trend (0 to 1).
    pub fn trend_strength(&self) -> f64 {
        let var_cycle = variance(&self.cycle);
        let total: Vec<f64> = self
            .trend
            .iter()
            .zip(self.cycle.iter())
            .map(|(t, c)| t + c)
            .collect();
        let var_total = variance(&total);

        if var_total < 1e-12 {
            return 0.0;
        }

        (1.0 - var_cycle / var_total).max(0.0)
    }

    pub fn len(&self) -> usize {
        self.trend.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trend.is_empty()
    }
}

/// Hodrick-Prescott filter configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HPFilter {
    lambda: f64,
}

impl Default for HPFilter {
    fn default() -> Self {
        Self {
            lambda: DEFAULT_LAMBDA,
        }
    }
}

impl HPFilter {
    /// Create a filter with the given smoothing parameter.
    pub fn new(lambda: f64) -> Self {
        Self { lambda }
    }

    /// Create a filter with the Ravn-Uhlig smoothing parameter for `frequency`.
    pub fn for_frequency(frequency: Frequency) -> Self {
        Self::new(frequency.hp_lambda())
    }

    /// Set the smoothing parameter.
    pub fn with_lambda(mut self, lambda: f64) -> Self {
        self.lambda = lambda;
        self
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Decompose a series into trend and cycle.
    ///
    /// Series of one or two observations carry no curvature, so the trend
    /// equals the series.
    ///
    /// # Errors
    /// - [`PrepError::EmptyData`] for an empty series
    /// - [`PrepError::InvalidParameter`] for a negative or non-finite lambda
    /// - [`PrepError::ComputationError`] if the normal equations cannot be solved
    pub fn decompose(&self, series: &[f64]) -> Result<HPResult> {
        if series.is_empty() {
            return Err(PrepError::EmptyData);
        }
        if !self.lambda.is_finite() || self.lambda < 0.0 {
            return Err(PrepError::InvalidParameter(format!(
                "HP lambda must be finite and non-negative, got {}",
                self.lambda
            )));
        }

        let n = series.len();
        let trend = if n < 3 || self.lambda == 0.0 {
            series.to_vec()
        } else {
            self.system(n).solve(series).ok_or_else(|| {
                PrepError::ComputationError(
                    "HP normal equations are not positive definite".into(),
                )
            })?
        };

        let cycle = series.iter().zip(trend.iter()).map(|(y, t)| y - t).collect();

        Ok(HPResult { trend, cycle })
    }

    /// Build `I + lambda * D'D` for a series of length `n >= 3`.
    fn system(&self, n: usize) -> SymmetricPentadiagonal {
        const STENCIL: [f64; 3] = [1.0, -2.0, 1.0];

        let mut a = SymmetricPentadiagonal::zeros(n);
        a.diag.iter_mut().for_each(|d| *d = 1.0);

        // Each row k of D touches columns k, k+1, k+2
        for k in 0..n - 2 {
            for i in 0..3 {
                a.diag[k + i] += self.lambda * STENCIL[i] * STENCIL[i];
                for j in i + 1..3 {
                    let v = self.lambda * STENCIL[i] * STENCIL[j];
                    match j - i {
                        1 => a.upper1[k + i] += v,
                        _ => a.upper2[k + i] += v,
                    }
                }
            }
        }

        a
    }
}

fn variance(series: &[f64]) -> f64 {
    if series.len() < 2 {
        return 0.0;
    }
    let mean = series.iter().sum::<f64>() / series.len() as f64;
    series.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (series.len() - 1) as f64
}
